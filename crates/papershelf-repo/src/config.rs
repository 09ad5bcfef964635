//! Repository location configuration.
//!
//! A repository lives in one base directory holding the metadata database
//! and the storage tree:
//!
//! ```text
//! $PAPERS_DIR/
//! ├── papers.db
//! └── storage/
//!     └── <normalized title>/
//! ```

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result, storage::FileStorage};

/// Environment variable naming the repository base directory.
pub const ENV_VAR: &str = "PAPERS_DIR";

/// Database filename under the base directory.
pub const DB_NAME: &str = "papers.db";

/// Storage tree directory name under the base directory.
pub const STORAGE_DIR_NAME: &str = "storage";

/// Resolved repository location.
#[derive(Debug, Clone)]
pub struct RepoConfig {
  base_dir: PathBuf,
}

impl RepoConfig {
  /// Use an explicit base directory.
  pub fn new(base_dir: impl Into<PathBuf>) -> Self {
    Self { base_dir: base_dir.into() }
  }

  /// Resolve the base directory from `override_dir`, falling back to the
  /// environment variable. Having neither is a fatal configuration error.
  pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
    override_dir
      .or_else(|| std::env::var_os(ENV_VAR).map(PathBuf::from))
      .map(Self::new)
      .ok_or(Error::MissingBaseDir)
  }

  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }

  pub fn db_path(&self) -> PathBuf {
    self.base_dir.join(DB_NAME)
  }

  pub fn storage_dir(&self) -> PathBuf {
    self.base_dir.join(STORAGE_DIR_NAME)
  }

  /// Lay out a brand-new repository: the base directory must not exist
  /// yet. Creates the base directory and the storage root; the caller
  /// creates the database inside.
  pub async fn init_layout(&self) -> Result<FileStorage> {
    if fs::try_exists(&self.base_dir).await? {
      return Err(Error::AlreadyInitialized(self.base_dir.clone()));
    }
    fs::create_dir_all(&self.base_dir).await?;
    let storage = FileStorage::create(self.storage_dir()).await?;
    tracing::info!(base_dir = %self.base_dir.display(), "initialized repository layout");
    Ok(storage)
  }
}
