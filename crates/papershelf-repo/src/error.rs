//! Error type for `papershelf-repo`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Neither an explicit directory nor the environment variable named a
  /// base directory.
  #[error(
    "no papers directory configured; export {} or pass --dir",
    crate::config::ENV_VAR
  )]
  MissingBaseDir,

  #[error("repository already initialized at {0}")]
  AlreadyInitialized(PathBuf),

  #[error("storage root {0} already exists")]
  StorageExists(PathBuf),

  #[error("storage root {0} does not exist; run `papers init` first")]
  StorageMissing(PathBuf),

  #[error("source file {0} does not exist")]
  SourceMissing(PathBuf),

  #[error("source path {0} has no file name")]
  InvalidSource(PathBuf),

  #[error("paper directory {0} already exists")]
  PaperDirExists(PathBuf),

  #[error("paper directory {0} does not exist")]
  PaperDirMissing(PathBuf),

  /// `filter` requires at least a title or a keyword filter.
  #[error("either a title or a keyword filter is required")]
  EmptyFilter,

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a metadata-store backend error.
  pub(crate) fn store(
    e: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
