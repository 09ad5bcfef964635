//! Physical placement of paper content on disk.
//!
//! One subdirectory per paper under the storage root, named by the
//! normalized title. Each holds the imported file (original name kept)
//! and a user-editable `notes.txt`. Operations are fail-fast and
//! non-transactional; a failure mid-import can leave a partially
//! populated directory, and no rollback is attempted here.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// Name of the user-editable notes file created on import.
pub const NOTES_FILE: &str = "notes.txt";

/// Directory-safe form of a title: case-folded, every whitespace
/// character replaced with an underscore.
pub fn normalize_title(title: &str) -> String {
  title
    .to_lowercase()
    .chars()
    .map(|c| if c.is_whitespace() { '_' } else { c })
    .collect()
}

/// A directory tree holding one subdirectory per imported paper.
#[derive(Debug, Clone)]
pub struct FileStorage {
  root: PathBuf,
}

impl FileStorage {
  /// Create the storage root for a brand-new repository.
  pub async fn create(root: impl Into<PathBuf>) -> Result<Self> {
    let root = root.into();
    if fs::try_exists(&root).await? {
      return Err(Error::StorageExists(root));
    }
    fs::create_dir_all(&root).await?;
    Ok(Self { root })
  }

  /// Open an existing storage root.
  pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
    let root = root.into();
    let is_dir = fs::metadata(&root)
      .await
      .map(|m| m.is_dir())
      .unwrap_or(false);
    if !is_dir {
      return Err(Error::StorageMissing(root));
    }
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Absolute directory for a paper, given its normalized title (its
  /// relpath — the two coincide). Pure path join, no I/O.
  pub fn subdir_for(&self, normalized: &str) -> PathBuf {
    self.root.join(normalized)
  }

  /// Import `source` under `title`: create the paper directory, copy the
  /// file in (filename and permissions preserved), and create an empty
  /// notes file. Returns the directory path relative to the storage root.
  pub async fn add(&self, source: &Path, title: &str) -> Result<String> {
    let normalized = normalize_title(title);
    let dir = self.subdir_for(&normalized);
    if fs::try_exists(&dir).await? {
      return Err(Error::PaperDirExists(dir));
    }
    let file_name = source
      .file_name()
      .ok_or_else(|| Error::InvalidSource(source.to_path_buf()))?;

    fs::create_dir(&dir).await?;
    fs::copy(source, dir.join(file_name)).await?;
    fs::File::create(dir.join(NOTES_FILE)).await?;
    tracing::debug!(dir = %dir.display(), "materialized paper directory");
    Ok(normalized)
  }

  /// Recursively delete the directory at `relpath`.
  pub async fn delete(&self, relpath: &str) -> Result<()> {
    let dir = self.subdir_for(relpath);
    let is_dir = fs::metadata(&dir)
      .await
      .map(|m| m.is_dir())
      .unwrap_or(false);
    if !is_dir {
      return Err(Error::PaperDirMissing(dir));
    }
    fs::remove_dir_all(&dir).await?;
    tracing::debug!(dir = %dir.display(), "removed paper directory");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_lowercases_and_replaces_whitespace() {
    assert_eq!(
      normalize_title("Reflections on Trusting Trust"),
      "reflections_on_trusting_trust"
    );
    assert_eq!(normalize_title("Tabs\tand  spaces"), "tabs_and__spaces");
    assert_eq!(normalize_title("already_normal"), "already_normal");
  }
}
