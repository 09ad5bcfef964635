//! [`Repository`] — the coordinator across the metadata store and the
//! file storage.
//!
//! Import is storage-first, metadata-second; deletion is metadata-first,
//! storage-second. The cross-store correspondence is best-effort: a
//! failure between the two steps of an operation leaves an orphaned
//! directory rather than rolling back. Errors are surfaced, never
//! retried.

use std::path::{Path, PathBuf};

use papershelf_core::{
  paper::{NewPaper, Paper, PaperId, PaperRef},
  search::SearchFilter,
  status::ReadingStatus,
  store::PaperStore,
};
use tokio::fs;

use crate::{Error, Result, storage::FileStorage};

/// The full paper-lifecycle API over a metadata store backend and a
/// storage tree.
pub struct Repository<S> {
  store:   S,
  storage: FileStorage,
}

impl<S: PaperStore> Repository<S> {
  pub fn new(store: S, storage: FileStorage) -> Self {
    Self { store, storage }
  }

  pub fn storage(&self) -> &FileStorage {
    &self.storage
  }

  // ── Lifecycle ─────────────────────────────────────────────────────────────

  /// Import a paper: copy `file` into a fresh storage directory, then
  /// insert the metadata record. Returns the new record.
  pub async fn add(
    &self,
    file: &Path,
    title: &str,
    keywords: Vec<String>,
  ) -> Result<Paper> {
    if !fs::try_exists(file).await? {
      return Err(Error::SourceMissing(file.to_path_buf()));
    }

    let relpath = self.storage.add(file, title).await?;
    // Storage first, metadata second: if this insert fails, the new
    // directory is left orphaned (accepted partial-failure window).
    let id = self
      .store
      .insert(NewPaper {
        title: title.to_owned(),
        relpath,
        keywords,
      })
      .await
      .map_err(Error::store)?;

    self.store.find(id).await.map_err(Error::store)
  }

  /// Delete a paper record and its storage directory.
  pub async fn delete(&self, paper: PaperRef) -> Result<PaperId> {
    let id = self.resolve(paper).await?;
    // Metadata first, storage second: a failed directory removal leaves
    // the directory orphaned with no owning record.
    let relpath = self.store.remove(id).await.map_err(Error::store)?;
    self.storage.delete(&relpath).await?;
    Ok(id)
  }

  // ── Queries ───────────────────────────────────────────────────────────────

  /// All papers, newest first.
  pub async fn list(&self) -> Result<Vec<Paper>> {
    let rows = self
      .store
      .search(&SearchFilter::default())
      .await
      .map_err(Error::store)?;
    Ok(rows.into_iter().map(|(paper, _)| paper).collect())
  }

  /// Papers matching `filter`, with their keywords. At least one of the
  /// two filters must be set.
  pub async fn filter(
    &self,
    filter: &SearchFilter,
  ) -> Result<Vec<(Paper, Vec<String>)>> {
    if filter.is_empty() {
      return Err(Error::EmptyFilter);
    }
    self.store.search(filter).await.map_err(Error::store)
  }

  /// The most recently added paper.
  pub async fn last(&self) -> Result<Paper> {
    self.store.last_added().await.map_err(Error::store)
  }

  /// Fetch a paper, optionally with its keyword set.
  pub async fn retrieve(
    &self,
    paper: PaperRef,
    with_keywords: bool,
  ) -> Result<(Paper, Option<Vec<String>>)> {
    let id = self.resolve(paper).await?;
    let entry = self.store.find(id).await.map_err(Error::store)?;
    let keywords = if with_keywords {
      Some(self.store.keywords_for(id).await.map_err(Error::store)?)
    } else {
      None
    };
    Ok((entry, keywords))
  }

  /// Absolute path of a paper's storage directory.
  pub async fn paper_dir(&self, paper: PaperRef) -> Result<PathBuf> {
    let (entry, _) = self.retrieve(paper, false).await?;
    Ok(self.storage.subdir_for(&entry.relpath))
  }

  // ── Tags and status ───────────────────────────────────────────────────────

  /// Associate a keyword with a paper.
  pub async fn tag(&self, word: String, paper: PaperRef) -> Result<PaperId> {
    let id = self.resolve(paper).await?;
    self
      .store
      .add_keyword(id, word)
      .await
      .map_err(Error::store)?;
    Ok(id)
  }

  /// Remove a keyword from a paper (every exact match).
  pub async fn untag(&self, word: String, paper: PaperRef) -> Result<PaperId> {
    let id = self.resolve(paper).await?;
    self
      .store
      .remove_keyword(id, word)
      .await
      .map_err(Error::store)?;
    Ok(id)
  }

  /// Set the reading status of a paper.
  pub async fn mark(
    &self,
    status: ReadingStatus,
    paper: PaperRef,
  ) -> Result<PaperId> {
    let id = self.resolve(paper).await?;
    self
      .store
      .update_status(id, status)
      .await
      .map_err(Error::store)?;
    Ok(id)
  }

  /// Resolve a [`PaperRef`] to a concrete id. The `last` token resolves
  /// exactly once, here, before the operation dispatches.
  async fn resolve(&self, paper: PaperRef) -> Result<PaperId> {
    match paper {
      PaperRef::Id(id) => Ok(id),
      PaperRef::Last => {
        Ok(self.store.last_added().await.map_err(Error::store)?.id)
      }
    }
  }
}
