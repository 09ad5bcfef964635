//! The `PaperStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `papershelf-store-sqlite`). Higher layers (`papershelf-repo`, the CLI)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  paper::{NewPaper, Paper, PaperId},
  search::SearchFilter,
  status::ReadingStatus,
};

/// Abstraction over a paper metadata store backend.
///
/// The store owns all relational data — paper records and keyword
/// associations — and the search/filter logic. It knows nothing about the
/// filesystem side of a repository; the coordinator keeps the two in step.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait PaperStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Records ───────────────────────────────────────────────────────────

  /// Insert a new paper with the default `unread` status and a
  /// store-assigned timestamp, then one keyword association per word
  /// (surrounding whitespace trimmed; duplicates allowed). Returns the id
  /// of the new record.
  fn insert(
    &self,
    paper: NewPaper,
  ) -> impl Future<Output = Result<PaperId, Self::Error>> + Send + '_;

  /// The most recently added paper: newest timestamp first, ties broken
  /// by highest id (timestamps have second granularity; ids are
  /// monotonic). Errors if the store is empty.
  fn last_added(
    &self,
  ) -> impl Future<Output = Result<Paper, Self::Error>> + Send + '_;

  /// Retrieve a paper by id.
  fn find(
    &self,
    id: PaperId,
  ) -> impl Future<Output = Result<Paper, Self::Error>> + Send + '_;

  /// Delete a paper and all its keyword associations, returning the
  /// relpath so the caller can remove the storage directory.
  fn remove(
    &self,
    id: PaperId,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  // ── Keywords ──────────────────────────────────────────────────────────

  /// Associate `word` (trimmed) with a paper. Duplicates are allowed.
  fn add_keyword(
    &self,
    id: PaperId,
    word: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove every association exactly matching `(id, word)`
  /// (case-sensitive). Errors if nothing matched.
  fn remove_keyword(
    &self,
    id: PaperId,
    word: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All words associated with a paper. The order is stable within a
  /// process run but not otherwise meaningful.
  fn keywords_for(
    &self,
    id: PaperId,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  // ── Search ────────────────────────────────────────────────────────────

  /// All matching `(paper, keywords)` pairs, each record visited at most
  /// once, newest first. See [`SearchFilter::matches`] for the matching
  /// semantics.
  fn search<'a>(
    &'a self,
    filter: &'a SearchFilter,
  ) -> impl Future<Output = Result<Vec<(Paper, Vec<String>)>, Self::Error>>
  + Send
  + 'a;

  // ── Status ────────────────────────────────────────────────────────────

  /// Set the reading status of a paper.
  fn update_status(
    &self,
    id: PaperId,
    status: ReadingStatus,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
