//! Error type for `papershelf-store-sqlite`.

use papershelf_core::paper::PaperId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] papershelf_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("paper not found: {0}")]
  PaperNotFound(PaperId),

  /// `last_added` was called on an empty store.
  #[error("no papers in the store")]
  NoPapers,

  #[error("paper {0} has no keyword {1:?}")]
  KeywordNotFound(PaperId, String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
