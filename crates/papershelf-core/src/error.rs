//! Error types for `papershelf-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown reading status: {0:?}")]
  UnknownStatus(String),

  #[error("unknown status code: {0}")]
  UnknownStatusCode(i64),

  #[error("invalid paper id {0:?}: expected a number or \"last\"")]
  InvalidPaperRef(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
