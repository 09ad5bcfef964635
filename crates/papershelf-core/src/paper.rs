//! Paper record types.
//!
//! A paper is one imported document: a row in the metadata store plus a
//! storage directory on disk. The relpath is the only link between the two.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, status::ReadingStatus};

/// Row id of a paper record. Monotonically increasing, unique for the
/// store's lifetime.
pub type PaperId = i64;

/// A paper record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
  pub id:       PaperId,
  pub title:    String,
  /// Storage directory, relative to the storage root. Unique across
  /// records; the sole link between the metadata store and the filesystem.
  pub relpath:  String,
  /// Store-assigned at insertion; never changes afterwards.
  pub added_at: DateTime<Utc>,
  pub status:   ReadingStatus,
}

/// Input to [`PaperStore::insert`](crate::store::PaperStore::insert).
///
/// The id, timestamp, and initial `unread` status are store-assigned and
/// not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewPaper {
  pub title:    String,
  pub relpath:  String,
  pub keywords: Vec<String>,
}

/// A user-supplied paper reference: a concrete id, or the token `last`,
/// meaning "whatever the most recently added paper is at the time of the
/// call".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperRef {
  Id(PaperId),
  Last,
}

impl FromStr for PaperRef {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    if s == "last" {
      return Ok(Self::Last);
    }
    s.parse::<PaperId>()
      .map(Self::Id)
      .map_err(|_| Error::InvalidPaperRef(s.to_owned()))
  }
}

impl fmt::Display for PaperRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Id(id) => write!(f, "{id}"),
      Self::Last => f.write_str("last"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numeric_refs_parse() {
    assert_eq!("42".parse::<PaperRef>().unwrap(), PaperRef::Id(42));
  }

  #[test]
  fn last_token_parses() {
    assert_eq!("last".parse::<PaperRef>().unwrap(), PaperRef::Last);
  }

  #[test]
  fn garbage_refs_are_rejected() {
    for bad in ["", "Last", "latest", "12abc"] {
      assert!(matches!(
        bad.parse::<PaperRef>(),
        Err(Error::InvalidPaperRef(_))
      ));
    }
  }
}
