//! Reading status — the one mutable field on a paper record.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How far along the user is with a paper.
///
/// Persisted as the integer codes 0–3 for compact storage and stable
/// ordering, displayed by name. It is a label, not a workflow state machine:
/// any status may be set from any other at any time.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
  #[default]
  Unread,
  Wip,
  Skimmed,
  Read,
}

impl ReadingStatus {
  /// Every status, in reading order.
  pub const ALL: [Self; 4] =
    [Self::Unread, Self::Wip, Self::Skimmed, Self::Read];

  /// The integer code stored in the `status` column.
  pub fn code(self) -> i64 {
    match self {
      Self::Unread => 0,
      Self::Wip => 1,
      Self::Skimmed => 2,
      Self::Read => 3,
    }
  }

  /// Decode a persisted status code.
  pub fn from_code(code: i64) -> Result<Self> {
    match code {
      0 => Ok(Self::Unread),
      1 => Ok(Self::Wip),
      2 => Ok(Self::Skimmed),
      3 => Ok(Self::Read),
      other => Err(Error::UnknownStatusCode(other)),
    }
  }

  /// The lowercase name shown to the user and accepted on the command line.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Unread => "unread",
      Self::Wip => "wip",
      Self::Skimmed => "skimmed",
      Self::Read => "read",
    }
  }

  /// Length of the longest status name, for column alignment.
  pub fn max_name_len() -> usize {
    Self::ALL
      .iter()
      .map(|s| s.as_str().len())
      .max()
      .unwrap_or(0)
  }
}

impl FromStr for ReadingStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "unread" => Ok(Self::Unread),
      "wip" => Ok(Self::Wip),
      "skimmed" => Ok(Self::Skimmed),
      "read" => Ok(Self::Read),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}

impl fmt::Display for ReadingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_round_trip() {
    for status in ReadingStatus::ALL {
      assert_eq!(ReadingStatus::from_code(status.code()).unwrap(), status);
    }
  }

  #[test]
  fn unknown_code_is_rejected() {
    assert!(matches!(
      ReadingStatus::from_code(4),
      Err(Error::UnknownStatusCode(4))
    ));
  }

  #[test]
  fn names_parse_and_display() {
    for status in ReadingStatus::ALL {
      assert_eq!(status.as_str().parse::<ReadingStatus>().unwrap(), status);
      assert_eq!(status.to_string(), status.as_str());
    }
  }

  #[test]
  fn unrecognized_name_is_rejected() {
    let err = "Read".parse::<ReadingStatus>().unwrap_err();
    assert!(matches!(err, Error::UnknownStatus(s) if s == "Read"));
  }

  #[test]
  fn statuses_are_ordered() {
    assert!(ReadingStatus::Unread < ReadingStatus::Wip);
    assert!(ReadingStatus::Wip < ReadingStatus::Skimmed);
    assert!(ReadingStatus::Skimmed < ReadingStatus::Read);
  }

  #[test]
  fn default_is_unread() {
    assert_eq!(ReadingStatus::default(), ReadingStatus::Unread);
  }
}
