//! Decoding helpers between SQLite rows and domain types.
//!
//! Timestamps persist in SQLite's `CURRENT_TIMESTAMP` text format
//! (`YYYY-MM-DD HH:MM:SS`, UTC) so databases written by earlier versions
//! of the tool read back unchanged.

use chrono::{DateTime, NaiveDateTime, Utc};
use papershelf_core::{paper::Paper, status::ReadingStatus};

use crate::{Error, Result};

/// Format of the `date_added` column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
    .map(|naive| naive.and_utc())
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// Raw values read directly from a `papers` row.
pub struct RawPaper {
  pub id:         i64,
  pub title:      String,
  pub relpath:    String,
  pub date_added: String,
  pub status:     i64,
}

impl RawPaper {
  /// Row mapper for `SELECT id, title, relpath, date_added, status`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      title:      row.get(1)?,
      relpath:    row.get(2)?,
      date_added: row.get(3)?,
      status:     row.get(4)?,
    })
  }

  pub fn into_paper(self) -> Result<Paper> {
    Ok(Paper {
      id:       self.id,
      title:    self.title,
      relpath:  self.relpath,
      added_at: decode_dt(&self.date_added)?,
      status:   ReadingStatus::from_code(self.status)
        .map_err(Error::Core)?,
    })
  }
}
