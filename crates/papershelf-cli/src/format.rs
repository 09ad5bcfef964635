//! Single-line and block formatting for paper entries.

use chrono::{DateTime, Utc};
use papershelf_core::{paper::Paper, status::ReadingStatus};

use crate::color;

/// Gap between list columns.
const GAP: &str = "    ";

/// One list line: right-justified id, then optional date and colored
/// status columns, then the title.
pub fn entry(paper: &Paper, show_status: bool, show_date: bool) -> String {
  let mut columns = vec![format!("{:>4}", paper.id)];
  if show_date {
    columns.push(display_date(paper.added_at));
  }
  if show_status {
    let name = format!(
      "{:>width$}",
      paper.status.as_str(),
      width = ReadingStatus::max_name_len()
    );
    columns.push(color::wrap(&name, color::status_color(paper.status)));
  }
  columns.push(paper.title.clone());
  columns.join(GAP)
}

/// `Mon DD, YYYY` display form of an added-at timestamp.
fn display_date(at: DateTime<Utc>) -> String {
  at.format("%b %d, %Y").to_string()
}

/// Two-line title + keywords block used by `word -l` and `search`.
pub fn title_keywords(title: &str, keywords: &[String]) -> String {
  format!("   Title: '{}'\nKeywords: {}", title, keywords.join(", "))
}
