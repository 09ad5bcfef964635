//! Substring search over titles and keywords.
//!
//! Matching is case-insensitive. [`match_ranges`] reports the byte ranges
//! of every occurrence so presentation layers can highlight matches without
//! re-running the scan.

use std::ops::Range;

/// Parameters for [`PaperStore::search`](crate::store::PaperStore::search).
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
  /// Case-insensitive substring filter over titles.
  pub title:   Option<String>,
  /// Case-insensitive substring filter over associated keywords.
  pub keyword: Option<String>,
}

impl SearchFilter {
  /// True when no filter is set — every record matches.
  pub fn is_empty(&self) -> bool {
    self.title.is_none() && self.keyword.is_none()
  }

  /// Whether a record with this title and keyword set matches.
  ///
  /// With both filters set, this is an OR over title-match and
  /// keyword-match, not an AND. Surprising, but long-standing behavior
  /// that existing repositories depend on.
  pub fn matches(&self, title: &str, keywords: &[String]) -> bool {
    if self.is_empty() {
      return true;
    }
    let title_hit = self
      .title
      .as_deref()
      .is_some_and(|t| contains_ci(title, t));
    let keyword_hit = self
      .keyword
      .as_deref()
      .is_some_and(|k| keywords.iter().any(|w| contains_ci(w, k)));
    title_hit || keyword_hit
  }
}

/// Case-insensitive substring containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of
/// `needle` in `haystack`, left to right.
///
/// Ranges index into the original `haystack`, so characters whose lowercase
/// form has a different byte length are handled correctly. An empty needle
/// yields no ranges.
pub fn match_ranges(haystack: &str, needle: &str) -> Vec<Range<usize>> {
  if needle.is_empty() {
    return Vec::new();
  }
  let mut ranges = Vec::new();
  let mut at = 0;
  while at < haystack.len() {
    match match_len_at(&haystack[at..], needle) {
      Some(len) => {
        ranges.push(at..at + len);
        at += len;
      }
      None => {
        // `at` always sits on a char boundary.
        at += haystack[at..].chars().next().map_or(1, char::len_utf8);
      }
    }
  }
  ranges
}

/// If `haystack` starts with `needle` case-insensitively, the byte length
/// of the matched prefix.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
  let mut hay = haystack.chars();
  let mut len = 0;
  for nc in needle.chars() {
    let hc = hay.next()?;
    if !hc.to_lowercase().eq(nc.to_lowercase()) {
      return None;
    }
    len += hc.len_utf8();
  }
  Some(len)
}
