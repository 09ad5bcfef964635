//! ANSI color handling for terminal output.

use papershelf_core::{search::match_ranges, status::ReadingStatus};

pub const FAIL: &str = "\x1b[91m";
pub const MATCHING: &str = "\x1b[38;5;120m";
const STATUS_UNREAD: &str = "\x1b[38;5;219m";
const STATUS_WIP: &str = "\x1b[38;5;195m";
const STATUS_SKIMMED: &str = "\x1b[38;5;210m";
const STATUS_READ: &str = "\x1b[38;5;198m";
const RESET: &str = "\x1b[0m";

/// Wrap `s` in a color code and the terminator.
pub fn wrap(s: &str, color: &str) -> String {
  format!("{color}{s}{RESET}")
}

pub fn status_color(status: ReadingStatus) -> &'static str {
  match status {
    ReadingStatus::Unread => STATUS_UNREAD,
    ReadingStatus::Wip => STATUS_WIP,
    ReadingStatus::Skimmed => STATUS_SKIMMED,
    ReadingStatus::Read => STATUS_READ,
  }
}

/// Highlight every case-insensitive occurrence of `needle` in `s`,
/// keeping the case of the original text.
pub fn highlight_matches(s: &str, needle: &str) -> String {
  let ranges = match_ranges(s, needle);
  if ranges.is_empty() {
    return s.to_owned();
  }

  let mut out = String::with_capacity(
    s.len() + ranges.len() * (MATCHING.len() + RESET.len()),
  );
  let mut at = 0;
  for range in ranges {
    out.push_str(&s[at..range.start]);
    out.push_str(MATCHING);
    out.push_str(&s[range.clone()]);
    out.push_str(RESET);
    at = range.end;
  }
  out.push_str(&s[at..]);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn highlight_keeps_original_case() {
    let out = highlight_matches("Security and SECRETS", "sec");
    assert_eq!(
      out,
      format!(
        "{MATCHING}Sec{RESET}urity and {MATCHING}SEC{RESET}RETS"
      )
    );
  }

  #[test]
  fn no_match_passes_through_unchanged() {
    assert_eq!(highlight_matches("plain", "zzz"), "plain");
  }
}
