//! Integration tests for `SqliteStore` against an in-memory database.

use papershelf_core::{
  paper::NewPaper,
  search::SearchFilter,
  status::ReadingStatus,
  store::PaperStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

fn paper(title: &str, relpath: &str, keywords: &[&str]) -> NewPaper {
  NewPaper {
    title:    title.to_owned(),
    relpath:  relpath.to_owned(),
    keywords: keywords.iter().map(|w| w.to_string()).collect(),
  }
}

fn title_filter(t: &str) -> SearchFilter {
  SearchFilter { title: Some(t.to_owned()), keyword: None }
}

fn keyword_filter(k: &str) -> SearchFilter {
  SearchFilter { title: None, keyword: Some(k.to_owned()) }
}

// ─── Records ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_roundtrip() {
  let s = store().await;

  let id = s
    .insert(paper("Reflections on Trusting Trust", "reflections", &[]))
    .await
    .unwrap();

  let found = s.find(id).await.unwrap();
  assert_eq!(found.id, id);
  assert_eq!(found.title, "Reflections on Trusting Trust");
  assert_eq!(found.relpath, "reflections");
  assert_eq!(found.status, ReadingStatus::Unread);
}

#[tokio::test]
async fn find_missing_errors() {
  let s = store().await;
  let err = s.find(999).await.unwrap_err();
  assert!(matches!(err, Error::PaperNotFound(999)));
}

#[tokio::test]
async fn last_added_on_empty_store_errors() {
  let s = store().await;
  assert!(matches!(s.last_added().await.unwrap_err(), Error::NoPapers));
}

#[tokio::test]
async fn last_added_prefers_newest() {
  let s = store().await;

  s.insert(paper("First", "first", &[])).await.unwrap();
  let second = s.insert(paper("Second", "second", &[])).await.unwrap();

  // Same-second timestamps are common here; the id tie-break must still
  // pick the newest insertion.
  let last = s.last_added().await.unwrap();
  assert_eq!(last.id, second);
}

#[tokio::test]
async fn last_added_is_stable_across_reads() {
  let s = store().await;

  s.insert(paper("A", "a", &["security"])).await.unwrap();
  let b = s.insert(paper("B", "b", &[])).await.unwrap();

  // Read-only operations must not change what "last" resolves to.
  s.search(&SearchFilter::default()).await.unwrap();
  s.search(&keyword_filter("sec")).await.unwrap();
  s.keywords_for(b).await.unwrap();

  assert_eq!(s.last_added().await.unwrap().id, b);
}

#[tokio::test]
async fn remove_returns_relpath_and_cascades_keywords() {
  let s = store().await;

  let id = s
    .insert(paper("Tagged", "tagged", &["security", "compilers"]))
    .await
    .unwrap();

  let relpath = s.remove(id).await.unwrap();
  assert_eq!(relpath, "tagged");

  assert!(matches!(s.find(id).await.unwrap_err(), Error::PaperNotFound(_)));
  // Keyword rows must go with the record, not linger as orphans.
  assert!(s.keywords_for(id).await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_missing_errors() {
  let s = store().await;
  assert!(matches!(
    s.remove(7).await.unwrap_err(),
    Error::PaperNotFound(7)
  ));
}

// ─── Keywords ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_trims_keywords_and_keeps_duplicates() {
  let s = store().await;

  let id = s
    .insert(paper("P", "p", &[" security ", "security", "perf"]))
    .await
    .unwrap();

  let words = s.keywords_for(id).await.unwrap();
  assert_eq!(words, ["security", "security", "perf"]);
}

#[tokio::test]
async fn add_keyword_trims_the_word() {
  let s = store().await;
  let id = s.insert(paper("P", "p", &[])).await.unwrap();

  s.add_keyword(id, "  fuzzing ".to_owned()).await.unwrap();
  assert_eq!(s.keywords_for(id).await.unwrap(), ["fuzzing"]);
}

#[tokio::test]
async fn add_keyword_to_missing_paper_errors() {
  let s = store().await;
  let err = s.add_keyword(3, "security".to_owned()).await.unwrap_err();
  assert!(matches!(err, Error::PaperNotFound(3)));
}

#[tokio::test]
async fn remove_keyword_deletes_every_exact_match() {
  let s = store().await;
  let id = s
    .insert(paper("P", "p", &["dup", "dup", "keep"]))
    .await
    .unwrap();

  s.remove_keyword(id, "dup".to_owned()).await.unwrap();
  assert_eq!(s.keywords_for(id).await.unwrap(), ["keep"]);
}

#[tokio::test]
async fn remove_keyword_is_case_sensitive() {
  let s = store().await;
  let id = s.insert(paper("P", "p", &["Security"])).await.unwrap();

  let err = s.remove_keyword(id, "security".to_owned()).await.unwrap_err();
  assert!(matches!(err, Error::KeywordNotFound(_, _)));
  assert_eq!(s.keywords_for(id).await.unwrap(), ["Security"]);
}

#[tokio::test]
async fn remove_missing_keyword_errors() {
  let s = store().await;
  let id = s.insert(paper("P", "p", &[])).await.unwrap();

  let err = s.remove_keyword(id, "absent".to_owned()).await.unwrap_err();
  assert!(matches!(err, Error::KeywordNotFound(pid, w) if pid == id && w == "absent"));
}

#[tokio::test]
async fn keywords_for_is_idempotent() {
  let s = store().await;
  let id = s
    .insert(paper("P", "p", &["security", "perf"]))
    .await
    .unwrap();

  let first = s.keywords_for(id).await.unwrap();
  let second = s.keywords_for(id).await.unwrap();
  assert_eq!(first, second);
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_with_no_filter_matches_all_newest_first() {
  let s = store().await;
  let a = s.insert(paper("A", "a", &[])).await.unwrap();
  let b = s.insert(paper("B", "b", &[])).await.unwrap();

  let results = s.search(&SearchFilter::default()).await.unwrap();
  let ids: Vec<_> = results.iter().map(|(p, _)| p.id).collect();
  assert_eq!(ids, [b, a]);
}

#[tokio::test]
async fn search_by_title_is_case_insensitive() {
  let s = store().await;
  s.insert(paper("Reflections on X", "reflections_on_x", &[]))
    .await
    .unwrap();
  s.insert(paper("Unrelated", "unrelated", &[])).await.unwrap();

  let results = s.search(&title_filter("REFLECTIONS")).await.unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].0.title, "Reflections on X");
}

#[tokio::test]
async fn search_by_title_only_excludes_non_matching() {
  let s = store().await;
  s.insert(paper("Reflections on X", "reflections_on_x", &[]))
    .await
    .unwrap();
  s.insert(paper("Unrelated", "unrelated", &["x"])).await.unwrap();

  // A title filter alone must not drag in records that only a keyword
  // would match.
  let results = s.search(&title_filter("reflections")).await.unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].0.relpath, "reflections_on_x");
}

#[tokio::test]
async fn search_by_keyword_substring() {
  let s = store().await;
  s.insert(paper("Tagged", "tagged", &["security", "perf"]))
    .await
    .unwrap();
  s.insert(paper("Other", "other", &["parsing"])).await.unwrap();

  let results = s.search(&keyword_filter("sec")).await.unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].0.title, "Tagged");
  assert_eq!(results[0].1, ["security", "perf"]);
}

// Both filters together widen the result set (OR), they do not narrow it
// (AND). Long-standing behavior; do not "fix".
#[tokio::test]
async fn search_with_both_filters_is_or_not_and() {
  let s = store().await;
  s.insert(paper("Trusting Trust", "trusting_trust", &["compilers"]))
    .await
    .unwrap();
  s.insert(paper("Unrelated", "unrelated", &["security"]))
    .await
    .unwrap();
  s.insert(paper("Noise", "noise", &["perf"])).await.unwrap();

  let filter = SearchFilter {
    title:   Some("trust".to_owned()),
    keyword: Some("sec".to_owned()),
  };
  let results = s.search(&filter).await.unwrap();
  let titles: Vec<_> = results.iter().map(|(p, _)| p.title.as_str()).collect();
  assert_eq!(titles.len(), 2);
  assert!(titles.contains(&"Trusting Trust"));
  assert!(titles.contains(&"Unrelated"));
}

// ─── Status ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_status_and_read_back() {
  let s = store().await;
  let id = s.insert(paper("P", "p", &[])).await.unwrap();

  s.update_status(id, ReadingStatus::Read).await.unwrap();
  assert_eq!(s.find(id).await.unwrap().status, ReadingStatus::Read);
}

#[tokio::test]
async fn update_status_on_missing_paper_errors() {
  let s = store().await;
  let err = s.update_status(12, ReadingStatus::Wip).await.unwrap_err();
  assert!(matches!(err, Error::PaperNotFound(12)));
}
