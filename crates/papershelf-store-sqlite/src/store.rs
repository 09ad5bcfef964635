//! [`SqliteStore`] — the SQLite implementation of [`PaperStore`].

use std::path::Path;

use papershelf_core::{
  paper::{NewPaper, Paper, PaperId},
  search::SearchFilter,
  status::ReadingStatus,
  store::PaperStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::RawPaper,
  schema::SCHEMA,
};

const PAPER_COLUMNS: &str = "id, title, relpath, date_added, status";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A paper metadata store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch one paper row by a WHERE-free ordered query or by id.
  async fn query_paper(&self, id: Option<PaperId>) -> Result<Option<Paper>> {
    let raw: Option<RawPaper> = self
      .conn
      .call(move |conn| {
        let raw = match id {
          Some(id) => conn
            .query_row(
              &format!("SELECT {PAPER_COLUMNS} FROM papers WHERE id = ?1"),
              rusqlite::params![id],
              RawPaper::from_row,
            )
            .optional()?,
          None => conn
            .query_row(
              &format!(
                "SELECT {PAPER_COLUMNS} FROM papers
                 ORDER BY date_added DESC, id DESC LIMIT 1"
              ),
              [],
              RawPaper::from_row,
            )
            .optional()?,
        };
        Ok(raw)
      })
      .await?;

    raw.map(RawPaper::into_paper).transpose()
  }
}

// ─── PaperStore impl ─────────────────────────────────────────────────────────

impl PaperStore for SqliteStore {
  type Error = Error;

  // ── Records ───────────────────────────────────────────────────────────────

  async fn insert(&self, paper: NewPaper) -> Result<PaperId> {
    let NewPaper { title, relpath, keywords } = paper;

    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO papers (title, relpath) VALUES (?1, ?2)",
          rusqlite::params![title, relpath],
        )?;
        let id = tx.last_insert_rowid();
        {
          let mut stmt =
            tx.prepare("INSERT INTO keywords (pid, word) VALUES (?1, ?2)")?;
          for word in &keywords {
            stmt.execute(rusqlite::params![id, word.trim()])?;
          }
        }
        tx.commit()?;
        Ok(id)
      })
      .await?;

    Ok(id)
  }

  async fn last_added(&self) -> Result<Paper> {
    self.query_paper(None).await?.ok_or(Error::NoPapers)
  }

  async fn find(&self, id: PaperId) -> Result<Paper> {
    self
      .query_paper(Some(id))
      .await?
      .ok_or(Error::PaperNotFound(id))
  }

  async fn remove(&self, id: PaperId) -> Result<String> {
    let relpath: Option<String> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let relpath: Option<String> = tx
          .query_row(
            "SELECT relpath FROM papers WHERE id = ?1",
            rusqlite::params![id],
            |row| row.get(0),
          )
          .optional()?;
        if relpath.is_some() {
          // The schema cascades on id updates only; keyword rows must go
          // explicitly or they are orphaned.
          tx.execute("DELETE FROM keywords WHERE pid = ?1", rusqlite::params![id])?;
          tx.execute("DELETE FROM papers WHERE id = ?1", rusqlite::params![id])?;
        }
        tx.commit()?;
        Ok(relpath)
      })
      .await?;

    relpath.ok_or(Error::PaperNotFound(id))
  }

  // ── Keywords ──────────────────────────────────────────────────────────────

  async fn add_keyword(&self, id: PaperId, word: String) -> Result<()> {
    let found = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM papers WHERE id = ?1",
            rusqlite::params![id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(false);
        }

        conn.execute(
          "INSERT INTO keywords (pid, word) VALUES (?1, ?2)",
          rusqlite::params![id, word.trim()],
        )?;
        Ok(true)
      })
      .await?;

    if found { Ok(()) } else { Err(Error::PaperNotFound(id)) }
  }

  async fn remove_keyword(&self, id: PaperId, word: String) -> Result<()> {
    let word_param = word.clone();
    let deleted = self
      .conn
      .call(move |conn| {
        // One statement deletes every exact (pid, word) match, duplicates
        // included.
        Ok(conn.execute(
          "DELETE FROM keywords WHERE pid = ?1 AND word = ?2",
          rusqlite::params![id, word_param],
        )?)
      })
      .await?;

    if deleted == 0 {
      return Err(Error::KeywordNotFound(id, word));
    }
    Ok(())
  }

  async fn keywords_for(&self, id: PaperId) -> Result<Vec<String>> {
    let words = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT word FROM keywords WHERE pid = ?1")?;
        let words = stmt
          .query_map(rusqlite::params![id], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(words)
      })
      .await?;

    Ok(words)
  }

  // ── Search ────────────────────────────────────────────────────────────────

  async fn search(
    &self,
    filter: &SearchFilter,
  ) -> Result<Vec<(Paper, Vec<String>)>> {
    // Fetch every record with its keywords, newest first; the matching
    // predicate runs over the decoded rows.
    let rows: Vec<(RawPaper, Vec<String>)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PAPER_COLUMNS} FROM papers
           ORDER BY date_added DESC, id DESC"
        ))?;
        let raws = stmt
          .query_map([], RawPaper::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut kw_stmt =
          conn.prepare("SELECT word FROM keywords WHERE pid = ?1")?;
        let mut rows = Vec::with_capacity(raws.len());
        for raw in raws {
          let words = kw_stmt
            .query_map(rusqlite::params![raw.id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
          rows.push((raw, words));
        }
        Ok(rows)
      })
      .await?;

    let mut out = Vec::with_capacity(rows.len());
    for (raw, words) in rows {
      let paper = raw.into_paper()?;
      if filter.matches(&paper.title, &words) {
        out.push((paper, words));
      }
    }
    Ok(out)
  }

  // ── Status ────────────────────────────────────────────────────────────────

  async fn update_status(
    &self,
    id: PaperId,
    status: ReadingStatus,
  ) -> Result<()> {
    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE papers SET status = ?1 WHERE id = ?2",
          rusqlite::params![status.code(), id],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::PaperNotFound(id));
    }
    Ok(())
  }
}
