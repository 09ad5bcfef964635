//! SQL schema for the papershelf SQLite store.
//!
//! Matches the layout of databases written by earlier versions of the
//! tool: `papers` and `keywords` carry all current data; `authors` and
//! `links` are reserved for future use and stay empty.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS papers (
    id         INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title      TEXT NOT NULL,
    relpath    TEXT NOT NULL UNIQUE,
    date_added DATETIME DEFAULT CURRENT_TIMESTAMP,
    status     INTEGER DEFAULT 0
);

-- Keyword rows are deleted explicitly when their paper goes away; the
-- ON UPDATE CASCADE does not cover deletes.
CREATE TABLE IF NOT EXISTS keywords (
    pid  INTEGER REFERENCES papers(id) ON UPDATE CASCADE,
    word TEXT
);

-- Reserved: authors management.
CREATE TABLE IF NOT EXISTS authors (
    pid  INTEGER REFERENCES papers(id) ON UPDATE CASCADE,
    name TEXT
);

-- Reserved: associations between papers.
CREATE TABLE IF NOT EXISTS links (
    pid1 INTEGER REFERENCES papers(id),
    pid2 INTEGER REFERENCES papers(id)
);

CREATE INDEX IF NOT EXISTS keywords_pid_idx ON keywords(pid);

PRAGMA user_version = 1;
";
