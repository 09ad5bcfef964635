//! `papers` — command-line interface to the papershelf repository.
//!
//! # Usage
//!
//! ```text
//! export PAPERS_DIR=~/path/to/papers/dir
//! papers init
//! papers import -f reflections.pdf -t "Reflections on Trusting Trust"
//! papers list -s -d
//! papers search -k security
//! ```

mod color;
mod format;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use papershelf_core::{
  paper::PaperRef, search::SearchFilter, status::ReadingStatus,
};
use papershelf_repo::{FileStorage, RepoConfig, Repository};
use papershelf_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

const EXAMPLES: &str = "\
Initial setup:
  $ export PAPERS_DIR=~/path/to/papers/dir
  $ papers init

Import a paper (and create notes.txt inside the import folder):
  $ papers import -f reflections.pdf -t 'Reflections on Trusting Trust'

List all the papers (along with date and their reading status):
  $ papers list -s -d

Associate a certain keyword to the last added paper:
  $ papers word -a security -p last

Search and display the papers with a certain keyword associated to them:
  $ papers search -k security
";

#[derive(Parser, Debug)]
#[command(
  name = "papers",
  version,
  about = "Track, tag, and search academic papers",
  after_help = EXAMPLES
)]
struct Cli {
  /// Repository base directory (defaults to $PAPERS_DIR).
  #[arg(long, value_name = "DIR", global = true)]
  dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Initialize the papers directory (first use only).
  Init,

  /// Import a new paper.
  Import {
    /// The file to import.
    #[arg(short, long)]
    file: PathBuf,

    /// The title of the paper being imported.
    #[arg(short, long)]
    title: String,

    /// Comma-separated list of keywords.
    #[arg(short, long)]
    keywords: Option<String>,
  },

  /// Delete a paper and all the data related to it.
  Delete {
    /// The paper to delete: a numeric id, or `last`.
    #[arg(short, long, value_name = "ID")]
    paper: PaperRef,
  },

  /// List papers, newest first.
  List {
    /// Show the status of each paper.
    #[arg(short = 's', long)]
    show_status: bool,

    /// Show the date of each paper.
    #[arg(short = 'd', long)]
    show_date: bool,
  },

  /// Retrieve the last added paper.
  Last {
    /// Show the status of the paper.
    #[arg(short = 's', long)]
    show_status: bool,

    /// Show the date of the paper.
    #[arg(short = 'd', long)]
    show_date: bool,
  },

  /// Set the reading status of a paper.
  Mark {
    /// New status: unread, wip, skimmed, or read.
    #[arg(short, long)]
    status: ReadingStatus,

    /// The paper to update: a numeric id, or `last`.
    #[arg(short, long, value_name = "ID")]
    paper: PaperRef,
  },

  /// Manage the keywords associated with a paper.
  Word {
    #[command(flatten)]
    action: WordAction,

    /// The paper to update: a numeric id, or `last`.
    #[arg(short, long, value_name = "ID")]
    paper: PaperRef,
  },

  /// Search through titles and keywords.
  Search {
    /// Search on paper titles.
    #[arg(short, long)]
    title: Option<String>,

    /// Search on keywords.
    #[arg(short, long)]
    keyword: Option<String>,
  },

  /// Open the directory containing the given paper.
  Open {
    /// The paper to open: a numeric id, or `last`.
    #[arg(short, long, value_name = "ID")]
    paper: PaperRef,
  },
}

/// Exactly one keyword action per invocation.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct WordAction {
  /// Associate a keyword with the paper.
  #[arg(short, long, value_name = "WORD")]
  add: Option<String>,

  /// Remove a keyword from the paper.
  #[arg(short, long, value_name = "WORD")]
  remove: Option<String>,

  /// List the keywords associated with the paper.
  #[arg(short, long)]
  list: bool,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  if let Err(e) = run().await {
    eprintln!("{}", color::wrap(&format!("error: {e:#}"), color::FAIL));
    std::process::exit(1);
  }
}

async fn run() -> Result<()> {
  let cli = Cli::parse();
  let config = RepoConfig::resolve(cli.dir)?;

  match cli.command {
    Command::Init => cmd_init(&config).await,
    Command::Import { file, title, keywords } => {
      cmd_import(&open_repo(&config).await?, &file, &title, keywords).await
    }
    Command::Delete { paper } => {
      let id = open_repo(&config).await?.delete(paper).await?;
      println!("Removed {id}");
      Ok(())
    }
    Command::List { show_status, show_date } => {
      let repo = open_repo(&config).await?;
      for paper in repo.list().await? {
        println!("{}", format::entry(&paper, show_status, show_date));
      }
      Ok(())
    }
    Command::Last { show_status, show_date } => {
      let paper = open_repo(&config).await?.last().await?;
      println!("{}", format::entry(&paper, show_status, show_date));
      Ok(())
    }
    Command::Mark { status, paper } => {
      let id = open_repo(&config).await?.mark(status, paper).await?;
      println!("Marked {id} as {status}");
      Ok(())
    }
    Command::Word { action, paper } => {
      cmd_word(&open_repo(&config).await?, action, paper).await
    }
    Command::Search { title, keyword } => {
      cmd_search(&open_repo(&config).await?, SearchFilter { title, keyword })
        .await
    }
    Command::Open { paper } => {
      let dir = open_repo(&config).await?.paper_dir(paper).await?;
      open_file_manager(&dir)
    }
  }
}

async fn open_repo(config: &RepoConfig) -> Result<Repository<SqliteStore>> {
  let storage = FileStorage::open(config.storage_dir()).await?;
  let store = SqliteStore::open(config.db_path()).await.with_context(|| {
    format!("opening database at {}", config.db_path().display())
  })?;
  Ok(Repository::new(store, storage))
}

// ─── Commands ────────────────────────────────────────────────────────────────

async fn cmd_init(config: &RepoConfig) -> Result<()> {
  config.init_layout().await?;
  SqliteStore::open(config.db_path())
    .await
    .context("creating database")?;
  println!(
    "Initialized {} as papers directory",
    config.base_dir().display()
  );
  Ok(())
}

async fn cmd_import(
  repo: &Repository<SqliteStore>,
  file: &Path,
  title: &str,
  keywords: Option<String>,
) -> Result<()> {
  let keywords = keywords
    .map(|s| s.split(',').map(str::to_owned).collect())
    .unwrap_or_default();
  let paper = repo.add(file, title, keywords).await?;
  println!("Imported '{}' as paper {}", paper.title, paper.id);
  Ok(())
}

async fn cmd_word(
  repo: &Repository<SqliteStore>,
  action: WordAction,
  paper: PaperRef,
) -> Result<()> {
  if action.list {
    let (entry, keywords) = repo.retrieve(paper, true).await?;
    let keywords = keywords.unwrap_or_default();
    println!("{}", format::title_keywords(&entry.title, &keywords));
  } else if let Some(word) = action.add {
    let id = repo.tag(word.clone(), paper).await?;
    println!("Added keyword '{word}' to {id}");
  } else if let Some(word) = action.remove {
    let id = repo.untag(word.clone(), paper).await?;
    println!("Removed keyword '{word}' from {id}");
  }
  Ok(())
}

async fn cmd_search(
  repo: &Repository<SqliteStore>,
  filter: SearchFilter,
) -> Result<()> {
  for (paper, keywords) in repo.filter(&filter).await? {
    let title = match filter.title.as_deref() {
      Some(t) => color::highlight_matches(&paper.title, t),
      None => paper.title.clone(),
    };
    let keywords: Vec<String> = match filter.keyword.as_deref() {
      Some(k) => keywords
        .iter()
        .map(|w| color::highlight_matches(w, k))
        .collect(),
      None => keywords,
    };
    println!("{}\n", format::title_keywords(&title, &keywords));
  }
  Ok(())
}

/// Open `dir` with the platform file manager.
fn open_file_manager(dir: &Path) -> Result<()> {
  let opener = if cfg!(target_os = "macos") {
    "open"
  } else if cfg!(target_os = "windows") {
    "explorer"
  } else {
    "xdg-open"
  };

  let status = std::process::Command::new(opener)
    .arg(dir)
    .status()
    .with_context(|| format!("launching {opener}"))?;
  if !status.success() {
    bail!("{opener} exited with {status}");
  }
  Ok(())
}
