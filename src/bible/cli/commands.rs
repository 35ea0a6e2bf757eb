//! # CLI Layer
//!
//! This module is **one possible UI client** for bible; the reader itself lives
//! in the library.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Reads process arguments and environment variables
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves paths and config, loads the corpus, builds `AppContext`
//! - `handle_*()`: Per-mode handlers that call the API and print the result

use super::print::{print_books, print_count, print_messages, print_verses};
use super::repl::{self, Terminal};
use super::setup::{Cli, Mode};
use bible::api::{BibleApi, CmdResult, ReadQuery};
use bible::config::{BibleConfig, BiblePaths, DEFAULT_WRAP_WIDTH};
use bible::error::{BibleError, Result};
use bible::store::corpus::Corpus;
use bible::store::fs::FileSaveStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "BIBLE_HOME";
const CORPUS_ENV: &str = "BIBLE_CORPUS";
const LOG_ENV: &str = "BIBLE_LOG";

struct AppContext {
    api: BibleApi<Corpus, FileSaveStore>,
    width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let positionals = cli.positionals();

    match cli.mode() {
        Mode::Read => handle_read(&ctx, &positionals),
        Mode::List => handle_list(&ctx, &positionals),
        Mode::Random => handle_random(&ctx),
        Mode::Search { term, exact } => handle_search(&ctx, &term, exact),
        Mode::Favorites => handle_favorites(&ctx),
        Mode::Interactive => handle_interactive(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = BibleConfig::load(&data_dir)?;

    let corpus_override = cli
        .corpus
        .clone()
        .or_else(|| std::env::var_os(CORPUS_ENV).map(PathBuf::from));
    let paths = BiblePaths::resolve(data_dir, &config, corpus_override);
    tracing::debug!("Using data dir {}", paths.data_dir.display());

    let corpus = Corpus::load(&paths.corpus)?;
    let saves = FileSaveStore::in_dir(&paths.data_dir);

    Ok(AppContext {
        api: BibleApi::new(corpus, saves),
        width: wrap_width(cli.width, &config),
    })
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "bible", "bible")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            BibleError::InvalidInput(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn wrap_width(flag: Option<usize>, config: &BibleConfig) -> usize {
    flag.or(config.wrap_width)
        .or_else(|| {
            console::Term::stdout()
                .size_checked()
                .map(|(_, cols)| (cols as usize).saturating_sub(1))
        })
        .filter(|width| *width > 0)
        .unwrap_or(DEFAULT_WRAP_WIDTH)
}

fn handle_read(ctx: &AppContext, positionals: &[String]) -> Result<()> {
    let query = ReadQuery::from_parts(positionals);
    let result = ctx.api.read(&query)?;

    match &query {
        ReadQuery::Books => print_books(&result.books)?,
        ReadQuery::ChapterCount { book } => {
            print_count(&format!("Chapters in {}", book), result.count)?
        }
        ReadQuery::Chapters { .. } | ReadQuery::Verses { .. } => {
            print_verses(&result.listed_verses, ctx.width)?
        }
    }
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, positionals: &[String]) -> Result<()> {
    match positionals {
        [] => print_books(&ctx.api.books().books)?,
        [book] => {
            let result = ctx.api.chapter_count(book);
            print_count(&format!("Chapters in {}", book), result.count)?;
        }
        [book, chapter, ..] => {
            let result = ctx.api.verse_count(book, chapter)?;
            print_count(&format!("Verses in {} {}", book, chapter), result.count)?;
        }
    }
    Ok(())
}

fn handle_random(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.random_verse(&mut rand::rng())?;
    print_result(ctx, &result)
}

fn handle_search(ctx: &AppContext, term: &str, exact: bool) -> Result<()> {
    let result = ctx.api.search(term, exact)?;
    print_result(ctx, &result)
}

fn handle_favorites(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    print_result(ctx, &result)
}

fn handle_interactive(ctx: &mut AppContext) -> Result<()> {
    let width = ctx.width;
    let mut session = ctx.api.session(rand::rng());
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    repl::run(&mut session, &mut terminal, width)?;
    Ok(())
}

fn print_result(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    print_verses(&result.listed_verses, ctx.width)?;
    print_messages(&result.messages)?;
    Ok(())
}
