use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bible", bin_name = "bible", version = get_version())]
#[command(about = "Read, search and browse the King James Bible", long_about = None)]
pub struct Cli {
    /// Book name (quote multi-word books, e.g. "1 John")
    pub book: Option<String>,

    /// Chapter number or range (e.g. 3 or 1-4)
    pub chapter: Option<String>,

    /// Verse number or range (e.g. 16 or 16-18)
    pub verse: Option<String>,

    /// List books, the chapter count of BOOK, or the verse count of BOOK CHAPTER
    #[arg(short, long, help_heading = "Modes")]
    pub list: bool,

    /// Print a random verse
    #[arg(short, long, help_heading = "Modes")]
    pub random: bool,

    /// Print every verse containing TERM
    #[arg(short, long, value_name = "TERM", help_heading = "Modes")]
    pub search: Option<String>,

    /// Match TERM as a whole word when searching
    #[arg(short, long, requires = "search", help_heading = "Modes")]
    pub exact: bool,

    /// Browse verse by verse
    #[arg(short, long, help_heading = "Modes")]
    pub interactive: bool,

    /// Print your favorite verses
    #[arg(short, long, help_heading = "Modes")]
    pub favorites: bool,

    /// Verse data file (JSON)
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub corpus: Option<PathBuf>,

    /// Wrap output at this many columns
    #[arg(long, value_name = "COLUMNS", help_heading = "Options")]
    pub width: Option<usize>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// What a single invocation does, decided once from the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Read,
    List,
    Random,
    Search { term: String, exact: bool },
    Interactive,
    Favorites,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.interactive {
            Mode::Interactive
        } else if let Some(term) = &self.search {
            Mode::Search {
                term: term.clone(),
                exact: self.exact,
            }
        } else if self.random {
            Mode::Random
        } else if self.favorites {
            Mode::Favorites
        } else if self.list {
            Mode::List
        } else {
            Mode::Read
        }
    }

    /// Positional arguments in order, stopping at the first missing one.
    pub fn positionals(&self) -> Vec<String> {
        [&self.book, &self.chapter, &self.verse]
            .into_iter()
            .map_while(|part| part.clone())
            .collect()
    }
}
