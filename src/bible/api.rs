//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`]s; it does no formatting and no terminal I/O.
//!
//! `BibleApi<V: VerseStore, S: SaveStore>` is generic over both stores:
//! - Production: `BibleApi<Corpus, FileSaveStore>`
//! - Testing: `BibleApi<Corpus, InMemorySaveStore>` with the fixture corpus

use crate::commands;
pub use crate::commands::{CmdMessage, CmdResult, Confirm, Confirmation, MessageLevel};
use crate::error::Result;
use crate::model::{Passage, VerseId, VerseRecord};
use crate::session::Session;
use crate::store::{SaveStore, VerseStore};
use rand::Rng;

/// What a one-shot, non-interactive invocation asks for. Built once at the
/// entry boundary from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadQuery {
    Books,
    ChapterCount { book: String },
    Chapters { book: String, chapters: String },
    Verses { book: String, chapter: String, verses: String },
}

impl ReadQuery {
    /// Builds a query from up to three positional arguments.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Self {
        let part = |i: usize| parts[i].as_ref().to_string();
        match parts.len() {
            0 => ReadQuery::Books,
            1 => ReadQuery::ChapterCount { book: part(0) },
            2 => ReadQuery::Chapters {
                book: part(0),
                chapters: part(1),
            },
            _ => ReadQuery::Verses {
                book: part(0),
                chapter: part(1),
                verses: part(2),
            },
        }
    }
}

pub struct BibleApi<V: VerseStore, S: SaveStore> {
    corpus: V,
    saves: S,
}

impl<V: VerseStore, S: SaveStore> BibleApi<V, S> {
    pub fn new(corpus: V, saves: S) -> Self {
        Self { corpus, saves }
    }

    pub fn read(&self, query: &ReadQuery) -> Result<CmdResult> {
        match query {
            ReadQuery::Books => Ok(commands::info::books()),
            ReadQuery::ChapterCount { book } => {
                Ok(commands::info::chapter_count(&self.corpus, book))
            }
            ReadQuery::Chapters { book, chapters } => {
                commands::read::chapters(&self.corpus, book, chapters)
            }
            ReadQuery::Verses {
                book,
                chapter,
                verses,
            } => commands::read::verses(&self.corpus, book, chapter, verses),
        }
    }

    pub fn books(&self) -> CmdResult {
        commands::info::books()
    }

    pub fn chapter_count(&self, book: &str) -> CmdResult {
        commands::info::chapter_count(&self.corpus, book)
    }

    pub fn verse_count(&self, book: &str, chapter: &str) -> Result<CmdResult> {
        commands::info::verse_count(&self.corpus, book, chapter)
    }

    pub fn random_verse<R: Rng>(&self, rng: &mut R) -> Result<CmdResult> {
        commands::random::run(&self.corpus, rng)
    }

    pub fn search(&self, term: &str, exact: bool) -> Result<CmdResult> {
        commands::search::run(&self.corpus, term, exact)
    }

    pub fn resolve(&self, passage: &Passage) -> Result<VerseId> {
        commands::resolve::resolve(&self.corpus, passage)
    }

    pub fn record(&self, id: VerseId) -> Result<VerseRecord> {
        commands::resolve::record_of(&self.corpus, id)
    }

    pub fn load_bookmark(&self) -> Result<CmdResult> {
        commands::bookmarks::load_bookmark(&self.saves)
    }

    pub fn save_bookmark(&mut self, id: VerseId) -> Result<CmdResult> {
        commands::bookmarks::save_bookmark(&self.corpus, &mut self.saves, id)
    }

    pub fn toggle_favorite<C: Confirm>(&mut self, id: VerseId, confirm: &mut C) -> Result<CmdResult> {
        commands::bookmarks::toggle_favorite(&self.corpus, &mut self.saves, id, confirm)
    }

    pub fn favorites(&self) -> Result<CmdResult> {
        commands::bookmarks::list_favorites(&self.corpus, &self.saves)
    }

    /// Starts an interactive navigation session over this API's stores.
    pub fn session<R: Rng>(&mut self, rng: R) -> Session<'_, V, S, R> {
        Session::new(&self.corpus, &mut self.saves, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Always;
    use crate::session::SessionState;
    use crate::store::corpus::Corpus;
    use crate::store::memory::fixtures::sample_corpus;
    use crate::store::memory::InMemorySaveStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn api() -> BibleApi<Corpus, InMemorySaveStore> {
        BibleApi::new(sample_corpus(), InMemorySaveStore::new())
    }

    #[test]
    fn query_from_parts() {
        assert_eq!(ReadQuery::from_parts::<&str>(&[]), ReadQuery::Books);
        assert_eq!(
            ReadQuery::from_parts(&["1 John"]),
            ReadQuery::ChapterCount {
                book: "1 John".into()
            }
        );
        assert_eq!(
            ReadQuery::from_parts(&["John", "3", "16-18"]),
            ReadQuery::Verses {
                book: "John".into(),
                chapter: "3".into(),
                verses: "16-18".into()
            }
        );
    }

    #[test]
    fn read_dispatches_by_query_shape() {
        let api = api();
        assert_eq!(api.read(&ReadQuery::Books).unwrap().books.len(), 66);
        assert_eq!(
            api.read(&ReadQuery::from_parts(&["Genesis"])).unwrap().count,
            Some(3)
        );
        let verses = api
            .read(&ReadQuery::from_parts(&["Song of Solomon", "2", "1"]))
            .unwrap();
        assert_eq!(verses.listed_verses[0].reference(), "Song of Solomon 2:1");
    }

    #[test]
    fn bookmark_and_favorites_go_through_the_save_store() {
        let mut api = api();
        api.save_bookmark(VerseId::new(12).unwrap()).unwrap();
        assert_eq!(
            api.load_bookmark().unwrap().position,
            VerseId::new(12)
        );

        api.toggle_favorite(VerseId::FIRST, &mut Always::no()).unwrap();
        let favorites = api.favorites().unwrap();
        assert_eq!(favorites.listed_verses[0].id, VerseId::FIRST);
    }

    #[test]
    fn session_uses_api_stores() {
        let mut api = api();
        api.save_bookmark(VerseId::new(8).unwrap()).unwrap();

        let mut session = api.session(StdRng::seed_from_u64(0));
        session.handle("b", &mut Always::no());
        assert_eq!(
            session.state(),
            SessionState::Browsing(VerseId::new(8).unwrap())
        );
    }

    #[test]
    fn resolve_and_record() {
        let api = api();
        let id = api.resolve(&Passage::new("1 John", "3", "16")).unwrap();
        assert!(api.record(id).unwrap().text.contains("love of God"));
    }
}
