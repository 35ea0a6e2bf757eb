use crate::commands::CmdResult;
use crate::error::{BibleError, Result};
use crate::model::BOOKS;
use crate::store::VerseStore;

pub fn books() -> CmdResult {
    CmdResult::default().with_books(BOOKS.iter().map(|b| b.to_string()).collect())
}

pub fn chapter_count<V: VerseStore>(store: &V, book: &str) -> CmdResult {
    CmdResult::default().with_count(store.distinct_chapter_count(book))
}

pub fn verse_count<V: VerseStore>(store: &V, book: &str, chapter: &str) -> Result<CmdResult> {
    let chapter: u32 = chapter.trim().parse().map_err(|_| {
        BibleError::InvalidInput(format!("Chapter '{}' is not a number", chapter))
    })?;
    Ok(CmdResult::default().with_count(store.verse_count(book, chapter)))
}
