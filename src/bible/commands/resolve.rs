use crate::error::{BibleError, Result};
use crate::model::{Passage, VerseId, VerseRecord};
use crate::parser::disambiguate;
use crate::store::VerseStore;

/// Maps a passage to its verse id.
///
/// Book names match exactly (case-sensitive). Chapter and verse must parse as
/// integers; anything else is simply not found.
pub fn resolve<V: VerseStore>(store: &V, passage: &Passage) -> Result<VerseId> {
    let not_found = || BibleError::VerseNotFound(passage.to_string());

    let chapter: u32 = passage.chapter.parse().map_err(|_| not_found())?;
    let verse: u32 = passage.verse.parse().map_err(|_| not_found())?;

    store
        .find_id(&passage.book, chapter, verse)
        .ok_or_else(not_found)
}

pub fn record_of<V: VerseStore>(store: &V, id: VerseId) -> Result<VerseRecord> {
    store
        .record_by_id(id)
        .ok_or(BibleError::RecordNotFound(id))
}

/// Disambiguates reference tokens and resolves them in one step.
pub fn resolve_tokens<V: VerseStore, S: AsRef<str>>(store: &V, tokens: &[S]) -> Result<VerseId> {
    let passage = disambiguate(tokens)?;
    resolve(store, &passage)
}
