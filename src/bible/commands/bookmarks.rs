//! Bookmark and favorites operations.
//!
//! Every operation is one load -> mutate -> save cycle against the
//! [`SaveStore`]. Nothing is cached between calls, so the file stays the only
//! durable copy.
//!
//! An unreadable document is reported as a warning and replaced by an empty
//! one; the next save then overwrites it.

use crate::commands::{CmdMessage, CmdResult, Confirm, Confirmation};
use crate::error::Result;
use crate::model::{SaveDocument, VerseId};
use crate::store::{SaveStore, VerseStore};

pub(crate) fn load_document<S: SaveStore>(saves: &S, result: &mut CmdResult) -> SaveDocument {
    match saves.load() {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Discarding unreadable save document: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Could not read saved bookmarks ({}). Starting with an empty list.",
                e
            )));
            SaveDocument::default()
        }
    }
}

/// The saved bookmark, or the first verse of the corpus if none was saved.
pub fn load_bookmark<S: SaveStore>(saves: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(saves, &mut result);

    let id = match doc.bookmark() {
        Some(id) => id,
        None => {
            result.add_message(CmdMessage::info("No bookmark saved yet, starting at the beginning."));
            VerseId::FIRST
        }
    };
    Ok(result.with_position(id))
}

pub fn save_bookmark<V: VerseStore, S: SaveStore>(
    corpus: &V,
    saves: &mut S,
    id: VerseId,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut doc = load_document(saves, &mut result);
    doc.set_bookmark(id);
    saves.save(&doc)?;

    result.add_message(CmdMessage::success(format!(
        "Bookmarked {}",
        describe(corpus, id)
    )));
    Ok(result.with_position(id))
}

/// Interactive `b`: offer to bookmark the current verse; declining jumps to
/// the saved bookmark instead.
pub fn bookmark_flow<V: VerseStore, S: SaveStore, C: Confirm>(
    corpus: &V,
    saves: &mut S,
    current: VerseId,
    confirm: &mut C,
) -> Result<CmdResult> {
    let question = format!("Save {} as your bookmark?", describe(corpus, current));
    match confirm.confirm(&question) {
        Confirmation::Confirm => save_bookmark(corpus, saves, current),
        Confirmation::Decline => load_bookmark(saves),
    }
}

/// Adds `id` to the favorites, or removes it after confirmation if it is
/// already there. Declining leaves the favorites untouched and unsaved.
pub fn toggle_favorite<V: VerseStore, S: SaveStore, C: Confirm>(
    corpus: &V,
    saves: &mut S,
    id: VerseId,
    confirm: &mut C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_position(id);
    let mut doc = load_document(saves, &mut result);
    let label = describe(corpus, id);

    if doc.is_favorite(id) {
        let question = format!("{} is already a favorite. Remove it?", label);
        match confirm.confirm(&question) {
            Confirmation::Confirm => {
                doc.remove_favorite(id);
                saves.save(&doc)?;
                result.add_message(CmdMessage::success(format!(
                    "Removed {} from favorites",
                    label
                )));
            }
            Confirmation::Decline => {
                result.add_message(CmdMessage::info(format!("Kept {} in favorites", label)));
            }
        }
    } else {
        doc.add_favorite(id);
        saves.save(&doc)?;
        result.add_message(CmdMessage::success(format!("Added {} to favorites", label)));
    }

    Ok(result)
}

/// Favorite verses in ascending id order. Ids that no longer resolve are
/// skipped with a warning.
pub fn list_favorites<V: VerseStore, S: SaveStore>(corpus: &V, saves: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let doc = load_document(saves, &mut result);

    let mut verses = Vec::new();
    for id in doc.favorites() {
        match corpus.record_by_id(id) {
            Some(record) => verses.push(record),
            None => result.add_message(CmdMessage::warning(format!(
                "Favorite {} is not in the current verse data",
                id
            ))),
        }
    }

    if verses.is_empty() && result.messages.is_empty() {
        result.add_message(CmdMessage::info("No favorites saved yet."));
    }
    Ok(result.with_listed_verses(verses))
}

fn describe<V: VerseStore>(corpus: &V, id: VerseId) -> String {
    corpus
        .record_by_id(id)
        .map(|r| r.reference())
        .unwrap_or_else(|| format!("verse {}", id))
}
