//! # Storage Layer
//!
//! Two independent stores sit behind traits so the command layer never touches
//! files directly:
//!
//! - [`VerseStore`]: the read-only verse table. Looked up by reference, by id,
//!   and by substring. Production uses [`corpus::Corpus`], loaded once from a
//!   JSON dump of the translation.
//! - [`SaveStore`]: the single bookmark/favorites document. Production uses
//!   [`fs::FileSaveStore`]; tests use [`memory::InMemorySaveStore`].
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── kjv.json            # {"verses": [{"book_name", "chapter", "verse", "text"}, ...]}
//! ├── bookmarks.json      # {"bookmark": 0, "favorites": [1, 23145]}
//! └── config.json         # Optional configuration
//! ```
//!
//! The save document is only ever used for one read-modify-write cycle per user
//! action; nothing caches it between operations.

use crate::error::Result;
use crate::model::{SaveDocument, VerseId, VerseRecord};

pub mod corpus;
pub mod fs;
pub mod memory;

/// Read-only lookups against the verse table.
pub trait VerseStore {
    /// Id of the verse with exactly this book name, chapter and verse.
    fn find_id(&self, book: &str, chapter: u32, verse: u32) -> Option<VerseId>;

    fn record_by_id(&self, id: VerseId) -> Option<VerseRecord>;

    /// Number of distinct chapters in `book` (0 for an unknown book).
    fn distinct_chapter_count(&self, book: &str) -> usize;

    /// Number of verses in the chapter (0 if it does not exist).
    fn verse_count(&self, book: &str, chapter: u32) -> usize;

    /// Records whose text contains `pattern`, in corpus order.
    ///
    /// With `exact`, the pattern is padded with a space on each side to
    /// approximate whole-word matching.
    fn search_substring(&self, pattern: &str, exact: bool) -> Vec<VerseRecord>;
}

/// Persistence for the bookmark/favorites document.
pub trait SaveStore {
    /// Load the document. A document that was never saved loads as empty;
    /// unreadable or corrupt documents are errors.
    fn load(&self) -> Result<SaveDocument>;

    fn save(&mut self, doc: &SaveDocument) -> Result<()>;
}
