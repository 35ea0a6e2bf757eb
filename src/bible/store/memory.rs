use super::SaveStore;
use crate::error::{BibleError, Result};
use crate::model::SaveDocument;
use std::io;

/// In-memory save document for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemorySaveStore {
    doc: SaveDocument,
    corrupt: bool,
    saves: usize,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: SaveDocument) -> Self {
        Self {
            doc,
            ..Self::default()
        }
    }

    /// A store whose current contents cannot be read until it is saved again.
    pub fn corrupted() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &SaveDocument {
        &self.doc
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SaveStore for InMemorySaveStore {
    fn load(&self) -> Result<SaveDocument> {
        if self.corrupt {
            return Err(BibleError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "save document is corrupt",
            )));
        }
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &SaveDocument) -> Result<()> {
        self.doc = doc.clone();
        self.corrupt = false;
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::BOOKS;
    use crate::store::corpus::{Corpus, CorpusVerse};

    const KNOWN_TEXTS: [(&str, u32, u32, &str); 4] = [
        (
            "Genesis",
            1,
            1,
            "In the beginning God created the heaven and the earth.",
        ),
        (
            "Song of Solomon",
            2,
            1,
            "I am the rose of Sharon, and the lily of the valleys.",
        ),
        (
            "Song of Solomon",
            2,
            16,
            "My beloved is mine, and I am his: he feedeth among the lilies.",
        ),
        (
            "1 John",
            3,
            16,
            "Hereby perceive we the love of God, because he laid down his life for us.",
        ),
    ];

    /// A corpus covering all 66 books with 3 to 5 chapters of 16 to 20 verses
    /// each, in canonical order. A handful of verses carry real text; the rest
    /// read `Text of <Book> <C>:<V>.`
    pub fn sample_corpus() -> Corpus {
        let mut verses = Vec::new();
        for (b, book) in BOOKS.iter().enumerate() {
            let chapters = (b % 3 + 3) as u32;
            for chapter in 1..=chapters {
                let count = ((b as u32 + chapter) % 5) + 16;
                for verse in 1..=count {
                    verses.push(CorpusVerse {
                        book: book.to_string(),
                        chapter,
                        verse,
                        text: text_for(book, chapter, verse),
                    });
                }
            }
        }
        Corpus::from_verses(verses)
    }

    fn text_for(book: &str, chapter: u32, verse: u32) -> String {
        KNOWN_TEXTS
            .iter()
            .find(|(b, c, v, _)| *b == book && *c == chapter && *v == verse)
            .map(|(_, _, _, text)| text.to_string())
            .unwrap_or_else(|| format!("Text of {} {}:{}.", book, chapter, verse))
    }
}
