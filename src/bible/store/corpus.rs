use super::VerseStore;
use crate::error::{BibleError, Result};
use crate::model::{VerseId, VerseRecord};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// One row of the JSON dump. Extra fields (such as the numeric `book`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusVerse {
    #[serde(rename = "book_name")]
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct CorpusFile {
    verses: Vec<CorpusVerse>,
}

/// The whole translation held in memory.
///
/// Ids are assigned `1..=N` in file order, so the file must already be in
/// canonical order for `n`/`p` navigation to make sense.
#[derive(Debug, Default)]
pub struct Corpus {
    records: Vec<VerseRecord>,
    keys: HashMap<(String, u32, u32), VerseId>,
    // book -> chapter -> verse rows
    chapters: HashMap<String, BTreeMap<u32, usize>>,
}

impl Corpus {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BibleError::Corpus(format!(
                "No verse data at {}. Point --corpus or BIBLE_CORPUS at a JSON dump of the translation",
                path.display()
            )),
            _ => BibleError::Io(e),
        })?;
        let corpus = Self::from_json(&content)?;
        tracing::debug!("Loaded {} verses from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: CorpusFile = serde_json::from_str(content).map_err(BibleError::Serialization)?;
        if file.verses.is_empty() {
            return Err(BibleError::Corpus("Verse data contains no verses".to_string()));
        }
        Ok(Self::from_verses(file.verses))
    }

    pub fn from_verses<I: IntoIterator<Item = CorpusVerse>>(verses: I) -> Self {
        let mut corpus = Corpus::default();

        for (n, row) in verses.into_iter().enumerate() {
            let id = VerseId::new(n as u32 + 1).unwrap_or(VerseId::FIRST);
            let key = (row.book.clone(), row.chapter, row.verse);
            if corpus.keys.contains_key(&key) {
                tracing::warn!(
                    "Duplicate verse {} {}:{} (id {}); lookups use the first occurrence",
                    row.book,
                    row.chapter,
                    row.verse,
                    id
                );
            } else {
                corpus.keys.insert(key, id);
            }

            *corpus
                .chapters
                .entry(row.book.clone())
                .or_default()
                .entry(row.chapter)
                .or_default() += 1;

            corpus.records.push(VerseRecord {
                id,
                book: row.book,
                chapter: row.chapter,
                verse: row.verse,
                text: row.text,
            });
        }

        corpus
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VerseStore for Corpus {
    fn find_id(&self, book: &str, chapter: u32, verse: u32) -> Option<VerseId> {
        self.keys.get(&(book.to_string(), chapter, verse)).copied()
    }

    fn record_by_id(&self, id: VerseId) -> Option<VerseRecord> {
        let index = (id.get() as usize).checked_sub(1)?;
        self.records.get(index).cloned()
    }

    fn distinct_chapter_count(&self, book: &str) -> usize {
        self.chapters.get(book).map_or(0, BTreeMap::len)
    }

    fn verse_count(&self, book: &str, chapter: u32) -> usize {
        self.chapters
            .get(book)
            .and_then(|chapters| chapters.get(&chapter))
            .copied()
            .unwrap_or(0)
    }

    fn search_substring(&self, pattern: &str, exact: bool) -> Vec<VerseRecord> {
        let needle = if exact {
            format!(" {} ", pattern.to_lowercase())
        } else {
            pattern.to_lowercase()
        };

        self.records
            .iter()
            .filter(|r| r.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
