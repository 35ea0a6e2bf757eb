use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The 66 canonical book names, in corpus order.
pub const BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Dense, 1-based identifier of a verse in canonical corpus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct VerseId(u32);

impl VerseId {
    /// The first verse of the corpus (Genesis 1:1).
    pub const FIRST: VerseId = VerseId(1);

    /// Returns `None` for 0, which is never a valid identifier.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding identifier, or `None` at the first verse.
    pub fn prev(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }
}

impl TryFrom<u32> for VerseId {
    type Error = String;

    fn try_from(raw: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| "verse identifier 0 is not valid".to_string())
    }
}

impl From<VerseId> for u32 {
    fn from(id: VerseId) -> u32 {
        id.0
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub id: VerseId,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl VerseRecord {
    /// `Book C:V`, e.g. `1 John 3:16`.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// An unresolved reference. Chapter and verse stay textual until resolution,
/// where non-numeric values simply fail to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl Passage {
    pub fn new(
        book: impl Into<String>,
        chapter: impl Into<String>,
        verse: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// The persisted bookmark/favorites document.
///
/// On disk this is `{"bookmark": <int>, "favorites": [<int>, ...]}` where a
/// bookmark of 0 means unset. Favorites are a set, so they always serialize
/// ascending and without duplicates regardless of what was read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDocument {
    #[serde(default)]
    bookmark: u32,
    #[serde(default)]
    favorites: BTreeSet<VerseId>,
}

impl SaveDocument {
    pub fn bookmark(&self) -> Option<VerseId> {
        VerseId::new(self.bookmark)
    }

    pub fn set_bookmark(&mut self, id: VerseId) {
        self.bookmark = id.get();
    }

    pub fn favorites(&self) -> impl Iterator<Item = VerseId> + '_ {
        self.favorites.iter().copied()
    }

    pub fn is_favorite(&self, id: VerseId) -> bool {
        self.favorites.contains(&id)
    }

    /// Returns false if `id` was already present.
    pub fn add_favorite(&mut self, id: VerseId) -> bool {
        self.favorites.insert(id)
    }

    pub fn remove_favorite(&mut self, id: VerseId) -> bool {
        self.favorites.remove(&id)
    }
}
