use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BibleError, Result};
use crate::store::VerseStore;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A chapter or verse argument: `5` or `1-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(u32),
    Range(u32, u32),
}

impl Selection {
    /// Splits a range at `last`: the numbers worth looking up, and the
    /// part past `last` (if any) that cannot exist. A single number is
    /// always looked up.
    pub fn bounded(self, last: u32) -> (RangeInclusive<u32>, Option<(u32, u32)>) {
        match self {
            Selection::Single(n) => (n..=n, None),
            Selection::Range(start, end) => {
                let walk_end = end.min(last);
                let tail_start = start.max(walk_end.saturating_add(1));
                let tail = (tail_start <= end).then_some((tail_start, end));
                (start..=walk_end, tail)
            }
        }
    }
}

impl FromStr for Selection {
    type Err = BibleError;

    fn from_str(s: &str) -> Result<Self> {
        let number = |part: &str| {
            part.trim().parse::<u32>().map_err(|_| {
                BibleError::InvalidInput(format!("'{}' is not a number or a range like 1-5", s))
            })
        };

        match s.split_once('-') {
            None => Ok(Selection::Single(number(s)?)),
            Some((start, end)) => {
                let (start, end) = (number(start)?, number(end)?);
                if start > end {
                    return Err(BibleError::InvalidInput(format!(
                        "Range {} runs backwards",
                        s
                    )));
                }
                Ok(Selection::Range(start, end))
            }
        }
    }
}

/// Every verse of the selected chapter(s).
pub fn chapters<V: VerseStore>(store: &V, book: &str, chapters: &str) -> Result<CmdResult> {
    let selection: Selection = chapters.parse()?;
    let mut result = CmdResult::default();
    let (walk, tail) = selection.bounded(store.distinct_chapter_count(book) as u32);

    for chapter in walk {
        let count = store.verse_count(book, chapter);
        if count == 0 {
            result.add_message(CmdMessage::warning(format!(
                "Chapter {} {} not found",
                book, chapter
            )));
            continue;
        }
        for verse in 1..=count as u32 {
            push_verse(store, &mut result, book, chapter, verse);
        }
    }
    if let Some((first, last)) = tail {
        result.add_message(CmdMessage::warning(format!(
            "Chapters {} {}-{} not found",
            book, first, last
        )));
    }

    Ok(result)
}

/// The selected verse(s) of a single chapter.
pub fn verses<V: VerseStore>(
    store: &V,
    book: &str,
    chapter: &str,
    verses: &str,
) -> Result<CmdResult> {
    let chapter: u32 = chapter.trim().parse().map_err(|_| {
        BibleError::InvalidInput(format!("Chapter '{}' is not a number", chapter))
    })?;
    let selection: Selection = verses.parse()?;
    let mut result = CmdResult::default();
    let (walk, tail) = selection.bounded(store.verse_count(book, chapter) as u32);

    for verse in walk {
        push_verse(store, &mut result, book, chapter, verse);
    }
    if let Some((first, last)) = tail {
        let missing = if first == last {
            format!("Verse {} {}:{} not found", book, chapter, first)
        } else {
            format!("Verses {} {}:{}-{} not found", book, chapter, first, last)
        };
        result.add_message(CmdMessage::warning(missing));
    }

    Ok(result)
}

fn push_verse<V: VerseStore>(
    store: &V,
    result: &mut CmdResult,
    book: &str,
    chapter: u32,
    verse: u32,
) {
    match store
        .find_id(book, chapter, verse)
        .and_then(|id| store.record_by_id(id))
    {
        Some(record) => result.listed_verses.push(record),
        None => result.add_message(CmdMessage::warning(format!(
            "Verse {} {}:{} not found",
            book, chapter, verse
        ))),
    }
}
