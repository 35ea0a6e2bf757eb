use crate::commands::resolve::{record_of, resolve};
use crate::commands::CmdResult;
use crate::error::{BibleError, Result};
use crate::model::{Passage, BOOKS};
use crate::store::VerseStore;
use rand::Rng;

/// Picks a random passage by nested uniform draws: book, then chapter within
/// the book, then verse within the chapter.
///
/// This is uniform at each level, not over all verses; verses in short books
/// and chapters come up more often.
pub fn pick_random<V: VerseStore, R: Rng>(store: &V, rng: &mut R) -> Result<Passage> {
    let book = BOOKS[rng.random_range(0..BOOKS.len())];

    let chapters = store.distinct_chapter_count(book);
    if chapters == 0 {
        return Err(BibleError::Corpus(format!("No chapters found for {}", book)));
    }
    let chapter = rng.random_range(0..chapters) + 1;

    let verses = store.verse_count(book, chapter as u32);
    if verses == 0 {
        return Err(BibleError::Corpus(format!(
            "No verses found for {} {}",
            book, chapter
        )));
    }
    let verse = rng.random_range(0..verses) + 1;

    Ok(Passage::new(book, chapter.to_string(), verse.to_string()))
}

/// Resolves and returns one random verse.
pub fn run<V: VerseStore, R: Rng>(store: &V, rng: &mut R) -> Result<CmdResult> {
    let passage = pick_random(store, rng)?;
    let id = resolve(store, &passage)?;
    let record = record_of(store, id)?;
    Ok(CmdResult::default()
        .with_position(id)
        .with_listed_verses(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::corpus::{Corpus, CorpusVerse};
    use crate::store::memory::fixtures::sample_corpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_stay_within_counts() {
        let corpus = sample_corpus();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let passage = pick_random(&corpus, &mut rng).unwrap();
            let chapter: u32 = passage.chapter.parse().unwrap();
            let verse: u32 = passage.verse.parse().unwrap();

            let chapters = corpus.distinct_chapter_count(&passage.book) as u32;
            assert!((1..=chapters).contains(&chapter), "{}", passage);
            let verses = corpus.verse_count(&passage.book, chapter) as u32;
            assert!((1..=verses).contains(&verse), "{}", passage);
        }
    }

    #[test]
    fn every_pick_resolves() {
        let corpus = sample_corpus();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let result = run(&corpus, &mut rng).unwrap();
            assert_eq!(result.listed_verses.len(), 1);
            assert_eq!(result.position, Some(result.listed_verses[0].id));
        }
    }

    #[test]
    fn missing_book_is_an_error_not_a_panic() {
        let corpus = Corpus::from_verses(vec![CorpusVerse {
            book: "Genesis".into(),
            chapter: 1,
            verse: 1,
            text: "In the beginning.".into(),
        }]);
        let mut rng = StdRng::seed_from_u64(1);

        let outcomes: Vec<_> = (0..50).map(|_| pick_random(&corpus, &mut rng)).collect();
        assert!(outcomes
            .iter()
            .any(|o| matches!(o, Err(BibleError::Corpus(_)))));
    }
}
