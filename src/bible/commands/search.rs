use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BibleError, Result};
use crate::store::VerseStore;

/// All verses containing `term`. With `exact`, only whole-word matches
/// surrounded by spaces count.
pub fn run<V: VerseStore>(store: &V, term: &str, exact: bool) -> Result<CmdResult> {
    if term.trim().is_empty() {
        return Err(BibleError::InvalidInput("Search term is empty".to_string()));
    }

    let verses = store.search_substring(term, exact);
    let mut result = CmdResult::default();
    if verses.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No verses found matching: {}",
            term
        )));
    }
    Ok(result.with_listed_verses(verses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_corpus;

    #[test]
    fn loose_search_matches_inside_words() {
        let corpus = sample_corpus();
        let result = run(&corpus, "love", false).unwrap();
        assert_eq!(result.listed_verses.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn exact_search_matches_whole_words() {
        let corpus = sample_corpus();
        let result = run(&corpus, "love", true).unwrap();
        assert_eq!(result.listed_verses.len(), 1);
        assert_eq!(result.listed_verses[0].reference(), "1 John 3:16");
    }

    #[test]
    fn no_match_reports() {
        let corpus = sample_corpus();
        let result = run(&corpus, "zebra", false).unwrap();
        assert!(result.listed_verses.is_empty());
        assert_eq!(result.messages[0].content, "No verses found matching: zebra");
    }

    #[test]
    fn empty_term_is_invalid() {
        let corpus = sample_corpus();
        assert!(run(&corpus, "  ", false).is_err());
    }
}
