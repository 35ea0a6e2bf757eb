//! # Input Parsing
//!
//! Turns a raw line of interactive input into an [`Input`] classification, and
//! reference tokens into a [`Passage`].
//!
//! Tokenizing is deliberately naive: the line is trimmed and split on single
//! spaces, with quote characters left attached to their tokens. Quotes are only
//! interpreted by [`disambiguate`], which reassembles book names that span
//! several tokens:
//!
//! ```text
//! Genesis 1 1                 -> "Genesis", 1, 1
//! "1 John" 3 16               -> "1 John", 3, 16
//! 'Song of Solomon' 2 1       -> "Song of Solomon", 2, 1
//! ```
//!
//! Three or more tokens are always a reference, even if the first token is a
//! command letter. Exactly two tokens are neither a command nor a complete
//! reference.

use crate::error::{BibleError, Result};
use crate::model::Passage;

const QUOTES: [char; 2] = ['"', '\''];

/// The only book name in the corpus that spans three tokens.
const THREE_WORD_BOOK: &str = "Song of Solomon";

/// Single-letter interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Random,
    Bookmark,
    Favorite,
    Quit,
    Help,
}

impl Command {
    /// Matches a single token against the command letters, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "n" => Some(Command::Next),
            "p" => Some(Command::Prev),
            "r" => Some(Command::Random),
            "b" => Some(Command::Bookmark),
            "f" => Some(Command::Favorite),
            "q" | "x" => Some(Command::Quit),
            "?" | "h" => Some(Command::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Command(Command),
    /// Three or more tokens, to be disambiguated.
    Reference(Vec<String>),
    /// Two tokens: not a command and too short to be a reference.
    Incomplete(Vec<String>),
    /// A single token that is not a command letter.
    Invalid(String),
}

pub fn tokenize(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(' ').map(str::to_string).collect()
}

pub fn classify(line: &str) -> Input {
    let mut tokens = tokenize(line);
    match tokens.len() {
        0 => Input::Empty,
        1 => {
            let token = tokens.remove(0);
            match Command::from_token(&token) {
                Some(cmd) => Input::Command(cmd),
                None => Input::Invalid(token),
            }
        }
        2 => Input::Incomplete(tokens),
        _ => Input::Reference(tokens),
    }
}

/// Reassembles the book name from the leading tokens.
///
/// First match wins:
/// 1. quoted and the first three tokens spell `Song of Solomon`: 3-token name
/// 2. quote opened and closed within the first token: 1-token name (`"Genesis"`)
/// 3. quoted: 2-token name (`"1 John"`)
/// 4. otherwise: 1-token name
///
/// Exactly two tokens must follow the name (chapter and verse). A closing quote
/// is not required.
pub fn disambiguate<S: AsRef<str>>(tokens: &[S]) -> Result<Passage> {
    let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    let (book, rest) = match tokens.first().and_then(|t| opening_quote(t)) {
        Some(quote) => {
            let three = joined_name(&tokens, 3, quote);
            if three.as_deref() == Some(THREE_WORD_BOOK) {
                (THREE_WORD_BOOK.to_string(), &tokens[3..])
            } else if is_closed(tokens[0], quote) {
                (tokens[0].trim_matches(quote).to_string(), &tokens[1..])
            } else {
                let two = joined_name(&tokens, 2, quote).ok_or_else(|| incomplete(&tokens))?;
                (two, &tokens[2..])
            }
        }
        None => {
            let one = tokens.first().ok_or_else(|| incomplete(&tokens))?;
            (one.to_string(), &tokens[1..])
        }
    };

    match rest {
        [chapter, verse] => Ok(Passage::new(book, *chapter, *verse)),
        [] | [_] => Err(incomplete(&tokens)),
        _ => Err(BibleError::InvalidInput(format!(
            "Too many parts in '{}'. Expected Book Chapter Verse",
            tokens.join(" ")
        ))),
    }
}

fn opening_quote(token: &str) -> Option<char> {
    token.chars().next().filter(|c| QUOTES.contains(c))
}

fn is_closed(token: &str, quote: char) -> bool {
    token.len() > 1 && token.ends_with(quote)
}

fn joined_name(tokens: &[&str], count: usize, quote: char) -> Option<String> {
    if tokens.len() < count {
        return None;
    }
    Some(tokens[..count].join(" ").trim_matches(quote).to_string())
}

fn incomplete(tokens: &[&str]) -> BibleError {
    BibleError::InvalidInput(incomplete_message(tokens))
}

/// Shown when a reference is missing its chapter or verse.
pub fn incomplete_message<S: AsRef<str>>(tokens: &[S]) -> String {
    let typed: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    format!(
        "Incomplete reference '{}'. Expected Book Chapter Verse (ie Genesis 1 1)",
        typed.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(line: &str) -> Vec<String> {
        tokenize(line)
    }

    #[test]
    fn tokenize_trims_and_splits_on_single_spaces() {
        assert_eq!(toks("  Genesis 1 1\n"), vec!["Genesis", "1", "1"]);
        assert!(toks("   ").is_empty());
        assert_eq!(toks("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn single_tokens_are_commands_or_invalid() {
        assert_eq!(classify("n"), Input::Command(Command::Next));
        assert_eq!(classify("R"), Input::Command(Command::Random));
        assert_eq!(classify("x"), Input::Command(Command::Quit));
        assert_eq!(classify("?"), Input::Command(Command::Help));
        assert_eq!(classify("h"), Input::Command(Command::Help));
        assert_eq!(classify("zz"), Input::Invalid("zz".into()));
        assert_eq!(classify(""), Input::Empty);
    }

    #[test]
    fn two_tokens_are_incomplete() {
        assert_eq!(
            classify("Genesis 1"),
            Input::Incomplete(vec!["Genesis".into(), "1".into()])
        );
    }

    #[test]
    fn three_tokens_are_references_even_with_command_letter() {
        assert_eq!(
            classify("n 1 1"),
            Input::Reference(vec!["n".into(), "1".into(), "1".into()])
        );
    }

    #[test]
    fn plain_book_name() {
        let p = disambiguate(&toks("Genesis 1 1")).unwrap();
        assert_eq!(p, Passage::new("Genesis", "1", "1"));
    }

    #[test]
    fn quoted_single_word_book_matches_plain_form() {
        let plain = disambiguate(&toks("Genesis 1 1")).unwrap();
        assert_eq!(disambiguate(&toks(r#""Genesis" 1 1"#)).unwrap(), plain);
        assert_eq!(disambiguate(&toks("'Genesis' 1 1")).unwrap(), plain);
    }

    #[test]
    fn numbered_book_with_double_quotes() {
        let p = disambiguate(&["\"1", "John\"", "3", "16"]).unwrap();
        assert_eq!(p, Passage::new("1 John", "3", "16"));
    }

    #[test]
    fn numbered_book_with_single_quotes() {
        let p = disambiguate(&toks("'2 Kings' 5 14")).unwrap();
        assert_eq!(p, Passage::new("2 Kings", "5", "14"));
    }

    #[test]
    fn closing_quote_is_optional() {
        let p = disambiguate(&toks("\"1 John 3 16")).unwrap();
        assert_eq!(p.book, "1 John");
    }

    #[test]
    fn three_word_book() {
        let p = disambiguate(&["\"Song", "of", "Solomon\"", "2", "1"]).unwrap();
        assert_eq!(p, Passage::new("Song of Solomon", "2", "1"));

        let p = disambiguate(&toks("'Song of Solomon' 2 16")).unwrap();
        assert_eq!(p, Passage::new("Song of Solomon", "2", "16"));
    }

    #[test]
    fn three_word_book_is_case_sensitive() {
        // Falls through to the two-token arm, leaving too many parts.
        assert!(disambiguate(&toks("\"song of solomon\" 2 1")).is_err());
    }

    #[test]
    fn too_few_tokens_fail() {
        assert!(disambiguate(&toks("\"Song of Solomon\" 2")).is_err());
        assert!(disambiguate(&toks("\"1 John\" 3")).is_err());
        assert!(disambiguate(&toks("Genesis 1")).is_err());
        assert!(disambiguate::<&str>(&[]).is_err());
    }

    #[test]
    fn surplus_tokens_fail() {
        let err = disambiguate(&toks("Genesis 1 1 1")).unwrap_err();
        assert!(matches!(err, BibleError::InvalidInput(_)));
    }
}
