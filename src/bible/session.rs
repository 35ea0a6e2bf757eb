//! # Navigation Session
//!
//! The interactive reader as a state machine. The session owns nothing but its
//! current position; each line of input is handed to [`Session::handle`], which
//! returns a [`CmdResult`] describing what to show. The caller does all I/O.
//!
//! ```text
//! AwaitingInitialReference --(reference | r | b)--> Browsing(id)
//! AwaitingInitialReference --q--> Terminated
//! Browsing(id) --(n | p | r | b | reference)--> Browsing(id')
//! Browsing(id) --(q | x | id' has no record)--> Terminated
//! ```
//!
//! Whenever the position changes, the new verse is looked up and placed in
//! `listed_verses`. If that lookup fails (walking off either end of the
//! corpus, or a stale bookmark) the session terminates with a "not found"
//! error rather than looping on an invalid position.

use crate::commands::{bookmarks, random, resolve, CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::model::VerseId;
use crate::parser::{classify, incomplete_message, Command, Input};
use crate::store::{SaveStore, VerseStore};
use rand::Rng;

pub const HELP: &str = "\
Commands:
  n          next verse
  p          previous verse
  r          random verse
  b          bookmark this verse, or jump to the saved bookmark
  f          add this verse to favorites (or remove it)
  q, x       quit
  ?, h       this help
  Book Chapter Verse   jump to a verse (quote multi-word books: \"1 John\" 3 16)";

const INITIAL_USAGE: &str =
    "Please enter either a book chapter verse (ie Genesis 1 1), 'r' for a random verse or 'b' for your bookmark";

const BROWSING_USAGE: &str = "Invalid input. Please enter 'n', 'p', 'r', 'b', 'f', 'q' or '?' for help.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInitialReference,
    Browsing(VerseId),
    Terminated,
}

pub struct Session<'a, V: VerseStore, S: SaveStore, R: Rng> {
    corpus: &'a V,
    saves: &'a mut S,
    rng: R,
    state: SessionState,
}

impl<'a, V: VerseStore, S: SaveStore, R: Rng> Session<'a, V, S, R> {
    pub fn new(corpus: &'a V, saves: &'a mut S, rng: R) -> Self {
        Self {
            corpus,
            saves,
            rng,
            state: SessionState::AwaitingInitialReference,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Processes one line of input.
    pub fn handle<C: Confirm>(&mut self, line: &str, confirm: &mut C) -> CmdResult {
        let input = classify(line);
        match self.state {
            SessionState::Terminated => CmdResult::default(),
            SessionState::AwaitingInitialReference => self.handle_initial(input),
            SessionState::Browsing(current) => self.handle_browsing(current, input, confirm),
        }
    }

    fn handle_initial(&mut self, input: Input) -> CmdResult {
        match input {
            Input::Empty => CmdResult::default(),
            Input::Command(Command::Random) => {
                let outcome = self.random_id();
                self.settle(outcome)
            }
            Input::Command(Command::Bookmark) => {
                let outcome = bookmarks::load_bookmark(&*self.saves);
                self.settle(outcome)
            }
            Input::Command(Command::Quit) => self.terminate(),
            Input::Command(Command::Help) => help(),
            Input::Reference(tokens) => {
                let outcome = self.lookup(&tokens);
                self.settle(outcome)
            }
            Input::Command(Command::Next | Command::Prev | Command::Favorite)
            | Input::Incomplete(_)
            | Input::Invalid(_) => message(CmdMessage::warning(INITIAL_USAGE)),
        }
    }

    fn handle_browsing<C: Confirm>(
        &mut self,
        current: VerseId,
        input: Input,
        confirm: &mut C,
    ) -> CmdResult {
        match input {
            Input::Empty => CmdResult::default(),
            Input::Command(Command::Next) => self.move_to(current.next(), CmdResult::default()),
            Input::Command(Command::Prev) => match current.prev() {
                Some(prev) => self.move_to(prev, CmdResult::default()),
                None => message(CmdMessage::info("You are at the first verse.")),
            },
            Input::Command(Command::Random) => {
                let outcome = self.random_id();
                self.settle(outcome)
            }
            Input::Command(Command::Bookmark) => {
                let outcome = bookmarks::bookmark_flow(self.corpus, self.saves, current, confirm);
                self.settle(outcome)
            }
            // Position is unchanged, so nothing is redisplayed.
            Input::Command(Command::Favorite) => {
                match bookmarks::toggle_favorite(self.corpus, self.saves, current, confirm) {
                    Ok(result) => result,
                    Err(e) => message(CmdMessage::error(e.to_string())),
                }
            }
            Input::Command(Command::Quit) => self.terminate(),
            Input::Command(Command::Help) => help(),
            Input::Reference(tokens) => {
                let outcome = self.lookup(&tokens);
                self.settle(outcome)
            }
            Input::Incomplete(tokens) => {
                message(CmdMessage::warning(incomplete_message(&tokens)))
            }
            Input::Invalid(_) => message(CmdMessage::warning(BROWSING_USAGE)),
        }
    }

    fn lookup(&self, tokens: &[String]) -> Result<CmdResult> {
        let id = resolve::resolve_tokens(self.corpus, tokens)?;
        Ok(CmdResult::default().with_position(id))
    }

    fn random_id(&mut self) -> Result<CmdResult> {
        let passage = random::pick_random(self.corpus, &mut self.rng)?;
        let id = resolve::resolve(self.corpus, &passage)?;
        Ok(CmdResult::default().with_position(id))
    }

    /// Applies the outcome of a command that may pick a new position. On
    /// failure the error is reported and the state is left alone.
    fn settle(&mut self, outcome: Result<CmdResult>) -> CmdResult {
        match outcome {
            Ok(mut result) => match result.position.take() {
                Some(id) => self.move_to(id, result),
                None => result,
            },
            Err(e) => message(CmdMessage::error(e.to_string())),
        }
    }

    fn move_to(&mut self, id: VerseId, mut result: CmdResult) -> CmdResult {
        match resolve::record_of(self.corpus, id) {
            Ok(record) => {
                self.state = SessionState::Browsing(id);
                result.position = Some(id);
                result.listed_verses.push(record);
            }
            Err(e) => {
                tracing::debug!("Ending session: {}", e);
                self.state = SessionState::Terminated;
                result.add_message(CmdMessage::error(e.to_string()));
            }
        }
        result
    }

    fn terminate(&mut self) -> CmdResult {
        self.state = SessionState::Terminated;
        CmdResult::default()
    }
}

fn help() -> CmdResult {
    message(CmdMessage::info(HELP))
}

fn message(msg: CmdMessage) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(msg);
    result
}
