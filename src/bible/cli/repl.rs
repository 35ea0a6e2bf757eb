//! The interactive input loop. Generic over reader and writer so the whole
//! conversation can be driven from a byte buffer in tests.

use super::print::{write_messages, write_verses};
use bible::api::{Confirm, Confirmation};
use bible::session::{Session, SessionState};
use bible::store::{SaveStore, VerseStore};
use rand::Rng;
use std::io::{self, BufRead, Write};

const INITIAL_PROMPT: &str = "Enter Book Chapter Verse (ie Genesis 1 1): ";
const PROMPT: &str = ": ";

pub(super) struct Terminal<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Shows `prompt` and reads one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    fn into_output(self) -> O {
        self.output
    }
}

impl<I: BufRead, O: Write> Confirm for Terminal<I, O> {
    fn confirm(&mut self, question: &str) -> Confirmation {
        let answer = match self.read_line(&format!("{} [y/N] ", question)) {
            Ok(Some(answer)) => answer,
            Ok(None) => return Confirmation::Decline,
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                return Confirmation::Decline;
            }
        };
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Confirmation::Confirm,
            _ => Confirmation::Decline,
        }
    }
}

pub(super) fn run<V, S, R, I, O>(
    session: &mut Session<'_, V, S, R>,
    terminal: &mut Terminal<I, O>,
    width: usize,
) -> io::Result<()>
where
    V: VerseStore,
    S: SaveStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    while !session.is_terminated() {
        let prompt = match session.state() {
            SessionState::AwaitingInitialReference => INITIAL_PROMPT,
            _ => PROMPT,
        };
        let Some(line) = terminal.read_line(prompt)? else {
            writeln!(terminal.output)?;
            break;
        };

        let result = session.handle(&line, terminal);
        write_messages(&mut terminal.output, &result.messages)?;
        write_verses(&mut terminal.output, &result.listed_verses, width)?;
    }
    terminal.output.flush()
}
