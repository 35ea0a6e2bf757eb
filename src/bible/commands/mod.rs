use crate::model::{VerseId, VerseRecord};

pub mod bookmarks;
pub mod info;
pub mod random;
pub mod read;
pub mod resolve;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Verses to display, in order.
    pub listed_verses: Vec<VerseRecord>,
    /// Position a navigation command settled on.
    pub position: Option<VerseId>,
    pub books: Vec<String>,
    pub count: Option<usize>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_verses(mut self, verses: Vec<VerseRecord>) -> Self {
        self.listed_verses = verses;
        self
    }

    pub fn with_position(mut self, id: VerseId) -> Self {
        self.position = Some(id);
        self
    }

    pub fn with_books(mut self, books: Vec<String>) -> Self {
        self.books = books;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Outcome of asking the user a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirm,
    Decline,
}

/// Asks the user to confirm an action. Implemented by the UI client.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Confirmation;
}
