use crate::model::VerseId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BibleError {
    #[error("Verse {0} not found")]
    VerseNotFound(String),

    #[error("Verse not found (id {0})")]
    RecordNotFound(VerseId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corpus error: {0}")]
    Corpus(String),
}

pub type Result<T> = std::result::Result<T, BibleError>;
