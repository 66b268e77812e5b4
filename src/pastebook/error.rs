use std::fmt;
use thiserror::Error;

/// The mutation a non-owner attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Edit => write!(f, "edit"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PasteError {
    #[error("Paste already exists: {0}")]
    DuplicateIdentifier(String),

    #[error("You can only {action} your own pastes")]
    NotAuthorized { action: Action, id: String },

    #[error("Paste not found: {0}")]
    PasteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PasteError>;
