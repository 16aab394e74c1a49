use alloc::string::String;
use jeopardy_protocol::CategoryId;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No clue at category {category}, row {clue}")]
    InvalidTag { category: usize, clue: usize },
    #[error("Board shape does not match the configured size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure while loading a board from a [`TriviaSource`](crate::TriviaSource).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Expected {expected} categories, got {got}")]
    TooFewCategories { expected: usize, got: usize },
    #[error("Category {id} has only {usable} usable clues, need {needed}")]
    IncompleteCategory {
        id: CategoryId,
        usable: usize,
        needed: usize,
    },
    #[error(transparent)]
    Board(#[from] GameError),
}

pub type TriviaResult<T> = core::result::Result<T, TriviaError>;
