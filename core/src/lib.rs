//! Game model of the trivia board: categories of clues, the reveal state machine, board loading
//! and the session state driven by the front-end.

#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use error::*;
pub use session::*;
pub use source::*;

mod board;
mod clue;
mod error;
mod session;
mod source;

/// Board dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;

    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES_PER_CATEGORY)
    }
}
