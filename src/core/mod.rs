//! Core domain types for Hangman
//!
//! The game state engine and the value types it is built from. Nothing here touches
//! the terminal; randomness is always passed in by the caller.

mod letters;
mod session;
mod stats;
mod word;

pub use letters::LetterSet;
pub use session::{
    Change, DEFAULT_HINTS, FIGURE_PARTS, Finished, GameConfig, Ignored, Outcome, Session,
    StartError, Turn,
};
pub use stats::Statistics;
pub use word::{SecretWord, WordError};
