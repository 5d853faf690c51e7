//! Interactive TUI interface
//!
//! Full-screen Hangman with a mode menu, hidden challenge word entry, physical keyboard
//! guessing and end-of-game animations.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, run_tui};
