//! Hangman
//!
//! A terminal Hangman game built around a pure, caller-owned game state engine.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Finished, GameConfig, SecretWord, Session};
//!
//! let word = SecretWord::new("cat").unwrap();
//! let mut session = Session::new(word, GameConfig::default());
//!
//! session.guess('c');
//! assert_eq!(session.masked(), "c _ _");
//!
//! session.guess('a');
//! let turn = session.guess('t');
//! assert_eq!(turn.finished, Some(Finished::Won));
//! ```

// Core domain types and the game state engine
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
