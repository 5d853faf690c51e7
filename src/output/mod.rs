//! Terminal output formatting
//!
//! Display utilities for the line-based game and text helpers shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_change, print_defeat, print_statistics, print_victory};
