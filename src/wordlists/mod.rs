//! Word lists for Hangman
//!
//! Provides the built-in word list compiled into the binary, plus loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a secret word uniformly at random, or `None` for an empty list
///
/// # Examples
/// ```
/// use hangman::wordlists::{WORDS, choose_word, loader::words_from_slice};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = words_from_slice(WORDS);
/// let mut rng = StdRng::seed_from_u64(1);
/// assert!(choose_word(&words, &mut rng).is_some());
/// assert!(choose_word(&[], &mut rng).is_none());
/// ```
pub fn choose_word<'a, R: Rng + ?Sized>(
    words: &'a [SecretWord],
    rng: &mut R,
) -> Option<&'a SecretWord> {
    words.choose(rng)
}
