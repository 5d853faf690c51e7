//! Secret word representation
//!
//! A `SecretWord` is the validated, lowercased word a Hangman session is played on,
//! together with a letter position index used for revealing and hinting.

use super::LetterSet;
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated secret word
///
/// Non-empty and made only of ASCII letters, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: LetterSet,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for rejected secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains '{c}' (letters only, no spaces or numbers)")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and the word is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed word is empty
    /// - It contains non-ASCII characters
    /// - It contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("  Hangman ").unwrap();
    /// assert_eq!(word.text(), "hangman");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("two words").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }
        let letters = char_positions.keys().copied().collect();

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letter positions (not distinct letters)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("JavaScript").unwrap();
        assert_eq!(word.text(), "javascript");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = SecretWord::new("\tdeveloper \n").unwrap();
        assert_eq!(word.text(), "developer");
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            SecretWord::new("two words"),
            Err(WordError::InvalidCharacter(' '))
        );
        assert_eq!(
            SecretWord::new("abc1"),
            Err(WordError::InvalidCharacter('1'))
        );
        assert_eq!(
            SecretWord::new("don't"),
            Err(WordError::InvalidCharacter('\''))
        );
    }

    #[test]
    fn word_creation_non_ascii_rejected() {
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn distinct_letters() {
        let word = SecretWord::new("bee").unwrap();
        assert_eq!(word.letters().len(), 2);
        assert!(word.has_letter(b'b'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'a'));
    }

    #[test]
    fn positions_of_duplicates() {
        let word = SecretWord::new("programming").unwrap();
        assert_eq!(word.positions_of(b'r'), &[1, 4]);
        assert_eq!(word.positions_of(b'm'), &[6, 7]);
        assert_eq!(word.positions_of(b'p'), &[0]);
        assert_eq!(word.positions_of(b'z'), &[]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(WordError::Empty.to_string(), "Word must not be empty");
        assert!(
            WordError::InvalidCharacter('3')
                .to_string()
                .contains("'3'")
        );
    }
}
