//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and `#` comments are skipped; lines that are not valid secret words are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline-delimited words, skipping blanks, comments and invalid entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            SecretWord::new(trimmed)
                .inspect_err(|e| warn!("skipping word list line {}: {e}", line_no + 1))
                .ok()
        })
        .collect()
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["hangman", "Developer", "interface"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "hangman");
        assert_eq!(words[1].text(), "developer");
        assert_eq!(words[2].text(), "interface");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["hangman", "two words", "", "c3po", "interface"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "hangman");
        assert_eq!(words[1].text(), "interface");
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let content = "# animals\ncat\n\n  dog  \nbad word\n";
        let words = parse_word_list(content);
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!("hangman-words-{}.txt", std::process::id()));
        fs::write(&path, "rust\ncargo\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "cargo");
    }
}
