//! Formatting utilities for terminal output

use crate::core::{FIGURE_PARTS, LetterSet, Session, Statistics};

/// How each letter key is shown on a keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// Keyboard layout used by both front-ends
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Number of figure parts to draw for a wrong-guess stage
///
/// Scales to the full figure when the wrong-guess limit is lower than the number of parts,
/// so a lost game always shows the complete hangman.
#[must_use]
pub fn figure_parts_shown(stage: u8, max_wrong: u8) -> u8 {
    if max_wrong == 0 {
        return FIGURE_PARTS;
    }
    let stage = u16::from(stage.min(max_wrong));
    let scaled = (stage * u16::from(FIGURE_PARTS)).div_ceil(u16::from(max_wrong));
    scaled as u8
}

/// Draw the gallows with the first `parts` body parts
///
/// Parts are added in order: head, body, left arm, right arm, left leg, right leg.
#[must_use]
pub fn hangman_figure(parts: u8) -> Vec<String> {
    let part = |n: u8, drawn: &'static str| if parts >= n { drawn } else { " " };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, "O")),
        format!(" {}{}{}  |", part(3, "/"), part(2, "|"), part(4, "\\")),
        format!(" {} {}  |", part(5, "/"), part(6, "\\")),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Masked word in upper case, e.g. `C A _`
#[must_use]
pub fn masked_word(session: &Session) -> String {
    session.masked().to_uppercase()
}

/// Classify a letter for keyboard rendering
#[must_use]
pub fn key_state(session: &Session, letter: u8) -> KeyState {
    if session.correct_letters().contains(letter) {
        KeyState::Correct
    } else if session.wrong_letters().contains(letter) {
        KeyState::Wrong
    } else {
        KeyState::Unused
    }
}

/// Plain-text keyboard rows with used letters replaced by `·`
#[must_use]
pub fn keyboard_rows(used: LetterSet) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|b| {
                    if used.contains(b) {
                        "·".to_string()
                    } else {
                        char::from(b).to_ascii_uppercase().to_string()
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Letters joined by commas in upper case, or `-` when there are none
#[must_use]
pub fn letter_list(letters: LetterSet) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|b| char::from(b).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Remaining lives as a bar, full when no wrong guesses have been made
#[must_use]
pub fn lives_bar(session: &Session, width: usize) -> String {
    let max = usize::from(session.config().max_wrong_guesses());
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = (usize::from(session.guesses_left()) * width / max).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Filled cells of a distribution bar for `count` out of `total`
#[must_use]
pub fn distribution_bar_width(count: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (count * width / total).min(width)
}

/// Won games per wrong-guess count, e.g. `0:2 1:1 2:0 3:0 4:0 5:0`
#[must_use]
pub fn distribution_summary(stats: &Statistics) -> String {
    stats
        .wrong_guess_distribution
        .iter()
        .enumerate()
        .map(|(misses, count)| format!("{misses}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, SecretWord};

    fn session(word: &str) -> Session {
        Session::new(SecretWord::new(word).unwrap(), GameConfig::default())
    }

    #[test]
    fn empty_figure_has_no_body() {
        let figure = hangman_figure(0);
        assert_eq!(figure.len(), 7);
        assert!(!figure.iter().any(|line| line.contains('O')));
    }

    #[test]
    fn full_figure() {
        let figure = hangman_figure(6);
        assert_eq!(figure[2], "  O   |");
        assert_eq!(figure[3], " /|\\  |");
        assert_eq!(figure[4], " / \\  |");
    }

    #[test]
    fn figure_lines_keep_their_width() {
        for parts in 0..=6 {
            let figure = hangman_figure(parts);
            assert_eq!(figure[2].len(), 7);
            assert_eq!(figure[3].len(), 7);
            assert_eq!(figure[4].len(), 7);
        }
    }

    #[test]
    fn parts_scale_with_lower_limits() {
        assert_eq!(figure_parts_shown(0, 6), 0);
        assert_eq!(figure_parts_shown(4, 6), 4);
        assert_eq!(figure_parts_shown(1, 3), 2);
        assert_eq!(figure_parts_shown(3, 3), 6);
        assert_eq!(figure_parts_shown(1, 1), 6);
    }

    #[test]
    fn masked_word_upper_case() {
        let mut s = session("cat");
        s.guess('c');
        assert_eq!(masked_word(&s), "C _ _");
    }

    #[test]
    fn key_states() {
        let mut s = session("cat");
        s.guess('a');
        s.guess('z');
        assert_eq!(key_state(&s, b'a'), KeyState::Correct);
        assert_eq!(key_state(&s, b'z'), KeyState::Wrong);
        assert_eq!(key_state(&s, b'c'), KeyState::Unused);
    }

    #[test]
    fn keyboard_hides_used_letters() {
        let used: LetterSet = b"qa".iter().copied().collect();
        let rows = keyboard_rows(used);
        assert!(rows[0].starts_with("· W E"));
        assert!(rows[1].starts_with(" · S"));
        assert!(rows[2].starts_with("  Z X"));
    }

    #[test]
    fn letter_list_formatting() {
        assert_eq!(letter_list(LetterSet::EMPTY), "-");
        let letters: LetterSet = b"zx".iter().copied().collect();
        assert_eq!(letter_list(letters), "X, Z");
    }

    #[test]
    fn lives_bar_drains() {
        let mut s = session("cat");
        assert_eq!(lives_bar(&s, 6), "██████");
        s.guess('x');
        s.guess('y');
        assert_eq!(lives_bar(&s, 6), "████░░");
    }

    #[test]
    fn distribution_bars_scale_to_width() {
        assert_eq!(distribution_bar_width(0, 0, 40), 0);
        assert_eq!(distribution_bar_width(1, 4, 40), 10);
        assert_eq!(distribution_bar_width(4, 4, 40), 40);
    }

    #[test]
    fn distribution_summary_lists_every_bucket() {
        let mut stats = Statistics::default();
        stats.wrong_guess_distribution[0] = 2;
        stats.wrong_guess_distribution[3] = 1;
        assert_eq!(distribution_summary(&stats), "0:2 1:0 2:0 3:1 4:0 5:0");
    }
}
