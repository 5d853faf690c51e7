//! Hangman game state engine
//!
//! A `Session` owns the state of one game: the secret word, the letters guessed so far,
//! the wrong-guess count and the remaining hint budget. It is a plain value owned by the
//! caller; every operation mutates it in place and returns a [`Turn`] describing what
//! changed, so a front-end can render from deltas without inspecting the state itself.
//!
//! All randomness (word choice, hint letter) comes from an injected [`Rng`], so a seeded
//! generator makes every game reproducible.

use super::{LetterSet, SecretWord, WordError};
use crate::wordlists::choose_word;
use log::{debug, info};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Number of hangman figure parts, and the default wrong-guess limit
pub const FIGURE_PARTS: u8 = 6;

/// Default number of hints per session
pub const DEFAULT_HINTS: u8 = 3;

/// Tunable rules for a session
///
/// The wrong-guess limit stays within `1..=FIGURE_PARTS` and the hint budget within
/// `0..=DEFAULT_HINTS`; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_wrong_guesses: u8,
    hint_budget: u8,
}

impl GameConfig {
    #[must_use]
    pub fn new(max_wrong_guesses: u8, hint_budget: u8) -> Self {
        Self {
            max_wrong_guesses: max_wrong_guesses.clamp(1, FIGURE_PARTS),
            hint_budget: hint_budget.min(DEFAULT_HINTS),
        }
    }

    /// Wrong guesses allowed before the game is lost
    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(self) -> u8 {
        self.max_wrong_guesses
    }

    /// Hints available at the start of a session
    #[inline]
    #[must_use]
    pub const fn hint_budget(self) -> u8 {
        self.hint_budget
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(FIGURE_PARTS, DEFAULT_HINTS)
    }
}

/// Game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a single operation did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A guessed letter occurs in the word
    Correct { letter: char, occurrences: usize },
    /// A guessed letter is not in the word; `stage` is the new wrong-guess count
    Wrong { letter: char, stage: u8 },
    /// A hint revealed a letter
    Hinted {
        letter: char,
        occurrences: usize,
        hints_left: u8,
    },
    /// Nothing changed
    Ignored(Ignored),
}

/// Why an operation left the session untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    GameOver,
    NotALetter,
    AlreadyGuessed,
    NoHintsLeft,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::GameOver => "The game is already over",
            Self::NotALetter => "Only letters a-z can be guessed",
            Self::AlreadyGuessed => "You already tried that letter",
            Self::NoHintsLeft => "No hints left",
        };
        f.write_str(text)
    }
}

/// Terminal event emitted by the operation that ended the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finished {
    Won,
    Lost { secret: String },
}

/// Result of one operation: the change plus the terminal event, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub change: Change,
    pub finished: Option<Finished>,
}

impl Turn {
    const fn ignored(reason: Ignored) -> Self {
        Self {
            change: Change::Ignored(reason),
            finished: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.change, Change::Ignored(_))
    }
}

/// Error starting a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    InvalidWord(WordError),
    EmptyWordList,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::EmptyWordList => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::EmptyWordList => None,
        }
    }
}

impl From<WordError> for StartError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

/// State of one Hangman game
#[derive(Debug, Clone)]
pub struct Session {
    word: SecretWord,
    config: GameConfig,
    correct: LetterSet,
    wrong: LetterSet,
    hints_remaining: u8,
    outcome: Outcome,
}

impl Session {
    /// Start a session on an already validated word
    #[must_use]
    pub fn new(word: SecretWord, config: GameConfig) -> Self {
        debug!(
            "session started: {} letters, {} wrong guesses allowed, {} hints",
            word.len(),
            config.max_wrong_guesses(),
            config.hint_budget()
        );

        Self {
            word,
            config,
            correct: LetterSet::EMPTY,
            wrong: LetterSet::EMPTY,
            hints_remaining: config.hint_budget(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start a session on a custom word, or on a random word from `words`
    ///
    /// # Errors
    ///
    /// Returns `StartError::InvalidWord` if `custom` is not a valid secret word, or
    /// `StartError::EmptyWordList` if no custom word is given and `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameConfig, Session};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = Session::start(Some("Cat"), &[], GameConfig::default(), &mut rng).unwrap();
    /// assert_eq!(session.masked(), "_ _ _");
    /// assert_eq!(session.hints_remaining(), 3);
    /// ```
    pub fn start<R: Rng + ?Sized>(
        custom: Option<&str>,
        words: &[SecretWord],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, StartError> {
        let word = match custom {
            Some(text) => SecretWord::new(text)?,
            None => choose_word(words, rng)
                .cloned()
                .ok_or(StartError::EmptyWordList)?,
        };
        Ok(Self::new(word, config))
    }

    /// Guess a letter
    ///
    /// Uppercase input is folded to lowercase. The guess is ignored when the game is over,
    /// the character is not an ASCII letter, or the letter was already tried.
    pub fn guess(&mut self, letter: char) -> Turn {
        if self.outcome.is_over() {
            return Turn::ignored(Ignored::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Turn::ignored(Ignored::NotALetter);
        }

        let letter = letter.to_ascii_lowercase();
        let byte = letter as u8;
        if self.correct.contains(byte) || self.wrong.contains(byte) {
            return Turn::ignored(Ignored::AlreadyGuessed);
        }

        let change = if self.word.has_letter(byte) {
            self.correct.insert(byte);
            Change::Correct {
                letter,
                occurrences: self.word.positions_of(byte).len(),
            }
        } else {
            self.wrong.insert(byte);
            Change::Wrong {
                letter,
                stage: self.wrong_guess_count(),
            }
        };
        debug!("guess '{letter}': {change:?}");

        Turn {
            change,
            finished: self.settle(),
        }
    }

    /// Reveal one random unguessed letter of the word
    ///
    /// Every distinct unrevealed letter is equally likely. Ignored when the game is over
    /// or no hints remain. Never counts as a wrong guess.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Turn {
        if self.outcome.is_over() {
            return Turn::ignored(Ignored::GameOver);
        }
        if self.hints_remaining == 0 {
            return Turn::ignored(Ignored::NoHintsLeft);
        }

        let hidden: Vec<u8> = self.word.letters().difference(self.correct).iter().collect();
        // An in-progress game always has a hidden letter; a fully revealed word is won
        let Some(&byte) = hidden.choose(rng) else {
            return Turn::ignored(Ignored::GameOver);
        };

        self.correct.insert(byte);
        self.hints_remaining -= 1;

        let change = Change::Hinted {
            letter: char::from(byte),
            occurrences: self.word.positions_of(byte).len(),
            hints_left: self.hints_remaining,
        };
        debug!("hint: {change:?}");

        Turn {
            change,
            finished: self.settle(),
        }
    }

    /// Recompute the outcome after a mutation; win is checked before loss
    fn settle(&mut self) -> Option<Finished> {
        if self.correct.is_superset(self.word.letters()) {
            self.outcome = Outcome::Won;
            info!(
                "game won with {} wrong guesses and {} hints left",
                self.wrong_guess_count(),
                self.hints_remaining
            );
            Some(Finished::Won)
        } else if self.wrong_guess_count() >= self.config.max_wrong_guesses() {
            self.outcome = Outcome::Lost;
            info!("game lost, the word was \"{}\"", self.word);
            Some(Finished::Lost {
                secret: self.word.text().to_string(),
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Wrong guesses so far, which is also the hangman figure stage
    #[inline]
    #[must_use]
    pub const fn wrong_guess_count(&self) -> u8 {
        self.wrong.len() as u8
    }

    /// Wrong guesses still allowed before the game is lost
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> u8 {
        self.config
            .max_wrong_guesses()
            .saturating_sub(self.wrong_guess_count())
    }

    /// Letters known to be in the word, whether guessed or hinted
    #[inline]
    #[must_use]
    pub const fn correct_letters(&self) -> LetterSet {
        self.correct
    }

    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.wrong
    }

    /// Every letter tried so far
    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> LetterSet {
        self.correct.union(self.wrong)
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Per-position view of the word: `Some(letter)` once revealed
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .as_bytes()
            .iter()
            .map(|&b| self.correct.contains(b).then_some(char::from(b)))
            .collect()
    }

    /// Masked word with `_` for hidden letters, positions separated by spaces
    ///
    /// `"cat"` with only `c` guessed renders as `"c _ _"`.
    #[must_use]
    pub fn masked(&self) -> String {
        self.revealed()
            .into_iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The secret word, only available once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.outcome.is_over().then(|| self.word.text())
    }
}
