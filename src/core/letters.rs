//! Compact letter set
//!
//! A set of the 26 lowercase ASCII letters stored as a bitmask.

use std::fmt;

/// A set of lowercase ASCII letters
///
/// Bit `i` is set when the letter `b'a' + i` is present.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter - b'a'))
        } else {
            None
        }
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// Bytes outside `a..=z` are ignored and return `false`.
    pub fn insert(&mut self, letter: u8) -> bool {
        let Some(bit) = Self::bit(letter) else {
            return false;
        };
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..26u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| b'a' + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_new_letters_only() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'c'));
        assert!(!set.insert(b'c'));
        assert!(set.contains(b'c'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_ignores_non_lowercase() {
        let mut set = LetterSet::EMPTY;
        assert!(!set.insert(b'C'));
        assert!(!set.insert(b'1'));
        assert!(set.is_empty());
        assert!(!set.contains(b'C'));
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz");
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn superset_and_difference() {
        let word: LetterSet = b"cat".iter().copied().collect();
        let guessed: LetterSet = b"ct".iter().copied().collect();

        assert!(!guessed.is_superset(word));
        assert_eq!(word.difference(guessed).to_string(), "a");
        assert!(guessed.union(word).is_superset(word));
    }
}
