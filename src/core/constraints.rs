//! Constraints gathered from previous guesses
//!
//! Three independent constraint classes narrow the dictionary:
//! - a positional mask of letters confirmed in place
//! - letters known to be somewhere in the answer
//! - letters known to be absent from the answer

use super::word::{WORD_LENGTH, Word, letter_bit};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Character marking an unknown slot in a mask string
pub const WILDCARD: char = '_';

/// Error type for malformed constraint strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("{field} must be exactly {len} characters, got {got}", len = WORD_LENGTH)]
    MaskLength { field: &'static str, got: usize },
    #[error("{field} contains illegal character '{ch}'")]
    IllegalCharacter { field: &'static str, ch: char },
}

/// Letters confirmed at exact positions, `None` for unknown slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionalMask {
    slots: [Option<u8>; WORD_LENGTH],
}

impl PositionalMask {
    /// Parse a mask such as `s__e_`, naming `field` in any error
    ///
    /// # Errors
    /// Returns `ConstraintError` if the mask is not exactly [`WORD_LENGTH`]
    /// characters or contains anything other than `a-z` and `_`.
    pub fn parse(field: &'static str, mask: &str) -> Result<Self, ConstraintError> {
        let got = mask.chars().count();
        if got != WORD_LENGTH {
            return Err(ConstraintError::MaskLength { field, got });
        }

        let mut slots = [None; WORD_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(mask.chars()) {
            *slot = match ch {
                WILDCARD => None,
                'a'..='z' => Some(ch as u8),
                _ => return Err(ConstraintError::IllegalCharacter { field, ch }),
            };
        }

        Ok(Self { slots })
    }

    /// Per-position slots of the mask
    #[must_use]
    pub const fn slots(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.slots
    }

    /// True when every slot is a wildcard
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check that every known slot holds the same letter in `word`
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.slots
            .iter()
            .zip(word.chars())
            .all(|(slot, &ch)| slot.is_none_or(|known| known == ch))
    }
}

impl FromStr for PositionalMask {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("mask", s)
    }
}

impl fmt::Display for PositionalMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.map_or(WILDCARD, char::from))?;
        }
        Ok(())
    }
}

/// Unordered set of lowercase letters
///
/// Used both for letters required somewhere in the answer and for letters
/// forbidden everywhere. Only membership matters; repeated input letters
/// collapse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    /// Parse a possibly empty run of letters, naming `field` in any error
    ///
    /// # Errors
    /// Returns `ConstraintError::IllegalCharacter` for anything outside `a-z`.
    pub fn parse(field: &'static str, letters: &str) -> Result<Self, ConstraintError> {
        letters.chars().try_fold(Self::default(), |set, ch| {
            if ch.is_ascii_lowercase() {
                Ok(Self {
                    bits: set.bits | letter_bit(ch as u8),
                })
            } else {
                Err(ConstraintError::IllegalCharacter { field, ch })
            }
        })
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.bits & letter_bit(letter) != 0
    }

    /// Every letter of the set occurs somewhere in `word`
    #[must_use]
    pub const fn all_in(&self, word: &Word) -> bool {
        self.bits & word.letter_set() == self.bits
    }

    /// No letter of the set occurs anywhere in `word`
    #[must_use]
    pub const fn none_in(&self, word: &Word) -> bool {
        self.bits & word.letter_set() == 0
    }

    /// Letters of the set in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

/// Required letters: each must appear at least once, position unknown
pub type RequiredSet = LetterSet;

/// Forbidden letters: none may appear anywhere
pub type ForbiddenSet = LetterSet;

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Everything known about the answer so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub mask: PositionalMask,
    pub required: RequiredSet,
    pub forbidden: ForbiddenSet,
}

impl Constraints {
    #[must_use]
    pub const fn new(mask: PositionalMask, required: RequiredSet, forbidden: ForbiddenSet) -> Self {
        Self {
            mask,
            required,
            forbidden,
        }
    }

    /// Validate the three raw constraint strings
    ///
    /// # Errors
    /// Returns the first `ConstraintError` found, checking the mask first.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Constraints;
    ///
    /// let constraints = Constraints::parse("s___e", "a", "xyz").unwrap();
    /// assert!(!constraints.is_unconstrained());
    ///
    /// assert!(Constraints::parse("s__e", "", "").is_err());
    /// assert!(Constraints::parse("_____", "A", "").is_err());
    /// ```
    pub fn parse(mask: &str, required: &str, forbidden: &str) -> Result<Self, ConstraintError> {
        Ok(Self {
            mask: PositionalMask::parse("known-positions", mask)?,
            required: LetterSet::parse("known-letters", required)?,
            forbidden: LetterSet::parse("known-nonletters", forbidden)?,
        })
    }

    /// No information yet: the first-guess case
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.mask.is_wildcard() && self.required.is_empty() && self.forbidden.is_empty()
    }

    /// Check `word` against all three constraint classes at once
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.mask.matches(word) && self.required.all_in(word) && self.forbidden.none_in(word)
    }
}
