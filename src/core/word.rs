//! Dictionary word representation
//!
//! A Word stores a fixed-length lowercase word along with a letter-presence set
//! so the filter stages can answer membership questions without scanning.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Bit index of a lowercase ASCII letter inside a presence set
#[inline]
pub(crate) const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// A fixed-length dictionary word with letter presence tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = chars.iter().fold(0, |set, &ch| set | letter_bit(ch));

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }

    /// Presence set of the word's letters, bit `n` standing for `b'a' + n`
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> u32 {
        self.letters
    }

    /// True when no letter repeats inside the word
    #[inline]
    #[must_use]
    pub const fn has_distinct_letters(&self) -> bool {
        self.letters.count_ones() as usize == WORD_LENGTH
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
