//! Core domain types for narrowing a dictionary
//!
//! Words, the constraints learned from earlier guesses, and the letter
//! frequency table. Everything here is pure and built fresh for each run.

mod constraints;
mod frequency;
mod word;

pub use constraints::{
    ConstraintError, Constraints, ForbiddenSet, LetterSet, PositionalMask, RequiredSet, WILDCARD,
};
pub use frequency::LetterFrequencyTable;
pub use word::{WORD_LENGTH, Word, WordError};
