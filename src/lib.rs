//! Wordle Narrow
//!
//! Narrows a five-letter dictionary using what earlier guesses revealed and
//! proposes next guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::core::{Constraints, LetterFrequencyTable, Word};
//! use wordle_narrow::solver::{FrequencyStrategy, Ranker, filter};
//!
//! let words: Vec<Word> = ["stand", "slate", "crane"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! // 's' is first, 'e' is somewhere, no 'n'
//! let constraints = Constraints::parse("s____", "e", "n").unwrap();
//! let candidates = filter(&words, &constraints);
//!
//! let strategy = FrequencyStrategy::new(LetterFrequencyTable::from_words(&words));
//! let ranking = Ranker::new(strategy).rank(&candidates);
//! assert_eq!(ranking.remaining, 1);
//! ```

// Core domain types
pub mod core;

// Filtering and ranking algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
