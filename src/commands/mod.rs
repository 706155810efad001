//! Command implementations

pub mod frequencies;
pub mod suggest;

pub use frequencies::{FrequencyReport, letter_frequencies};
pub use suggest::{SuggestConfig, SuggestResult, suggest};
