//! Letter frequency command
//!
//! Reports how often each letter occurs across the dictionary.

use crate::core::{LetterFrequencyTable, Word};

/// Letter counts for a dictionary
pub struct FrequencyReport {
    pub dictionary_size: usize,
    pub total_letters: usize,
    /// Most frequent first, ties alphabetical
    pub letters: Vec<(char, usize)>,
}

/// Count letters across `words`
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FrequencyReport {
    let table = LetterFrequencyTable::from_words(words);

    FrequencyReport {
        dictionary_size: words.len(),
        total_letters: table.total(),
        letters: table
            .sorted()
            .into_iter()
            .map(|(letter, count)| (char::from(letter), count))
            .collect(),
    }
}
