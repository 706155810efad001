//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are ignored. Lines that are not valid words (wrong length,
/// non-letters) are skipped and logged rather than failing the whole load.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_narrow::wordlists::loader::load_from_file;
///
/// let words = load_from_file("word-list.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path.as_ref())?;
    let words = read_words(BufReader::new(file))?;
    log::info!(
        "Loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Read words line by line from any buffered reader
///
/// # Errors
///
/// Returns the first I/O error raised by the reader.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(e) => {
                skipped += 1;
                log::debug!("Skipping line {}: '{trimmed}': {e}", number + 1);
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid lines in word list");
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::words_from_slice;
/// use wordle_narrow::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
