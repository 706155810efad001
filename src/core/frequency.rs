//! Letter frequency across a whole dictionary

use super::word::Word;
use rustc_hash::FxHashMap;

/// Occurrence count of every letter in a word list
///
/// Built once from the full, unfiltered dictionary so scores reflect general
/// letter commonness rather than the shape of the remaining candidates.
/// Repeated letters inside a word each count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    counts: FxHashMap<u8, usize>,
}

impl LetterFrequencyTable {
    /// Count letters over `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{LetterFrequencyTable, Word};
    ///
    /// let words = vec![Word::new("apple").unwrap(), Word::new("grape").unwrap()];
    /// let table = LetterFrequencyTable::from_words(&words);
    /// assert_eq!(table.count(b'p'), 3);
    /// assert_eq!(table.count(b'z'), 0);
    /// ```
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for word in words {
            for &ch in word.chars() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `letter`, zero if it never appears
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of the frequencies of each letter in `word`
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.chars().iter().map(|&ch| self.count(ch)).sum()
    }

    /// Total letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Letters seen at least once, most frequent first, ties alphabetical
    #[must_use]
    pub fn sorted(&self) -> Vec<(u8, usize)> {
        let mut entries: Vec<(u8, usize)> = self.counts.iter().map(|(&l, &c)| (l, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn counts_every_occurrence() {
        let table = LetterFrequencyTable::from_words(&words(&["apple", "speed"]));
        assert_eq!(table.count(b'p'), 3);
        assert_eq!(table.count(b'e'), 3);
        assert_eq!(table.count(b'a'), 1);
        assert_eq!(table.total(), 10);
    }

    #[test]
    fn empty_dictionary() {
        let table = LetterFrequencyTable::from_words(&[]);
        assert_eq!(table.total(), 0);
        assert!(table.sorted().is_empty());
        assert_eq!(table.score(&Word::new("crane").unwrap()), 0);
    }

    #[test]
    fn score_sums_letters() {
        let table = LetterFrequencyTable::from_words(&words(&["crane", "slate"]));
        // s1 l1 a2 t1 e2
        assert_eq!(table.score(&Word::new("slate").unwrap()), 7);
        // repeated letters count each time
        assert_eq!(table.score(&Word::new("eerie").unwrap()), 2 + 2 + 1 + 0 + 2);
    }

    #[test]
    fn sorted_descending_then_alphabetical() {
        let table = LetterFrequencyTable::from_words(&words(&["crane", "slate"]));
        let sorted = table.sorted();
        assert_eq!(sorted[0], (b'a', 2));
        assert_eq!(sorted[1], (b'e', 2));
        assert_eq!(sorted[2], (b'c', 1));
        assert_eq!(sorted.len(), 8);
    }
}
