//! Guess ranking strategies
//!
//! Defines the `RankingStrategy` trait and concrete implementations.

use crate::core::{LetterFrequencyTable, Word};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maximum number of frequency-ranked suggestions
pub const SUGGESTION_LIMIT: usize = 10;

/// Below this many letter-distinct candidates the frequency policy lists
/// every remaining word instead of ranking
pub const NEAR_ANSWER_THRESHOLD: usize = 10;

/// Number of draws made by the random policy
pub const SAMPLE_SIZE: usize = 3;

/// A policy for choosing suggested guesses from letter-distinct candidates
pub trait RankingStrategy {
    /// Smallest diversity subset the policy will rank
    ///
    /// With fewer letter-distinct words than this, the full remaining list is
    /// reported instead.
    fn min_diverse(&self) -> usize;

    /// Pick suggestions from `diverse`, which holds at least `min_diverse` words
    fn suggest<'a>(&mut self, diverse: &[&'a Word]) -> Vec<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Rank by dictionary-wide letter frequency (default)
    Frequency(FrequencyStrategy),
    /// Uniform sample with replacement
    Random(RandomStrategy<StdRng>),
}

impl RankingStrategy for StrategyType {
    fn min_diverse(&self) -> usize {
        match self {
            Self::Frequency(s) => s.min_diverse(),
            Self::Random(s) => s.min_diverse(),
        }
    }

    fn suggest<'a>(&mut self, diverse: &[&'a Word]) -> Vec<&'a Word> {
        match self {
            Self::Frequency(s) => s.suggest(diverse),
            Self::Random(s) => s.suggest(diverse),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Unrecognized names fall back to
    /// frequency. `seed` only affects the random strategy; without one it is
    /// seeded from the operating system.
    #[must_use]
    pub fn from_name(name: &str, frequencies: LetterFrequencyTable, seed: Option<u64>) -> Self {
        match name {
            "random" | "sample" => {
                let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
                Self::Random(RandomStrategy::new(rng))
            }
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy::new(frequencies)),
            other => {
                log::warn!("Unknown strategy '{other}', using frequency");
                Self::Frequency(FrequencyStrategy::new(frequencies))
            }
        }
    }

    /// Short name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// A word paired with its summed letter frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedWord<'a> {
    pub word: &'a Word,
    pub weight: usize,
}

/// Letter frequency strategy
///
/// Scores each word by the summed dictionary-wide frequency of its letters and
/// keeps the highest scoring ones. Equal scores keep their input order.
pub struct FrequencyStrategy {
    frequencies: LetterFrequencyTable,
    limit: usize,
}

impl FrequencyStrategy {
    #[must_use]
    pub const fn new(frequencies: LetterFrequencyTable) -> Self {
        Self::with_limit(frequencies, SUGGESTION_LIMIT)
    }

    #[must_use]
    pub const fn with_limit(frequencies: LetterFrequencyTable, limit: usize) -> Self {
        Self { frequencies, limit }
    }

    /// Score and stable-sort `words`, heaviest first
    #[must_use]
    pub fn weigh<'a>(&self, words: &[&'a Word]) -> Vec<WeightedWord<'a>> {
        let mut weighted: Vec<WeightedWord<'a>> = words
            .iter()
            .map(|&word| WeightedWord {
                word,
                weight: self.frequencies.score(word),
            })
            .collect();
        weighted.sort_by(|a, b| b.weight.cmp(&a.weight));
        weighted
    }
}

impl RankingStrategy for FrequencyStrategy {
    fn min_diverse(&self) -> usize {
        NEAR_ANSWER_THRESHOLD
    }

    fn suggest<'a>(&mut self, diverse: &[&'a Word]) -> Vec<&'a Word> {
        self.weigh(diverse)
            .into_iter()
            .take(self.limit)
            .map(|weighted| weighted.word)
            .collect()
    }
}

/// Random strategy
///
/// Draws `SAMPLE_SIZE` words independently, so the same word can come up more
/// than once. The generator is injected to keep runs reproducible.
pub struct RandomStrategy<R: Rng> {
    rng: R,
    draws: usize,
}

impl<R: Rng> RandomStrategy<R> {
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            draws: SAMPLE_SIZE,
        }
    }
}

impl<R: Rng> RankingStrategy for RandomStrategy<R> {
    fn min_diverse(&self) -> usize {
        1
    }

    fn suggest<'a>(&mut self, diverse: &[&'a Word]) -> Vec<&'a Word> {
        (0..self.draws)
            .filter_map(|_| diverse.choose(&mut self.rng).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn frequency_orders_by_weight() {
        let dictionary = words(&["eeeee", "aaaaa", "ttttt", "crane", "slate", "stand"]);
        let table = LetterFrequencyTable::from_words(&dictionary);
        let candidates = words(&["crane", "slate", "stand"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let mut strategy = FrequencyStrategy::new(table);
        // slate 25, stand 20, crane 19
        assert_eq!(texts(&strategy.suggest(&refs)), ["slate", "stand", "crane"]);
    }

    #[test]
    fn frequency_ties_keep_input_order() {
        let dictionary = words(&["abcde", "edcba", "bcdea"]);
        let table = LetterFrequencyTable::from_words(&dictionary);
        let refs: Vec<&Word> = dictionary.iter().collect();

        let weighted = FrequencyStrategy::new(table).weigh(&refs);

        assert!(weighted.iter().all(|w| w.weight == 15));
        let order: Vec<&str> = weighted.iter().map(|w| w.word.text()).collect();
        assert_eq!(order, ["abcde", "edcba", "bcdea"]);
    }

    #[test]
    fn frequency_includes_top_word_and_limits() {
        let dictionary = words(&[
            "about", "crane", "slate", "stand", "grape", "fight", "world", "mouse", "plant",
            "brick", "jumpy", "vexed",
        ]);
        let table = LetterFrequencyTable::from_words(&dictionary);
        let refs: Vec<&Word> = dictionary.iter().collect();
        let mut strategy = FrequencyStrategy::new(table);

        let heaviest = strategy.weigh(&refs)[0].word;
        let suggestions = strategy.suggest(&refs);

        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
        assert_eq!(suggestions[0], heaviest);
    }

    #[test]
    fn frequency_with_limit() {
        let dictionary = words(&["crane", "slate", "stand"]);
        let table = LetterFrequencyTable::from_words(&dictionary);
        let refs: Vec<&Word> = dictionary.iter().collect();

        let mut strategy = FrequencyStrategy::with_limit(table, 1);
        assert_eq!(strategy.suggest(&refs).len(), 1);
    }

    #[test]
    fn random_draws_from_candidates() {
        let candidates = words(&["crane", "slate", "stand", "grape"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(7));
        let picks = strategy.suggest(&refs);

        assert_eq!(picks.len(), SAMPLE_SIZE);
        assert!(picks.iter().all(|p| refs.contains(p)));
    }

    #[test]
    fn random_same_seed_same_picks() {
        let candidates = words(&["crane", "slate", "stand", "grape", "fight", "world"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let first = RandomStrategy::new(StdRng::seed_from_u64(42)).suggest(&refs);
        let second = RandomStrategy::new(StdRng::seed_from_u64(42)).suggest(&refs);

        assert_eq!(first, second);
    }

    #[test]
    fn random_samples_with_replacement() {
        let candidates = words(&["crane"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let picks = RandomStrategy::new(StdRng::seed_from_u64(1)).suggest(&refs);
        assert_eq!(texts(&picks), ["crane", "crane", "crane"]);
    }

    #[test]
    fn random_empty_input() {
        let picks = RandomStrategy::new(StdRng::seed_from_u64(1)).suggest(&[]);
        assert!(picks.is_empty());
    }

    #[test]
    fn from_name_selects_strategy() {
        let table = LetterFrequencyTable::default();
        assert_eq!(StrategyType::from_name("random", table.clone(), Some(1)).name(), "random");
        assert_eq!(StrategyType::from_name("frequency", table.clone(), None).name(), "frequency");
        assert_eq!(StrategyType::from_name("entropy", table, None).name(), "frequency");
    }

    #[test]
    fn thresholds() {
        let frequency = FrequencyStrategy::new(LetterFrequencyTable::default());
        let random = RandomStrategy::new(StdRng::seed_from_u64(0));
        assert_eq!(frequency.min_diverse(), NEAR_ANSWER_THRESHOLD);
        assert_eq!(random.min_diverse(), 1);
    }
}
