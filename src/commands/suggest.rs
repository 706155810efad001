//! Suggest command
//!
//! Narrows the dictionary with the known constraints and proposes next guesses.

use crate::core::{Constraints, LetterFrequencyTable, Word};
use crate::solver::{Ranker, Ranking, StrategyType, filter};

/// Configuration for a suggestion run
pub struct SuggestConfig {
    pub constraints: Constraints,
    pub strategy: String,
    pub seed: Option<u64>,
}

impl SuggestConfig {
    #[must_use]
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            strategy: "frequency".to_string(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>, seed: Option<u64>) -> Self {
        self.strategy = strategy.into();
        self.seed = seed;
        self
    }
}

/// Result of a suggestion run
pub struct SuggestResult<'a> {
    pub dictionary_size: usize,
    pub first_guess: bool,
    pub constraints: Constraints,
    pub strategy: &'static str,
    pub ranking: Ranking<'a>,
}

/// Filter `words` by the configured constraints and rank what survives
///
/// Letter frequencies come from the whole of `words`, not just the survivors.
pub fn suggest<'a>(words: &'a [Word], config: &SuggestConfig) -> SuggestResult<'a> {
    let frequencies = LetterFrequencyTable::from_words(words);
    let strategy = StrategyType::from_name(&config.strategy, frequencies, config.seed);
    let strategy_name = strategy.name();
    log::info!("Ranking with {strategy_name} strategy");

    let candidates = filter(words, &config.constraints);
    let ranking = Ranker::new(strategy).rank(&candidates);

    SuggestResult {
        dictionary_size: words.len(),
        first_guess: config.constraints.is_unconstrained(),
        constraints: config.constraints,
        strategy: strategy_name,
        ranking,
    }
}
