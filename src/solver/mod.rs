//! Narrowing and ranking algorithms
//!
//! `filter` applies the known-letter constraints; the ranker then proposes
//! next guesses from what is left using a pluggable strategy.

mod engine;
pub mod filter;
pub mod strategy;

pub use engine::{Ranker, Ranking, Suggestions, diversity_subset};
pub use filter::filter;
pub use strategy::{
    FrequencyStrategy, NEAR_ANSWER_THRESHOLD, RandomStrategy, RankingStrategy, SAMPLE_SIZE,
    SUGGESTION_LIMIT, StrategyType, WeightedWord,
};
