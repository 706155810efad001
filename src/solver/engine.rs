//! Guess ranker
//!
//! Wraps a ranking strategy with the steps every policy shares: pick the
//! letter-distinct candidates, fall back to the full list near the answer,
//! and report how many candidates remain.

use super::strategy::RankingStrategy;
use crate::core::Word;

/// What the ranker proposes next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions<'a> {
    /// Few enough candidates to show them all
    Remaining(Vec<&'a Word>),
    /// Suggested guesses chosen by the strategy
    Guesses(Vec<&'a Word>),
}

impl<'a> Suggestions<'a> {
    /// Words to show, whichever variant this is
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        match self {
            Self::Remaining(words) | Self::Guesses(words) => words,
        }
    }
}

/// Ranker output: candidate count plus suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<'a> {
    pub remaining: usize,
    pub suggestions: Suggestions<'a>,
}

/// Words with no repeated letter
///
/// Applying this to its own output changes nothing.
#[must_use]
pub fn diversity_subset<'a>(words: &[&'a Word]) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|w| w.has_distinct_letters())
        .collect()
}

/// Guess ranker
///
/// Coordinates ranking using a given strategy.
pub struct Ranker<S: RankingStrategy> {
    strategy: S,
}

impl<S: RankingStrategy> Ranker<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Access the wrapped strategy
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Rank the filtered candidates
    ///
    /// When the letter-distinct subset is smaller than the strategy accepts,
    /// every remaining candidate is returned as-is. An empty candidate list
    /// yields an empty `Remaining`.
    pub fn rank<'a>(&mut self, candidates: &[&'a Word]) -> Ranking<'a> {
        let diverse = diversity_subset(candidates);
        log::debug!(
            "{} of {} candidates have distinct letters",
            diverse.len(),
            candidates.len()
        );

        let suggestions = if diverse.len() < self.strategy.min_diverse() {
            Suggestions::Remaining(candidates.to_vec())
        } else {
            Suggestions::Guesses(self.strategy.suggest(&diverse))
        };

        Ranking {
            remaining: candidates.len(),
            suggestions,
        }
    }
}
