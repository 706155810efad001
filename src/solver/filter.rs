//! Constraint filter
//!
//! Narrows a word list in three stages, each keeping the survivors of the
//! previous one in their original order:
//! 1. positional mask
//! 2. required letters
//! 3. forbidden letters
//!
//! A stage whose constraint is empty is skipped outright.

use crate::core::{Constraints, ForbiddenSet, PositionalMask, RequiredSet, Word};

/// Keep words whose known mask slots all match
#[must_use]
pub fn positional_stage<'a>(words: &[&'a Word], mask: &PositionalMask) -> Vec<&'a Word> {
    words.iter().copied().filter(|w| mask.matches(w)).collect()
}

/// Keep words containing every required letter at least once
#[must_use]
pub fn required_stage<'a>(words: &[&'a Word], required: &RequiredSet) -> Vec<&'a Word> {
    words.iter().copied().filter(|w| required.all_in(w)).collect()
}

/// Keep words containing none of the forbidden letters
#[must_use]
pub fn forbidden_stage<'a>(words: &[&'a Word], forbidden: &ForbiddenSet) -> Vec<&'a Word> {
    words.iter().copied().filter(|w| forbidden.none_in(w)).collect()
}

/// Filter `words` down to those consistent with `constraints`
///
/// Unconstrained input is returned whole.
///
/// # Examples
/// ```
/// use wordle_narrow::core::{Constraints, Word};
/// use wordle_narrow::solver::filter;
///
/// let words: Vec<Word> = ["stand", "slate", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let constraints = Constraints::parse("s____", "", "").unwrap();
/// let kept: Vec<&str> = filter(&words, &constraints).iter().map(|w| w.text()).collect();
/// assert_eq!(kept, ["stand", "slate"]);
/// ```
#[must_use]
pub fn filter<'a>(words: &'a [Word], constraints: &Constraints) -> Vec<&'a Word> {
    let mut remaining: Vec<&'a Word> = words.iter().collect();

    if constraints.is_unconstrained() {
        log::debug!("No constraints, keeping all {} words", remaining.len());
        return remaining;
    }

    if !constraints.mask.is_wildcard() {
        remaining = positional_stage(&remaining, &constraints.mask);
        log::debug!(
            "Known positions '{}' kept {} words",
            constraints.mask,
            remaining.len()
        );
    }

    if !constraints.required.is_empty() {
        remaining = required_stage(&remaining, &constraints.required);
        log::debug!(
            "Known letters '{}' kept {} words",
            constraints.required,
            remaining.len()
        );
    }

    if !constraints.forbidden.is_empty() {
        remaining = forbidden_stage(&remaining, &constraints.forbidden);
        log::debug!(
            "Known non-letters '{}' kept {} words",
            constraints.forbidden,
            remaining.len()
        );
    }

    remaining
}
