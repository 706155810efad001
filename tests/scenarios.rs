//! End-to-end narrowing scenarios through the public API

use wordle_narrow::core::{Constraints, LetterFrequencyTable, Word};
use wordle_narrow::solver::{
    FrequencyStrategy, Ranker, SUGGESTION_LIMIT, Suggestions, diversity_subset, filter,
};
use wordle_narrow::wordlists::loader::words_from_slice;

fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
    words.iter().map(|w| w.text()).collect()
}

fn narrow<'a>(words: &'a [Word], mask: &str, required: &str, forbidden: &str) -> Vec<&'a str> {
    let constraints = Constraints::parse(mask, required, forbidden).unwrap();
    texts(&filter(words, &constraints))
}

#[test]
fn first_guess_keeps_everything() {
    let words = words_from_slice(&["apple", "grape", "stand", "crane", "slate"]);
    assert_eq!(
        narrow(&words, "_____", "", ""),
        ["apple", "grape", "stand", "crane", "slate"]
    );
}

#[test]
fn known_position() {
    let words = words_from_slice(&["stand", "slate", "crane"]);
    assert_eq!(narrow(&words, "s____", "", ""), ["stand", "slate"]);
}

#[test]
fn known_letter() {
    let words = words_from_slice(&["stand", "slate", "crane"]);
    assert_eq!(narrow(&words, "_____", "e", ""), ["slate", "crane"]);
}

#[test]
fn known_non_letter() {
    let words = words_from_slice(&["stand", "slate", "crane", "fifty"]);
    assert_eq!(narrow(&words, "_____", "", "a"), ["fifty"]);
}

#[test]
fn diversity_excludes_repeats() {
    let words = words_from_slice(&["apple", "grape", "stand"]);
    let refs: Vec<&Word> = words.iter().collect();
    assert_eq!(texts(&diversity_subset(&refs)), ["grape", "stand"]);
}

#[test]
fn small_diversity_returns_full_list() {
    let words = words_from_slice(&["apple", "grape", "stand", "speed", "eerie", "crane"]);
    let refs: Vec<&Word> = words.iter().collect();
    let strategy = FrequencyStrategy::new(LetterFrequencyTable::from_words(&words));

    let ranking = Ranker::new(strategy).rank(&refs);

    assert_eq!(ranking.remaining, 6);
    match ranking.suggestions {
        Suggestions::Remaining(all) => {
            assert_eq!(texts(&all), ["apple", "grape", "stand", "speed", "eerie", "crane"]);
        }
        Suggestions::Guesses(_) => panic!("expected the full remaining list"),
    }
}

#[test]
fn large_diversity_returns_top_ten() {
    let words = words_from_slice(&[
        "about", "crane", "slate", "stand", "grape", "fight", "world", "mouse", "plant", "brick",
        "jumpy", "chord", "apple",
    ]);
    let refs: Vec<&Word> = words.iter().collect();
    let table = LetterFrequencyTable::from_words(&words);
    let strategy = FrequencyStrategy::new(table.clone());

    let ranking = Ranker::new(strategy).rank(&refs);

    let Suggestions::Guesses(guesses) = ranking.suggestions else {
        panic!("expected ranked guesses");
    };
    assert_eq!(guesses.len(), SUGGESTION_LIMIT);

    // Top scorer among the distinct-letter words leads
    let best = refs
        .iter()
        .filter(|w| w.has_distinct_letters())
        .map(|w| table.score(w))
        .max()
        .unwrap();
    assert_eq!(table.score(guesses[0]), best);
}
