//! Formatting utilities for terminal output

use crate::core::{PositionalMask, WILDCARD, Word};

/// Format a mask with spaced slots, known letters upper-cased
#[must_use]
pub fn format_mask(mask: &PositionalMask) -> String {
    mask.slots()
        .iter()
        .map(|slot| slot.map_or(WILDCARD, |letter| char::from(letter.to_ascii_uppercase())))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join words upper-cased on one line
#[must_use]
pub fn join_words(words: &[&Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_formatting() {
        let mask: PositionalMask = "s__e_".parse().unwrap();
        assert_eq!(format_mask(&mask), "S _ _ E _");
        assert_eq!(format_mask(&PositionalMask::default()), "_ _ _ _ _");
    }

    #[test]
    fn words_joined() {
        let crane = Word::new("crane").unwrap();
        let slate = Word::new("slate").unwrap();
        assert_eq!(join_words(&[&crane, &slate]), "CRANE SLATE");
        assert_eq!(join_words(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }
}
