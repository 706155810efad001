//! Word lists for narrowing
//!
//! Provides the embedded default dictionary and a loader for custom files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
