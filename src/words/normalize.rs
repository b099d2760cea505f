//! Target word normalization and validation

use std::cmp::Reverse;

use crate::io::error::{PuzzleError, Result};

/// Uppercase a word and strip every whitespace character from it
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check that a word is non-empty and made only of letters
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Reverse the letter order of a word
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}

/// Normalize, validate and order the caller's target words for placement
///
/// Words are sorted longest first; equal lengths keep their input order.
/// Duplicates produced by normalization are kept, each is placed separately.
///
/// # Errors
///
/// Returns a validation error for the first word that is empty, contains a
/// non-letter, or is longer than `grid_size`, and `NoWords` when the list is empty
pub fn prepare_target_words<S: AsRef<str>>(raw_words: &[S], grid_size: usize) -> Result<Vec<String>> {
    let mut words = Vec::with_capacity(raw_words.len());

    for raw in raw_words {
        let word = normalize_word(raw.as_ref());
        if word.is_empty() {
            return Err(PuzzleError::InvalidWord {
                word,
                reason: "word is empty after removing whitespace".to_string(),
            });
        }
        if !is_valid_word(&word) {
            return Err(PuzzleError::InvalidWord {
                word,
                reason: "only letters are allowed".to_string(),
            });
        }
        let length = word.chars().count();
        if length > grid_size {
            return Err(PuzzleError::WordTooLong {
                word,
                length,
                grid_size,
            });
        }
        words.push(word);
    }

    if words.is_empty() {
        return Err(PuzzleError::NoWords);
    }

    // Long words are hardest to fit, so they go in while the grid is empty
    words.sort_by_key(|word| Reverse(word.chars().count()));

    Ok(words)
}

/// Length of the longest normalized word, 0 for an empty list
pub fn longest_word_length<S: AsRef<str>>(raw_words: &[S]) -> usize {
    raw_words
        .iter()
        .map(|raw| normalize_word(raw.as_ref()).chars().count())
        .max()
        .unwrap_or(0)
}
