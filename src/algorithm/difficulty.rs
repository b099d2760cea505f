//! Difficulty policy: how much misdirection a level buys
//!
//! All functions are pure in the level; randomness comes from the caller's source.

use rand::Rng;

use crate::io::configuration::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::io::error::{PuzzleError, Result};
use crate::words::normalize::reverse_word;

/// Validated difficulty level in `MIN_DIFFICULTY..=MAX_DIFFICULTY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Validate a caller-supplied level
    ///
    /// # Errors
    ///
    /// Returns `InvalidDifficulty` for anything outside 1-9; values are never clamped
    pub fn new(level: i64) -> Result<Self> {
        u8::try_from(level)
            .ok()
            .filter(|level| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(level))
            .map(Self)
            .ok_or(PuzzleError::InvalidDifficulty { value: level })
    }

    /// Raw level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Number of random dictionary words to scatter as decoys
    pub const fn random_word_count(self) -> usize {
        random_word_count(self.0)
    }

    /// Close-match decoys per target word when a cap is requested
    pub const fn close_match_count(self) -> usize {
        close_match_count(self.0)
    }

    /// Decide whether one word's close matches are built from its reversal
    pub fn should_reverse<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        should_reverse(self.0, rng)
    }
}

/// True with probability `level / 10`; always true from level 10 up
pub fn should_reverse<R: Rng + ?Sized>(level: u8, rng: &mut R) -> bool {
    rng.random_range(0..10u8) < level
}

/// Random decoy words for a level: `2 * level`
pub const fn random_word_count(level: u8) -> usize {
    level as usize * 2
}

/// Close-match cap for a level: `level`
pub const fn close_match_count(level: u8) -> usize {
    level as usize
}

/// Copies of the target words used as close-match seeds, each reversed independently
///
/// The words themselves are untouched; only the returned copies may be reversed.
pub fn adjust_words_for_difficulty<R: Rng + ?Sized>(
    words: &[String],
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<String> {
    words
        .iter()
        .map(|word| {
            if difficulty.should_reverse(rng) {
                reverse_word(word)
            } else {
                word.clone()
            }
        })
        .collect()
}
