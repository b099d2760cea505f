//! Record of a target word committed to the grid

use crate::spatial::direction::{Direction, Position};

/// A target word, where it starts, and which way it runs
///
/// Decoys are never recorded. Renderers use these records to draw solution lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: String,
    origin: Position,
    direction: Direction,
}

impl PlacedWord {
    /// Record a placement
    pub const fn new(word: String, origin: Position, direction: Direction) -> Self {
        Self {
            word,
            origin,
            direction,
        }
    }

    /// Word as written into the grid
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Cell holding the first letter
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// Step between consecutive letters
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Word length in letters
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether the word has no letters
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cell holding the last letter
    pub fn end(&self) -> Option<Position> {
        let last = self.len().checked_sub(1)?;
        self.direction.step_from(self.origin, last)
    }

    /// Each letter paired with the cell it occupies
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .filter_map(|(i, letter)| {
                self.direction
                    .step_from(self.origin, i)
                    .map(|position| (position, letter))
            })
    }
}
