//! Best-overlap word placement search
//!
//! Every start cell and direction is tried. Columns and rows are visited in
//! independently shuffled orders so that ties between equally good placements
//! resolve differently from run to run (and identically under a fixed seed).
//! A placement is feasible when each letter lands in bounds on a blank cell or
//! on the same letter; among feasible placements the one sharing the most
//! letters with existing content wins, the first one seen winning ties.

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::spatial::{Direction, Grid, PlacedWord, Position};

/// Whether a word is contractual content or misdirection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    /// Must be placed, written to the solution plane and recorded
    Target,
    /// Best-effort, display plane only, never recorded
    Decoy,
}

/// A feasible start cell and direction with its overlap score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Cell of the first letter
    pub origin: Position,
    /// Step between letters
    pub direction: Direction,
    /// Letters that coincide with ones already in the grid
    pub overlap: usize,
}

/// Count overlapping letters if `letters` fits at `origin` along `direction`
///
/// Returns `None` when any letter falls outside the grid or onto a different letter.
pub fn feasible_overlap(
    grid: &Grid,
    letters: &[char],
    origin: Position,
    direction: Direction,
) -> Option<usize> {
    let mut overlap = 0;
    for (i, &letter) in letters.iter().enumerate() {
        let position = direction.step_from(origin, i)?;
        let existing = grid.letter(position)?;
        if grid.is_empty_cell(position) {
            continue;
        }
        if existing != letter {
            return None;
        }
        overlap += 1;
    }
    Some(overlap)
}

/// Search the whole grid for the highest-overlap feasible placement
///
/// Returns `None` if the word fits nowhere, or is empty.
pub fn find_best_placement<R: Rng + ?Sized>(
    grid: &Grid,
    word: &str,
    rng: &mut R,
) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }

    let mut columns: Vec<usize> = (0..grid.size()).collect();
    let mut rows: Vec<usize> = (0..grid.size()).collect();
    columns.shuffle(rng);
    rows.shuffle(rng);

    let mut best: Option<Placement> = None;
    for &x in &columns {
        for &y in &rows {
            for direction in Direction::ALL {
                let Some(overlap) = feasible_overlap(grid, &letters, [x, y], direction) else {
                    continue;
                };
                if best.is_none_or(|current| overlap > current.overlap) {
                    best = Some(Placement {
                        origin: [x, y],
                        direction,
                        overlap,
                    });
                }
            }
        }
    }

    if let Some(placement) = &best {
        trace!(
            "{word}: best placement at {:?} towards ({}, {}) overlapping {}",
            placement.origin, placement.direction.dx, placement.direction.dy, placement.overlap
        );
    }
    best
}

/// Write a word along a placement found by [`find_best_placement`]
///
/// Target words also go into the solution plane and produce a record.
pub fn commit_placement(
    grid: &mut Grid,
    word: &str,
    placement: Placement,
    role: WordRole,
) -> Option<PlacedWord> {
    let in_solution = role == WordRole::Target;
    for (i, letter) in word.chars().enumerate() {
        if let Some(position) = placement.direction.step_from(placement.origin, i) {
            grid.write(position, letter, in_solution);
        }
    }

    (role == WordRole::Target)
        .then(|| PlacedWord::new(word.to_string(), placement.origin, placement.direction))
}

/// Place a word at its best position, leaving the grid untouched if it fits nowhere
///
/// Target records are appended to `placed_words`. The return value reports success;
/// decoy callers are expected to discard it.
pub fn try_place<R: Rng + ?Sized>(
    grid: &mut Grid,
    placed_words: &mut Vec<PlacedWord>,
    word: &str,
    role: WordRole,
    rng: &mut R,
) -> bool {
    let Some(placement) = find_best_placement(grid, word, rng) else {
        return false;
    };

    if let Some(record) = commit_placement(grid, word, placement, role) {
        placed_words.push(record);
    }
    true
}
