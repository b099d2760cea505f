//! Word-search puzzle generation with overlap-maximising placement
//!
//! Target words are placed longest first at the position and direction sharing the
//! most letters with what is already on the grid. Difficulty then drives how many
//! random dictionary words and near-miss variants are scattered as decoys before
//! the remaining cells are filled with random letters.

#![forbid(unsafe_code)]

/// Placement search, difficulty policy and puzzle orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid planes, directions and placed word records
pub mod spatial;
/// Target word normalization and the decoy dictionary
pub mod words;

pub use algorithm::executor::{Puzzle, PuzzleGenerator, PuzzleRequest, generate_puzzle};
pub use io::error::{ErrorKind, PuzzleError, Result};
