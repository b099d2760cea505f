//! Spatial data structures for the puzzle grid
//!
//! This module contains spatial-related functionality including:
//! - Direction vectors and checked stepping
//! - The two-plane letter grid
//! - Records of placed target words

/// Word directions and cell coordinates
pub mod direction;
/// Display and solution planes
pub mod grid;
/// Placed target word records
pub mod placed;

pub use direction::{Direction, Position};
pub use grid::{Grid, Plane};
pub use placed::PlacedWord;
