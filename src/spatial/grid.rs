//! Square letter grid with parallel display and solution planes
//!
//! The display plane holds everything a solver sees: target words, decoys and
//! filler. The solution plane holds only target-word letters, every other cell
//! is blank. Both planes are indexed `[x, y]` and never change size.

use ndarray::Array2;
use rand::Rng;

use crate::io::configuration::{ALPHABET, BLANK};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::Position;

/// Selects one of the two grid planes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// Everything visible in the puzzle
    Display,
    /// Target-word letters only
    Solution,
}

/// Puzzle grid state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    display: Array2<char>,
    solution: Array2<char>,
    size: usize,
}

impl Grid {
    /// Create a `size` x `size` grid with both planes blank
    pub fn new(size: usize) -> Self {
        Self {
            display: Array2::from_elem((size, size), BLANK),
            solution: Array2::from_elem((size, size), BLANK),
            size,
        }
    }

    /// Build a grid whose display plane is given row by row
    ///
    /// Each row is a string of `size` characters, `' '` marking a blank cell.
    /// The solution plane starts blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a square or contain
    /// anything other than uppercase letters and blanks
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut grid = Self::new(size);

        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != size {
                return Err(invalid_parameter(
                    "rows",
                    row,
                    &format!("expected {size} cells in row {y}"),
                ));
            }
            for (x, &letter) in cells.iter().enumerate() {
                if letter != BLANK && !letter.is_uppercase() {
                    return Err(invalid_parameter(
                        "rows",
                        row,
                        &format!("cell ({x}, {y}) is neither a letter nor blank"),
                    ));
                }
                if let Some(cell) = grid.display.get_mut([x, y]) {
                    *cell = letter;
                }
            }
        }

        Ok(grid)
    }

    /// Grid dimension
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check if signed coordinates fall inside the grid
    pub const fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Check if the display cell holds no letter yet
    ///
    /// Out-of-bounds positions are never empty.
    pub fn is_empty_cell(&self, position: Position) -> bool {
        self.display.get(position).is_some_and(|&cell| cell == BLANK)
    }

    /// Display letter at `position`, `None` outside the grid
    pub fn letter(&self, position: Position) -> Option<char> {
        self.display.get(position).copied()
    }

    /// Solution letter at `position`, `None` outside the grid
    pub fn solution_letter(&self, position: Position) -> Option<char> {
        self.solution.get(position).copied()
    }

    /// Write a letter into the display plane, and into the solution plane when `in_solution`
    ///
    /// Returns false if `position` is outside the grid.
    pub fn write(&mut self, position: Position, letter: char, in_solution: bool) -> bool {
        let Some(cell) = self.display.get_mut(position) else {
            return false;
        };
        *cell = letter;

        if in_solution && let Some(cell) = self.solution.get_mut(position) {
            *cell = letter;
        }
        true
    }

    /// Replace every blank display cell with a uniformly random letter
    ///
    /// Letters already present and the solution plane are left untouched.
    /// Returns the number of cells filled.
    pub fn fill_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut filled = 0;
        for cell in &mut self.display {
            if *cell == BLANK {
                *cell = random_letter(rng);
                filled += 1;
            }
        }
        filled
    }

    /// Number of blank cells in the chosen plane
    pub fn blank_count(&self, plane: Plane) -> usize {
        self.plane(plane).iter().filter(|&&cell| cell == BLANK).count()
    }

    /// Borrow one plane as an `[x, y]` matrix
    pub const fn plane(&self, plane: Plane) -> &Array2<char> {
        match plane {
            Plane::Display => &self.display,
            Plane::Solution => &self.solution,
        }
    }

    /// Rows of the chosen plane, top to bottom
    pub fn rows(&self, plane: Plane) -> Vec<String> {
        let matrix = self.plane(plane);
        (0..self.size)
            .map(|y| matrix.column(y).iter().collect())
            .collect()
    }
}

/// Draw one letter uniformly from A-Z
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let index = rng.random_range(0..ALPHABET.len());
    ALPHABET.get(index).map_or('A', |&byte| char::from(byte))
}
