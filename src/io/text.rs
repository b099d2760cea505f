//! Plain-text rendering of puzzles and their solutions

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algorithm::executor::Puzzle;
use crate::io::error::{Result, WithPath};
use crate::spatial::{Grid, Plane};

/// Render one plane row by row, each cell followed by a space
pub fn render_plane(grid: &Grid, plane: Plane) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() * 2 + 1));
    for row in grid.rows(plane) {
        for cell in row.chars() {
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Lay words out in `columns` left-aligned columns
///
/// Column width is the longest word plus two spaces. A `columns` of zero is
/// treated as one.
pub fn render_word_list<S: AsRef<str>>(words: &[S], columns: usize) -> String {
    let columns = columns.max(1);
    let width = words
        .iter()
        .map(|word| word.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    for line in words.chunks(columns) {
        let cells: Vec<String> = line
            .iter()
            .map(|word| format!("{:<width$}", word.as_ref()))
            .collect();
        out.push_str(cells.concat().trim_end());
        out.push('\n');
    }
    out
}

/// Print the display plane to stdout
// Printing the puzzle is the point of the command-line tool
#[allow(clippy::print_stdout)]
pub fn print_puzzle(puzzle: &Puzzle) {
    print!("{}", render_plane(&puzzle.grid, Plane::Display));
}

/// Write the puzzle, and optionally its solution after a blank line, to `path`
///
/// # Errors
///
/// Returns a file system error if the file cannot be created or written
pub fn save_puzzle(puzzle: &Puzzle, path: &Path, include_solution: bool) -> Result<()> {
    let file = File::create(path).with_path(path, "create")?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(render_plane(&puzzle.grid, Plane::Display).as_bytes())
        .with_path(path, "write")?;

    if include_solution {
        writer.write_all(b"\n").with_path(path, "write")?;
        writer
            .write_all(render_plane(&puzzle.grid, Plane::Solution).as_bytes())
            .with_path(path, "write")?;
    }

    writer.flush().with_path(path, "flush")
}
