//! Generation constants and the YAML puzzle configuration file

use std::path::Path;

use serde::Deserialize;

use crate::io::error::{PuzzleError, Result};

/// Lowest accepted difficulty level
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest accepted difficulty level
pub const MAX_DIFFICULTY: u8 = 9;

// Caps the auto-size loop so an unplaceable word list cannot run away
/// Maximum allowed grid dimension
pub const MAX_GRID_SIZE: usize = 1024;

/// Sentinel for a display or solution cell holding no letter
pub const BLANK: char = ' ';

/// Letters used for filler cells
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Word list columns used when the configuration leaves it unset
pub const DEFAULT_COLUMNS: usize = 5;

/// Extension of the plain-text result file
pub const TEXT_EXTENSION: &str = "txt";

/// Puzzle description as read from a YAML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Title printed above the grid
    pub title: String,
    /// Grid dimension, 0 to size the grid automatically
    pub size: usize,
    /// Number of columns for the word list
    pub columns: usize,
    /// Difficulty level (1-9)
    pub difficulty: i64,
    /// Target words as written by the author
    pub words: Vec<String>,
    /// Basename for result files, defaults to the configuration file stem
    pub output_basename: String,
}

impl PuzzleConfig {
    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let data =
            std::fs::read_to_string(path).map_err(|source| PuzzleError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        let mut config = Self::from_yaml_str(&data).map_err(|source| PuzzleError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.output_basename.is_empty() {
            config.output_basename = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
        }

        Ok(config)
    }

    /// Parse configuration text
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the text does not describe a puzzle
    pub fn from_yaml_str(data: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(data)
    }

    /// Whether the grid dimension should be searched for
    pub const fn auto_size(&self) -> bool {
        self.size == 0
    }

    /// Word list columns with the default applied
    pub const fn resolved_columns(&self) -> usize {
        if self.columns < 1 {
            DEFAULT_COLUMNS
        } else {
            self.columns
        }
    }
}
