//! Error types and context management for puzzle generation

use std::fmt;
use std::path::{Path, PathBuf};

use crate::algorithm::executor::GenerationStage;

/// Broad classification of a failure, used by callers to decide how to react
///
/// `Placement` is the only kind worth retrying, and only at a larger grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Dictionary or configuration source unreadable or malformed
    Config,
    /// Caller input rejected before any placement attempt
    Validation,
    /// A required target word had no feasible placement on the current grid
    Placement,
    /// Writing results failed
    Io,
}

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Dictionary source missing or unreadable
    DictionaryLoad {
        /// Path of the dictionary source
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Dictionary source readable but unusable
    InvalidDictionary {
        /// Path of the dictionary source
        path: PathBuf,
        /// Description of what's wrong with the source
        reason: String,
    },

    /// Puzzle configuration file could not be read
    ConfigRead {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Puzzle configuration file could not be parsed
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying YAML error
        source: serde_yaml::Error,
    },

    /// Difficulty outside the supported range
    InvalidDifficulty {
        /// Provided difficulty level
        value: i64,
    },

    /// Target word rejected during validation
    InvalidWord {
        /// Normalized word
        word: String,
        /// Explanation of why the word is invalid
        reason: String,
    },

    /// Target word cannot fit in the grid in any direction
    WordTooLong {
        /// Normalized word
        word: String,
        /// Word length in characters
        length: usize,
        /// Grid dimension
        grid_size: usize,
    },

    /// No target words remained after normalization
    NoWords,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Target word had no feasible position and direction
    Placement {
        /// Word that could not be placed
        word: String,
        /// Grid dimension at the time of the attempt
        grid_size: usize,
    },

    /// Generation was consumed before it reached the final stage
    Incomplete {
        /// Stage the run stopped at
        stage: GenerationStage,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PuzzleError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DictionaryLoad { .. }
            | Self::InvalidDictionary { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. } => ErrorKind::Config,
            Self::InvalidDifficulty { .. }
            | Self::InvalidWord { .. }
            | Self::WordTooLong { .. }
            | Self::NoWords
            | Self::InvalidParameter { .. } => ErrorKind::Validation,
            Self::Placement { .. } | Self::Incomplete { .. } => ErrorKind::Placement,
            Self::FileSystem { .. } => ErrorKind::Io,
        }
    }

    /// Whether retrying with a larger grid could succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Placement { .. })
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionaryLoad { path, source } => {
                write!(f, "Failed to load dictionary '{}': {source}", path.display())
            }
            Self::InvalidDictionary { path, reason } => {
                write!(f, "Invalid dictionary '{}': {reason}", path.display())
            }
            Self::ConfigRead { path, source } => {
                write!(
                    f,
                    "Failed to read configuration '{}': {source}",
                    path.display()
                )
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidDifficulty { value } => {
                write!(f, "Invalid difficulty {value} (only 1-9 allowed)")
            }
            Self::InvalidWord { word, reason } => {
                write!(f, "Invalid word '{word}': {reason}")
            }
            Self::WordTooLong {
                word,
                length,
                grid_size,
            } => {
                write!(
                    f,
                    "Invalid word '{word}' ({length} is too long for grid size {grid_size})"
                )
            }
            Self::NoWords => write!(f, "No valid words provided"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Placement { word, grid_size } => {
                write!(
                    f,
                    "Failed to insert word into the grid: {word} (grid size {grid_size}x{grid_size})"
                )
            }
            Self::Incomplete { stage } => {
                write!(f, "Puzzle generation stopped at stage {stage:?}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DictionaryLoad { source, .. }
            | Self::ConfigRead { source, .. }
            | Self::FileSystem { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a file system error naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
