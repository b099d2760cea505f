//! Input/output surface around the generation engine

/// Command-line parsing and the auto-sizing runner
pub mod cli;
/// Constants and the YAML puzzle configuration
pub mod configuration;
/// Error types and classification
pub mod error;
/// Logger initialisation
pub mod logging;
/// Auto-size progress spinner
pub mod progress;
/// Plain-text rendering and result files
pub mod text;
