//! Word handling: normalization of caller input and the decoy dictionary

/// Decoy word source with random sampling and close-match generation
pub mod dictionary;
/// Normalization and validation of target words
pub mod normalize;

pub use dictionary::Dictionary;
