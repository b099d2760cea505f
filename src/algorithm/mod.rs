/// Difficulty levels and the decoy policy they drive
pub mod difficulty;
/// Puzzle orchestration through validation, placement, decoys and fill
pub mod executor;
/// Exhaustive randomized best-overlap placement search
pub mod placement;
