//! Error types for the maze engine.
//!
//! "No path found" is a solve outcome, not an error; see `systems::solver::SolveOutcome`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Width or height was zero.
    #[error("invalid maze dimensions: {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: u32, height: u32 },

    /// A solve was requested while another run still holds the solve flag.
    #[error("a solve is already in progress")]
    SolveInProgress,

    /// Algorithm name other than "bfs" or "dfs".
    #[error("unknown solve algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Configuration JSON failed to parse or validate.
    #[error("invalid maze config: {0}")]
    Config(String),

    /// Render snapshot could not be serialized.
    #[error("snapshot serialization failed: {0}")]
    Snapshot(String),
}
