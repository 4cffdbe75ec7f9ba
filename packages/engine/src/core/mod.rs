//! Core - crate-wide plumbing shared by every layer
//!
//! - utils/  - console logging macros (must be first for macro export!)
//! - error   - the engine's error taxonomy

#[macro_use]
pub mod utils;
pub mod error;

pub use error::MazeError;
