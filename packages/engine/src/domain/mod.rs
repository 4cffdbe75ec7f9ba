//! Domain - maze vocabulary independent of storage and algorithms
//!
//! - cell       - one grid position: walls + solver scratch fields
//! - direction  - the four wall sides / unit moves
//! - config     - sizes, timing and palette shared with the canvas layer

pub mod cell;
pub mod direction;
pub mod config;

pub use cell::{Cell, Walls};
pub use config::{MazeConfig, Palette};
pub use direction::Direction;
