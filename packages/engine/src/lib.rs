//! Maze Engine - maze generation and solving in WASM
//!
//! Carves perfect mazes with randomized Kruskal, moves a player through
//! them, and animates BFS/DFS solves one step at a time for a canvas page.
//!
//! Architecture:
//! - core/          - Errors and console logging
//! - domain/        - Cells, directions, configuration
//! - spatial/       - Grid storage and wall topology
//! - systems/       - Generator, player, solver, renderer interface
//! - simulation/    - Session orchestration and the wasm facade

// Logging macros must be first for macro export!
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths for the common types
pub use spatial::grid;
pub use systems::generator::create_maze;
pub use systems::player::{move_player, Player};
pub use systems::render::{AsciiRenderer, NullRenderer, Renderer};
pub use systems::solver::{Algorithm, Pacer, SolveFlag, SolveOutcome, SolveRun, Solver, StepState, YieldNow};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Maze WASM Engine initialized (v{})", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::MazeError;
pub use domain::{Cell, Direction, MazeConfig, Walls};
pub use grid::Grid;
pub use simulation::{MazeCore, MazeGame, SolveStats};
