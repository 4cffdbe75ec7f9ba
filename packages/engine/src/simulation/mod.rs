//! MazeCore - orchestration for one maze session
//!
//! Owns the grid, the player, the solve flag and (while solving) the active
//! `SolveRun`. Input handling and the canvas page talk to this through the
//! `MazeGame` facade; everything here is plain Rust so it can be tested
//! natively.
//!
//! - commands/ - generate, move, reset, stop
//! - step/     - solve start and per-timer-tick stepping
//! - render/   - cell flag extraction for the canvas
//! - perf/     - solve timing and counters
//! - init/     - construction, seeding, config

use std::collections::VecDeque;

use rand::rngs::StdRng;

use crate::core::MazeError;
use crate::domain::MazeConfig;
use crate::grid::Grid;
use crate::systems::player::Player;
use crate::systems::solver::{Algorithm, SolveFlag, SolveOutcome, SolveRun};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::MazeGame;
pub use perf_stats::SolveStats;
pub use render_extract::{
    RenderSnapshot, FLAG_END, FLAG_EXPLORED, FLAG_PATH, FLAG_START, WALL_BOTTOM, WALL_LEFT,
    WALL_RIGHT, WALL_TOP,
};

use perf_timer::PerfTimer;

pub(crate) struct RenderBuffers {
    pub(crate) cell_flags: Vec<u8>,
    /// Frames requested by the solver since the session started.
    pub(crate) frames: u64,
}

/// Active solve plus the bookkeeping the facade reports afterwards.
pub(crate) struct ActiveSolve {
    pub(crate) run: SolveRun,
    pub(crate) timer: PerfTimer,
    pub(crate) first_frame: u64,
}

pub struct MazeCore {
    config: MazeConfig,
    grid: Grid,
    player: Player,
    size: u32,
    seed: u64,
    rng: StdRng,

    // Solving
    flag: SolveFlag,
    active: Option<ActiveSolve>,
    last_outcome: Option<SolveOutcome>,
    stats: SolveStats,

    // UI toasts, oldest first
    messages: VecDeque<String>,
    last_message: Option<String>,

    render: RenderBuffers,
}

impl MazeCore {
    /// Square maze of `size` cells per side (clamped to the config bounds),
    /// seeded from the clock.
    pub fn new(size: u32) -> Result<Self, MazeError> {
        init::create_maze_core(MazeConfig::default(), size, random::seed_from_clock())
    }

    /// Deterministic session: same seed, same mazes and DFS orderings.
    pub fn with_seed(size: u32, seed: u64) -> Result<Self, MazeError> {
        init::create_maze_core(MazeConfig::default(), size, seed)
    }

    pub fn with_config(config: MazeConfig, size: u32, seed: u64) -> Result<Self, MazeError> {
        init::create_maze_core(config, size, seed)
    }

    // === Accessors ===

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn player(&self) -> &Player { &self.player }

    pub fn config(&self) -> &MazeConfig { &self.config }

    pub fn size(&self) -> u32 { self.size }

    pub fn seed(&self) -> u64 { self.seed }

    /// Handle to the solve flag; clearing it cancels the active run.
    pub fn solve_flag(&self) -> SolveFlag { self.flag.clone() }

    pub fn is_solving(&self) -> bool { self.flag.is_active() }

    pub fn last_outcome(&self) -> Option<SolveOutcome> { self.last_outcome }

    pub fn solve_stats(&self) -> SolveStats { self.stats.clone() }

    pub fn frames(&self) -> u64 { self.render.frames }

    // === Settings ===

    pub fn load_config_json(&mut self, json: &str) -> Result<(), MazeError> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    pub fn delay_ms(&self) -> u32 {
        settings::delay_ms(self)
    }

    // === Commands ===

    /// Replace the maze with a fresh one; any active solve is canceled.
    pub fn generate(&mut self, size: u32) -> Result<(), MazeError> {
        commands::generate(self, size)
    }

    /// Keyboard move; ignored while a solve is running.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        commands::move_player(self, dx, dy)
    }

    /// WASD input. Unknown keys and input during a solve are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        commands::handle_key(self, key)
    }

    pub fn reset_player(&mut self) {
        commands::reset_player(self)
    }

    pub fn stop_solution(&mut self) {
        commands::stop_solution(self)
    }

    // === Solving ===

    /// Begin a solve. Rejected while another run holds the flag.
    pub fn solve_start(&mut self, algorithm: Algorithm) -> Result<(), MazeError> {
        step::solve_start(self, algorithm)
    }

    pub fn solve_start_named(&mut self, name: &str) -> Result<(), MazeError> {
        let algorithm: Algorithm = name.parse()?;
        self.solve_start(algorithm)
    }

    /// Advance the active solve by one cell. Returns `true` while more steps
    /// remain; the caller waits `delay_ms` between calls.
    pub fn solve_step(&mut self) -> bool {
        step::solve_step(self)
    }

    /// Step until the active solve finishes (headless use and tests).
    pub fn solve_to_end(&mut self) -> Option<SolveOutcome> {
        while self.solve_step() {}
        self.last_outcome
    }

    // === Messages ===

    pub fn pop_message(&mut self) -> Option<String> {
        self.messages.pop_front()
    }

    /// Most recent message, whether or not it has been popped.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    fn push_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.last_message = Some(message.clone());
        self.messages.push_back(message);
    }

    // === Render extraction ===

    /// Refresh and expose the per-cell flag bytes (for JS canvas drawing).
    pub fn extract_cell_flags(&mut self) -> &[u8] {
        render_extract::extract_cell_flags(self)
    }

    pub fn cell_flags_ptr(&self) -> *const u8 {
        self.render.cell_flags.as_ptr()
    }

    pub fn cell_flags_len(&self) -> usize {
        self.render.cell_flags.len()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> Result<String, MazeError> {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
