use wasm_bindgen::prelude::*;

use super::perf_stats::SolveStats;
use super::MazeCore;
use crate::core::MazeError;

fn to_js(err: MazeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser-facing maze session.
///
/// JS owns the timer: after `solve` succeeds, call `solve_step` every
/// `delay_ms` until it returns `false`, redrawing from the cell flag buffer
/// in between. Keyboard input arrives through `handle_key`.
#[wasm_bindgen]
pub struct MazeGame {
    core: MazeCore,
}

#[wasm_bindgen]
impl MazeGame {
    /// Create a session with a `size` x `size` maze (clamped to 5..=50)
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<MazeGame, JsValue> {
        let core = MazeCore::new(size).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(size: u32, seed: u64) -> Result<MazeGame, JsValue> {
        let core = MazeCore::with_seed(size, seed).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.grid().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.grid().height() }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 { self.core.seed() }

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> u32 { self.core.player().x }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> u32 { self.core.player().y }

    #[wasm_bindgen(getter)]
    pub fn solving(&self) -> bool { self.core.is_solving() }

    #[wasm_bindgen(getter)]
    pub fn delay_ms(&self) -> u32 { self.core.delay_ms() }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.core.frames() }

    /// Build a new maze; cancels any running solve
    pub fn generate(&mut self, size: u32) -> Result<(), JsValue> {
        self.core.generate(size).map_err(to_js)
    }

    // === SOLVING ===

    /// Start a "bfs" or "dfs" solve
    pub fn solve(&mut self, algorithm: String) -> Result<(), JsValue> {
        self.core.solve_start_named(&algorithm).map_err(to_js)
    }

    /// Advance the running solve by one cell; `false` when finished
    pub fn solve_step(&mut self) -> bool {
        self.core.solve_step()
    }

    pub fn stop_solution(&mut self) {
        self.core.stop_solution();
    }

    pub fn get_solve_stats(&self) -> SolveStats {
        self.core.solve_stats()
    }

    // === PLAYER ===

    pub fn reset_player(&mut self) {
        self.core.reset_player();
    }

    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        self.core.move_player(dx, dy)
    }

    /// WASD; returns whether the player moved (redraw hint)
    pub fn handle_key(&mut self, key: String) -> bool {
        self.core.handle_key(&key)
    }

    // === MESSAGES ===

    /// Oldest unread toast message, if any
    pub fn pop_message(&mut self) -> Option<String> {
        self.core.pop_message()
    }

    pub fn last_message(&self) -> Option<String> {
        self.core.last_message().map(str::to_string)
    }

    // === CONFIG ===

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    // === RENDERING ===

    /// Refresh the cell flag buffer; returns its length
    pub fn extract_cell_flags(&mut self) -> usize {
        self.core.extract_cell_flags().len()
    }

    /// Get pointer to the cell flag buffer (for JS rendering)
    pub fn cell_flags_ptr(&self) -> *const u8 {
        self.core.cell_flags_ptr()
    }

    pub fn cell_flags_len(&self) -> usize {
        self.core.cell_flags_len()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core.snapshot_json().map_err(to_js)
    }
}
