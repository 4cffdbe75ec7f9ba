use super::*;

impl Grid {
    /// Clear `parent`, `is_path`, `is_explored` and `distance` on every cell.
    /// Idempotent; walls and start/end flags are untouched.
    pub fn reset_for_solution(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_for_solution();
        }
    }
}
