use wasm_bindgen::prelude::*;

use crate::systems::solver::SolveOutcome;

/// Counters for the most recent solve run (all zero before the first one).
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveStats {
    pub(super) algorithm: String,
    pub(super) steps: u32,
    pub(super) explored: u32,
    pub(super) path_len: u32,
    pub(super) frames: u32,
    pub(super) elapsed_ms: f64,
    pub(super) found: bool,
    pub(super) canceled: bool,
    pub(super) finished: bool,
}

impl SolveStats {
    pub(crate) fn reset(&mut self) {
        *self = SolveStats::default();
    }

    pub(crate) fn record_outcome(&mut self, outcome: &SolveOutcome) {
        self.algorithm = outcome.algorithm().label().to_string();
        self.finished = true;
        match *outcome {
            SolveOutcome::Found { path_len, .. } => {
                self.found = true;
                self.path_len = path_len as u32;
            }
            SolveOutcome::Exhausted { .. } => {}
            SolveOutcome::Canceled { .. } => self.canceled = true,
        }
    }
}

#[wasm_bindgen]
impl SolveStats {
    #[wasm_bindgen(getter)]
    pub fn algorithm(&self) -> String { self.algorithm.clone() }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn explored(&self) -> u32 { self.explored }
    #[wasm_bindgen(getter)]
    pub fn path_len(&self) -> u32 { self.path_len }
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }
    #[wasm_bindgen(getter)]
    pub fn elapsed_ms(&self) -> f64 { self.elapsed_ms }
    #[wasm_bindgen(getter)]
    pub fn found(&self) -> bool { self.found }
    #[wasm_bindgen(getter)]
    pub fn canceled(&self) -> bool { self.canceled }
    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool { self.finished }
}
