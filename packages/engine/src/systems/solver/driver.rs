//! Async driver - runs a `SolveRun` to completion, yielding between steps

use rand::Rng;

use super::flag::SolveFlag;
use super::frontier::Algorithm;
use super::pacer::Pacer;
use super::run::{SolveOutcome, SolveRun, StepState};
use crate::domain::config::DEFAULT_DELAY_MS;
use crate::grid::Grid;
use crate::systems::player::Player;
use crate::systems::render::Renderer;

/// Everything a solve needs besides the maze itself.
pub struct Solver<'a, R: ?Sized, P, G: ?Sized> {
    renderer: &'a mut R,
    pacer: P,
    rng: &'a mut G,
    delay_ms: u32,
}

impl<'a, R, P, G> Solver<'a, R, P, G>
where
    R: Renderer + ?Sized,
    P: Pacer,
    G: Rng + ?Sized,
{
    pub fn new(renderer: &'a mut R, pacer: P, rng: &'a mut G) -> Self {
        Self {
            renderer,
            pacer,
            rng,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Search from the grid's start to its end.
    ///
    /// `renderer.draw` runs once up front, once per expanded cell and once
    /// more after a path is marked. `on_done` receives the completion
    /// message exactly once. `flag` is raised for the duration of the run;
    /// clearing it from outside (while this future is suspended in a
    /// pause) stops the run at the next step boundary.
    pub async fn solve<F: FnOnce(&str)>(
        &mut self,
        grid: &mut Grid,
        player: &Player,
        algorithm: Algorithm,
        flag: &SolveFlag,
        on_done: F,
    ) -> SolveOutcome {
        let mut run = SolveRun::start(grid, player, algorithm, flag.clone(), &mut *self.renderer);

        let outcome = loop {
            match run.step(grid, player, &mut *self.renderer, &mut *self.rng) {
                StepState::Pending => self.pacer.pause(self.delay_ms).await,
                StepState::Done(outcome) => break outcome,
            }
        };

        on_done(&outcome.message());
        outcome
    }
}
