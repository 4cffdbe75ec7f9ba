//! SolveRun - one solve as an explicit coroutine
//!
//! `start` performs the setup and first render; each `step` expands one
//! frontier cell and returns. Whoever drives the run (the async `Solver` or
//! a JS timer through the facade) owns the pause between steps, which is
//! where rendering, input and cancellation get their turn.
//!
//! Idle -> Running -> { Succeeded | Exhausted | Canceled } -> Idle

use rand::Rng;

use super::flag::SolveFlag;
use super::frontier::{Algorithm, Frontier, SearchFrontier};
use super::path::reconstruct_path;
use crate::grid::Grid;
use crate::systems::player::Player;
use crate::systems::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// End cell reached; `path_len` counts cells from start to end inclusive.
    Found { algorithm: Algorithm, path_len: usize },
    /// Frontier ran dry without reaching the end.
    Exhausted { algorithm: Algorithm },
    /// The solve flag was cleared from outside mid-run.
    Canceled { algorithm: Algorithm },
}

impl SolveOutcome {
    pub fn algorithm(&self) -> Algorithm {
        match *self {
            SolveOutcome::Found { algorithm, .. }
            | SolveOutcome::Exhausted { algorithm }
            | SolveOutcome::Canceled { algorithm } => algorithm,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found { .. })
    }

    /// User-facing completion message.
    pub fn message(&self) -> String {
        match self {
            SolveOutcome::Found { algorithm, .. } => format!("Path found using {}!", algorithm),
            SolveOutcome::Exhausted { algorithm } => {
                format!("No path found using {}. All reachable cells explored!", algorithm)
            }
            SolveOutcome::Canceled { .. } => "Solving canceled.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Done(SolveOutcome),
}

pub struct SolveRun {
    algorithm: Algorithm,
    frontier: SearchFrontier,
    flag: SolveFlag,
    steps: u32,
    outcome: Option<SolveOutcome>,
}

impl SolveRun {
    /// Raise the flag, clear scratch fields, draw the initial frame and seed
    /// the frontier with the start cell.
    pub fn start<R: Renderer + ?Sized>(
        grid: &mut Grid,
        player: &Player,
        algorithm: Algorithm,
        flag: SolveFlag,
        renderer: &mut R,
    ) -> Self {
        flag.begin();
        grid.reset_for_solution();
        renderer.draw(grid, player);

        let start = grid.start_index();
        let cell = grid.get_mut(start);
        cell.visited = true;
        cell.distance = Some(0);

        let mut frontier = SearchFrontier::new(algorithm);
        frontier.push(start);

        console_log!("solve started: {} on {}x{}", algorithm, grid.width(), grid.height());

        Self {
            algorithm,
            frontier,
            flag,
            steps: 0,
            outcome: None,
        }
    }

    /// Expand one cell. Once finished, keeps returning the same `Done`.
    pub fn step<R: Renderer + ?Sized, G: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        player: &Player,
        renderer: &mut R,
        rng: &mut G,
    ) -> StepState {
        if let Some(outcome) = self.outcome {
            return StepState::Done(outcome);
        }

        if !self.flag.is_active() {
            return self.finish(SolveOutcome::Canceled { algorithm: self.algorithm });
        }

        let Some(current) = self.frontier.pop() else {
            return self.finish(SolveOutcome::Exhausted { algorithm: self.algorithm });
        };
        self.steps += 1;
        grid.get_mut(current).is_explored = true;

        if current == grid.end_index() {
            let path_len = reconstruct_path(grid);
            renderer.draw(grid, player);
            return self.finish(SolveOutcome::Found { algorithm: self.algorithm, path_len });
        }

        renderer.draw(grid, player);

        let start = grid.start_index();
        let next_distance = grid.get(current).distance.map_or(1, |d| d + 1);
        let mut neighbors = grid.open_neighbors(current);
        self.frontier.order_neighbors(&mut neighbors, rng);

        for n in neighbors {
            if n == start {
                continue;
            }
            let cell = grid.get_mut(n);
            if cell.is_explored {
                continue;
            }
            cell.is_explored = true;
            cell.parent = Some(current);
            cell.distance = Some(next_distance);
            self.frontier.push(n);
        }

        StepState::Pending
    }

    fn finish(&mut self, outcome: SolveOutcome) -> StepState {
        self.flag.finish();
        self.outcome = Some(outcome);
        console_log!("solve finished after {} steps: {}", self.steps, outcome.message());
        StepState::Done(outcome)
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Cells popped from the frontier so far.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub fn outcome(&self) -> Option<SolveOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}
