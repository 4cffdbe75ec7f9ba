//! Solver - BFS/DFS search from start to end, one visible step at a time
//!
//! - frontier  - Algorithm tag + the queue/stack strategies
//! - run       - the step coroutine and its outcomes
//! - driver    - async loop with a pluggable pause between steps
//! - pacer     - the pauses: yield-once, wall-clock deadline, browser timer
//! - flag      - cooperative cancellation token
//! - path      - parent-link path reconstruction

mod driver;
mod flag;
mod frontier;
mod pacer;
mod path;
mod run;

pub use driver::Solver;
#[cfg(target_arch = "wasm32")]
pub use pacer::{BrowserTimer, TimerPause};
#[cfg(not(target_arch = "wasm32"))]
pub use pacer::{Deadline, DeadlinePause};
pub use pacer::{Pacer, YieldNow, YieldOnce};
pub use flag::SolveFlag;
pub use frontier::{Algorithm, BreadthFirst, DepthFirst, Frontier, SearchFrontier};
pub use path::{path_indices, reconstruct_path};
pub use run::{SolveOutcome, SolveRun, StepState};
