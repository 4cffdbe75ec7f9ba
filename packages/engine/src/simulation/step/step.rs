use crate::core::MazeError;
use crate::grid::Grid;
use crate::systems::player::Player;
use crate::systems::solver::{Algorithm, SolveOutcome, SolveRun, StepState};

use super::perf_timer::PerfTimer;
use super::{ActiveSolve, MazeCore};

pub(super) fn solve_start(core: &mut MazeCore, algorithm: Algorithm) -> Result<(), MazeError> {
    if core.flag.is_active() {
        console_warn!("{} solve rejected: a solve is already running", algorithm);
        return Err(MazeError::SolveInProgress);
    }

    // A run whose flag was cleared elsewhere but never stepped again.
    abandon_active_run(core);

    core.stats.reset();
    core.last_outcome = None;
    let first_frame = core.render.frames;

    let frames = &mut core.render.frames;
    let mut renderer = |_: &Grid, _: &Player| *frames += 1;
    let run = SolveRun::start(
        &mut core.grid,
        &core.player,
        algorithm,
        core.flag.clone(),
        &mut renderer,
    );

    core.active = Some(ActiveSolve {
        run,
        timer: PerfTimer::start(),
        first_frame,
    });
    Ok(())
}

/// One coroutine step. `false` once there is nothing left to do.
pub(super) fn solve_step(core: &mut MazeCore) -> bool {
    let Some(active) = core.active.as_mut() else {
        return false;
    };

    let frames = &mut core.render.frames;
    let mut renderer = |_: &Grid, _: &Player| *frames += 1;
    let state = active
        .run
        .step(&mut core.grid, &core.player, &mut renderer, &mut core.rng);
    core.stats.steps = active.run.steps();

    match state {
        StepState::Pending => true,
        StepState::Done(outcome) => {
            if let Some(active) = core.active.take() {
                record_finish(core, &active, outcome);
            }
            core.push_message(outcome.message());
            false
        }
    }
}

pub(super) fn record_finish(core: &mut MazeCore, active: &ActiveSolve, outcome: SolveOutcome) {
    core.stats.steps = active.run.steps();
    core.stats.explored = core.grid.explored_count() as u32;
    core.stats.frames = (core.render.frames - active.first_frame) as u32;
    core.stats.elapsed_ms = active.timer.elapsed_ms();
    core.stats.record_outcome(&outcome);
    core.last_outcome = Some(outcome);
}

/// Clear the flag and let the active run (if any) observe it, so it
/// finishes as `Canceled` and its stats are kept. Its own message is
/// dropped; callers post their own.
pub(super) fn abandon_active_run(core: &mut MazeCore) {
    core.flag.cancel();

    let Some(mut active) = core.active.take() else {
        return;
    };

    let frames = &mut core.render.frames;
    let mut renderer = |_: &Grid, _: &Player| *frames += 1;
    if let StepState::Done(outcome) =
        active.run.step(&mut core.grid, &core.player, &mut renderer, &mut core.rng)
    {
        record_finish(core, &active, outcome);
    }
}
