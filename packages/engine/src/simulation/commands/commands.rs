use crate::core::MazeError;
use crate::domain::Direction;
use crate::systems::generator;
use crate::systems::player::move_player as try_move;

use super::step::abandon_active_run;
use super::MazeCore;

pub(super) fn generate(core: &mut MazeCore, size: u32) -> Result<(), MazeError> {
    abandon_active_run(core);

    let size = core.config.clamp_size(size);
    let grid = generator::create_maze(size, size, &mut core.rng)?;

    core.render.cell_flags.clear();
    core.render.cell_flags.resize(grid.size(), 0);
    core.grid = grid;
    core.size = size;
    core.player.reset();
    Ok(())
}

pub(super) fn move_player(core: &mut MazeCore, dx: i32, dy: i32) -> bool {
    if core.flag.is_active() {
        return false;
    }
    try_move(&mut core.player, dx, dy, &core.grid)
}

pub(super) fn handle_key(core: &mut MazeCore, key: &str) -> bool {
    let Some(dir) = Direction::from_key(key) else {
        return false;
    };
    let (dx, dy) = dir.offset();
    move_player(core, dx, dy)
}

pub(super) fn reset_player(core: &mut MazeCore) {
    abandon_active_run(core);
    core.grid.reset_for_solution();
    core.player.reset();
    core.push_message("Player reset!");
}

pub(super) fn stop_solution(core: &mut MazeCore) {
    abandon_active_run(core);
    core.grid.reset_for_solution();
    core.push_message("Solution visualization stopped.");
}
