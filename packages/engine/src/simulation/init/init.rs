use std::collections::VecDeque;

use crate::core::MazeError;
use crate::domain::MazeConfig;
use crate::systems::generator;
use crate::systems::player::Player;
use crate::systems::solver::SolveFlag;

use super::perf_stats::SolveStats;
use super::random::rng_from_seed;
use super::{MazeCore, RenderBuffers};

pub(super) fn create_maze_core(config: MazeConfig, size: u32, seed: u64) -> Result<MazeCore, MazeError> {
    config.validate()?;

    let size = config.clamp_size(size);
    let mut rng = rng_from_seed(seed);
    let grid = generator::create_maze(size, size, &mut rng)?;

    Ok(MazeCore {
        render: RenderBuffers {
            cell_flags: vec![0u8; grid.size()],
            frames: 0,
        },
        grid,
        player: Player::default(),
        size,
        seed,
        rng,
        config,

        flag: SolveFlag::new(),
        active: None,
        last_outcome: None,
        stats: SolveStats::default(),

        messages: VecDeque::new(),
        last_message: None,
    })
}
