use serde::Serialize;

use crate::core::MazeError;
use crate::domain::{Cell, Direction};

use super::MazeCore;

// Per-cell flag byte layout shared with the canvas drawing code.
pub const WALL_TOP: u8 = 1 << 0;
pub const WALL_RIGHT: u8 = 1 << 1;
pub const WALL_BOTTOM: u8 = 1 << 2;
pub const WALL_LEFT: u8 = 1 << 3;
pub const FLAG_EXPLORED: u8 = 1 << 4;
pub const FLAG_PATH: u8 = 1 << 5;
pub const FLAG_START: u8 = 1 << 6;
pub const FLAG_END: u8 = 1 << 7;

const WALL_BITS: [(Direction, u8); 4] = [
    (Direction::Top, WALL_TOP),
    (Direction::Right, WALL_RIGHT),
    (Direction::Bottom, WALL_BOTTOM),
    (Direction::Left, WALL_LEFT),
];

#[inline]
pub(super) fn cell_flags(cell: &Cell) -> u8 {
    let mut bits = 0u8;
    for (dir, bit) in WALL_BITS {
        if cell.walls.has(dir) {
            bits |= bit;
        }
    }
    if cell.is_explored {
        bits |= FLAG_EXPLORED;
    }
    if cell.is_path {
        bits |= FLAG_PATH;
    }
    if cell.is_start {
        bits |= FLAG_START;
    }
    if cell.is_end {
        bits |= FLAG_END;
    }
    bits
}

pub(super) fn extract_cell_flags(core: &mut MazeCore) -> &[u8] {
    let buf = &mut core.render.cell_flags;
    buf.clear();
    buf.extend(core.grid.cells().iter().map(cell_flags));
    buf
}

/// Everything a frame needs, for consumers that prefer JSON over raw memory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub width: u32,
    pub height: u32,
    pub cell_size: f64,
    pub player: (u32, u32),
    pub solving: bool,
    pub cells: Vec<u8>,
}

pub(super) fn snapshot(core: &MazeCore) -> RenderSnapshot {
    RenderSnapshot {
        width: core.grid.width(),
        height: core.grid.height(),
        cell_size: core.config.cell_size,
        player: (core.player.x, core.player.y),
        solving: core.flag.is_active(),
        cells: core.grid.cells().iter().map(cell_flags).collect(),
    }
}

pub(super) fn snapshot_json(core: &MazeCore) -> Result<String, MazeError> {
    serde_json::to_string(&snapshot(core)).map_err(|e| MazeError::Snapshot(e.to_string()))
}
