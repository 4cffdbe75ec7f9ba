//! Player - a position moved one cell at a time by keyboard input
//!
//! A move only consults the wall on the player's *current* cell in the
//! direction of travel (plus the grid bounds). The destination's opposing
//! wall is never read; generated mazes keep both sides in sync so the
//! difference only shows on hand-edited grids.

use serde::Serialize;

use crate::domain::Direction;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Player {
    pub x: u32,
    pub y: u32,
}

impl Player {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Try a single unit step. Bumping into a wall or the border is a silent
    /// no-op; non-unit vectors are ignored. Returns whether the player moved.
    pub fn move_by(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        match Direction::from_delta(dx, dy) {
            Some(dir) => self.move_dir(dir, grid),
            None => false,
        }
    }

    pub fn move_dir(&mut self, dir: Direction, grid: &Grid) -> bool {
        let Some(current) = grid.cell(self.x as i32, self.y as i32) else {
            return false;
        };
        if !current.is_open(dir) {
            return false;
        }

        let (dx, dy) = dir.offset();
        let nx = self.x as i32 + dx;
        let ny = self.y as i32 + dy;
        if !grid.in_bounds(nx, ny) {
            return false;
        }

        self.x = nx as u32;
        self.y = ny as u32;
        true
    }

    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Standing on the grid's end cell.
    pub fn at_end(&self, grid: &Grid) -> bool {
        grid.cell(self.x as i32, self.y as i32).is_some_and(|c| c.is_end)
    }
}

/// Free-function form used by the orchestration layer.
#[inline]
pub fn move_player(player: &mut Player, dx: i32, dy: i32, grid: &Grid) -> bool {
    player.move_by(dx, dy, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_grid_blocks_every_direction() {
        let grid = Grid::new(2, 2).unwrap();
        let mut player = Player::default();
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            assert!(!player.move_by(dx, dy, &grid));
            assert_eq!(player, Player::new(0, 0));
        }
    }

    #[test]
    fn open_passage_allows_exactly_one_step() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_passage(0, Direction::Right, true);
        let mut player = Player::default();

        assert!(player.move_by(1, 0, &grid));
        assert_eq!(player, Player::new(1, 0));
        // Right wall of (1,0) is still up, and beyond it is the border
        assert!(!player.move_by(1, 0, &grid));
        assert_eq!(player, Player::new(1, 0));

        assert!(player.move_by(-1, 0, &grid));
        assert_eq!(player, Player::new(0, 0));
    }

    #[test]
    fn open_border_wall_still_respects_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_wall(0, Direction::Left, false);
        grid.set_wall(0, Direction::Top, false);
        let mut player = Player::default();
        assert!(!player.move_by(-1, 0, &grid));
        assert!(!player.move_by(0, -1, &grid));
        assert_eq!(player, Player::new(0, 0));
    }

    #[test]
    fn only_current_cell_wall_is_consulted() {
        let mut grid = Grid::new(2, 1).unwrap();
        // (0,0) says open to the right, (1,0) still says its left wall is up
        grid.set_wall(0, Direction::Right, false);
        let mut player = Player::default();
        assert!(player.move_by(1, 0, &grid));
        assert_eq!(player, Player::new(1, 0));
        // Going back is blocked by (1,0)'s own left wall
        assert!(!player.move_by(-1, 0, &grid));
        assert_eq!(player, Player::new(1, 0));
    }

    #[test]
    fn non_unit_moves_are_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.open_all();
        let mut player = Player::default();
        assert!(!player.move_by(1, 1, &grid));
        assert!(!player.move_by(2, 0, &grid));
        assert!(!player.move_by(0, 0, &grid));
        assert_eq!(player, Player::new(0, 0));
    }

    #[test]
    fn reset_returns_to_origin_and_at_end_tracks_goal() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.open_all();
        let mut player = Player::default();
        assert!(move_player(&mut player, 1, 0, &grid));
        assert!(player.at_end(&grid));
        player.reset();
        assert_eq!(player, Player::new(0, 0));
        assert!(!player.at_end(&grid));
    }
}
