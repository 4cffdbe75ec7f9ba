//! Cell - one maze position
//!
//! Walls are the topology (fixed after generation). Everything else is
//! bookkeeping owned by whichever solve run is active and wiped by
//! `Grid::reset_for_solution`.

use serde::Serialize;

use super::direction::Direction;

/// `true` = wall present (impassable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls { top: true, right: true, bottom: true, left: true };
    pub const OPEN: Walls = Walls { top: false, right: false, bottom: false, left: false };

    #[inline]
    pub fn has(&self, dir: Direction) -> bool {
        match dir {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    #[inline]
    pub fn set(&mut self, dir: Direction, present: bool) {
        match dir {
            Direction::Top => self.top = present,
            Direction::Right => self.right = present,
            Direction::Bottom => self.bottom = present,
            Direction::Left => self.left = present,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub walls: Walls,
    pub visited: bool,
    /// Index of the cell this one was reached from (traversal link only).
    pub parent: Option<usize>,
    pub is_start: bool,
    pub is_end: bool,
    pub is_path: bool,
    pub is_explored: bool,
    /// Hop count from the start; `None` = not reached.
    pub distance: Option<u32>,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            walls: Walls::CLOSED,
            visited: false,
            parent: None,
            is_start: false,
            is_end: false,
            is_path: false,
            is_explored: false,
            distance: None,
        }
    }

    /// Clear solver scratch (`parent`, `is_path`, `is_explored`, `distance`).
    #[inline]
    pub fn reset_for_solution(&mut self) {
        self.parent = None;
        self.is_path = false;
        self.is_explored = false;
        self.distance = None;
    }

    #[inline]
    pub fn is_open(&self, dir: Direction) -> bool {
        !self.walls.has(dir)
    }
}
