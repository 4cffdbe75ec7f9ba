use super::*;
use crate::domain::{Direction, Walls};

impl Grid {
    /// Open or close the passage between `idx` and its neighbor in `dir`,
    /// keeping both sides consistent. Returns `false` at the grid edge.
    pub fn set_passage(&mut self, idx: usize, dir: Direction, open: bool) -> bool {
        let Some(other) = self.step(idx, dir) else {
            return false;
        };
        self.cells[idx].walls.set(dir, !open);
        self.cells[other].walls.set(dir.opposite(), !open);
        true
    }

    /// Set a single wall flag on one cell only. Hand-built or damaged grids
    /// use this; the generator always goes through `set_passage`.
    pub fn set_wall(&mut self, idx: usize, dir: Direction, present: bool) {
        self.cells[idx].walls.set(dir, present);
    }

    /// Put all four walls back on every cell.
    pub fn close_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.walls = Walls::CLOSED;
        }
    }

    /// Open every interior passage (an empty room with a border).
    pub fn open_all(&mut self) {
        for idx in 0..self.size {
            self.set_passage(idx, Direction::Right, true);
            self.set_passage(idx, Direction::Bottom, true);
        }
    }

    /// Neighbors reachable from `idx` through an open wall on `idx`'s side,
    /// in top, right, bottom, left order.
    pub fn open_neighbors(&self, idx: usize) -> Vec<usize> {
        let cell = &self.cells[idx];
        let mut out = Vec::with_capacity(4);
        for dir in Direction::ALL {
            if cell.is_open(dir) {
                if let Some(n) = self.step(idx, dir) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Number of interior passages open on both sides.
    pub fn open_passage_count(&self) -> usize {
        let mut count = 0;
        for idx in 0..self.size {
            for dir in [Direction::Right, Direction::Bottom] {
                if let Some(other) = self.step(idx, dir) {
                    if self.cells[idx].is_open(dir) && self.cells[other].is_open(dir.opposite()) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// True when every wall flag agrees with its neighbor's opposing flag.
    pub fn walls_consistent(&self) -> bool {
        (0..self.size).all(|idx| {
            [Direction::Right, Direction::Bottom].into_iter().all(|dir| match self.step(idx, dir) {
                Some(other) => {
                    self.cells[idx].walls.has(dir) == self.cells[other].walls.has(dir.opposite())
                }
                None => true,
            })
        })
    }
}
