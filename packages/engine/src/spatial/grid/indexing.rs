use super::*;
use crate::domain::Direction;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index of the cell one step from `idx` in `dir`, ignoring walls.
    #[inline]
    pub fn step(&self, idx: usize, dir: Direction) -> Option<usize> {
        let (x, y) = self.coords(idx);
        let (dx, dy) = dir.offset();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        if self.in_bounds(nx, ny) {
            Some(self.index(nx as u32, ny as u32))
        } else {
            None
        }
    }
}
