//! Grid - row-major cell storage for one maze
//!
//! Cells live in a single `Vec<Cell>` indexed `y * width + x`. Start and end
//! are indices into that vector, and every back-reference a solver records
//! (`Cell::parent`) is an index too, so the grid is the only owner.
//!
//! Topology (walls) is written by the generator and then left alone; the
//! solver scratch fields are reset per run by `reset_for_solution`.

use crate::core::MazeError;
use crate::domain::Cell;

mod indexing;
mod passages;
mod scratch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Cell>,
    start: usize,
    end: usize,
}

impl Grid {
    /// Fully walled grid with start at (0,0) and end at (width-1, height-1).
    pub fn new(width: u32, height: u32) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);
        let mut cells = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }

        let start = 0;
        let end = size - 1;
        cells[start].is_start = true;
        cells[end].is_end = true;

        Ok(Self {
            width,
            height,
            size,
            cells,
            start,
            end,
        })
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Cell at signed coordinates; `None` when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end_index(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn start(&self) -> &Cell {
        &self.cells[self.start]
    }

    #[inline]
    pub fn end(&self) -> &Cell {
        &self.cells[self.end]
    }

    /// Cells currently flagged as part of the solution path.
    pub fn path_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_path).count()
    }

    pub fn explored_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_explored).count()
    }
}
