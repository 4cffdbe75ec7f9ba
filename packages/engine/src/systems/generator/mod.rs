//! Maze generator - randomized Kruskal spanning tree
//!
//! Every right/bottom adjacency becomes an edge with a random weight. Edges
//! are consumed in weight order and a wall is removed only when its two cells
//! are still in different sets, so the open passages form a spanning tree:
//! exactly one simple path between any two cells.

mod union_find;

pub use union_find::DisjointSet;

use rand::Rng;

use crate::core::MazeError;
use crate::domain::Direction;
use crate::grid::Grid;

/// Candidate passage between two adjacent cells (generation only).
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Wall on `a`'s side; `b` loses the opposite one.
    pub wall: Direction,
    pub weight: f64,
}

/// Right and bottom adjacency of every cell, each with a fresh weight.
pub fn collect_edges<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Edge> {
    let (w, h) = (grid.width(), grid.height());
    let interior = (w as usize - 1) * h as usize + w as usize * (h as usize - 1);
    let mut edges = Vec::with_capacity(interior);

    for y in 0..h {
        for x in 0..w {
            let a = grid.index(x, y);
            if x + 1 < w {
                edges.push(Edge {
                    a,
                    b: grid.index(x + 1, y),
                    wall: Direction::Right,
                    weight: rng.random::<f64>(),
                });
            }
            if y + 1 < h {
                edges.push(Edge {
                    a,
                    b: grid.index(x, y + 1),
                    wall: Direction::Bottom,
                    weight: rng.random::<f64>(),
                });
            }
        }
    }
    edges
}

/// Re-wall `grid` and carve a perfect maze into it.
/// Returns the number of passages opened (`size - 1`).
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    grid.reset_for_solution();
    grid.close_all();

    let mut edges = collect_edges(grid, rng);
    edges.sort_by(|l, r| l.weight.total_cmp(&r.weight));

    let mut sets = DisjointSet::new(grid.size());
    let mut opened = 0;
    for edge in edges {
        if sets.union(edge.a, edge.b) {
            grid.set_passage(edge.a, edge.wall, true);
            opened += 1;
        }
    }
    opened
}

/// New `width x height` grid with a freshly generated maze.
pub fn create_maze<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    let opened = carve(&mut grid, rng);
    debug_assert_eq!(opened, grid.size() - 1);
    console_log!("maze generated: {}x{} ({} passages)", width, height, opened);
    Ok(grid)
}
