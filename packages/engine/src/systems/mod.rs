//! Systems - algorithms operating on a grid
//!
//! - generator - randomized Kruskal maze carving
//! - player    - wall-respecting single-step movement
//! - solver    - BFS/DFS step coroutine, async driver, cancellation
//! - render    - the drawing collaborator interface

pub mod generator;
pub mod player;
pub mod render;
pub mod solver;
