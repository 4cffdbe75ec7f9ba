//! Frontier strategies - the only place BFS and DFS differ
//!
//! Both share the step/termination contract in `run.rs`; the frontier
//! decides which discovered cell is expanded next and in what order a
//! cell's neighbors are queued.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::MazeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Frontier trait - each search strategy implements this
pub trait Frontier {
    fn push(&mut self, idx: usize);
    fn pop(&mut self) -> Option<usize>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reorder a freshly expanded cell's neighbors before they are pushed.
    fn order_neighbors<R: Rng + ?Sized>(&mut self, _neighbors: &mut [usize], _rng: &mut R) {}
}

/// FIFO queue: cells leave in discovery order, so distances are hop-optimal.
#[derive(Default)]
pub struct BreadthFirst {
    queue: VecDeque<usize>,
}

impl Frontier for BreadthFirst {
    #[inline]
    fn push(&mut self, idx: usize) {
        self.queue.push_back(idx);
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// LIFO stack with neighbors shuffled on every expansion; finds *a* path.
#[derive(Default)]
pub struct DepthFirst {
    stack: Vec<usize>,
}

impl Frontier for DepthFirst {
    #[inline]
    fn push(&mut self, idx: usize) {
        self.stack.push(idx);
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    fn order_neighbors<R: Rng + ?Sized>(&mut self, neighbors: &mut [usize], rng: &mut R) {
        neighbors.shuffle(rng);
    }
}

/// Dispatch by algorithm
pub enum SearchFrontier {
    Bfs(BreadthFirst),
    Dfs(DepthFirst),
}

impl SearchFrontier {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => SearchFrontier::Bfs(BreadthFirst::default()),
            Algorithm::Dfs => SearchFrontier::Dfs(DepthFirst::default()),
        }
    }
}

impl Frontier for SearchFrontier {
    fn push(&mut self, idx: usize) {
        match self {
            SearchFrontier::Bfs(f) => f.push(idx),
            SearchFrontier::Dfs(f) => f.push(idx),
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            SearchFrontier::Bfs(f) => f.pop(),
            SearchFrontier::Dfs(f) => f.pop(),
        }
    }

    fn len(&self) -> usize {
        match self {
            SearchFrontier::Bfs(f) => f.len(),
            SearchFrontier::Dfs(f) => f.len(),
        }
    }

    fn order_neighbors<R: Rng + ?Sized>(&mut self, neighbors: &mut [usize], rng: &mut R) {
        match self {
            SearchFrontier::Bfs(f) => f.order_neighbors(neighbors, rng),
            SearchFrontier::Dfs(f) => f.order_neighbors(neighbors, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(MazeError::UnknownAlgorithm("astar".to_string()))
        );
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
    }

    #[test]
    fn bfs_is_fifo_and_dfs_is_lifo() {
        let mut bfs = SearchFrontier::new(Algorithm::Bfs);
        let mut dfs = SearchFrontier::new(Algorithm::Dfs);
        for i in 0..3 {
            bfs.push(i);
            dfs.push(i);
        }
        assert_eq!(bfs.len(), 3);
        assert_eq!((bfs.pop(), bfs.pop(), bfs.pop()), (Some(0), Some(1), Some(2)));
        assert_eq!((dfs.pop(), dfs.pop(), dfs.pop()), (Some(2), Some(1), Some(0)));
        assert!(bfs.is_empty() && dfs.is_empty());
        assert_eq!(bfs.pop(), None);
    }

    #[test]
    fn only_dfs_reorders_neighbors() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut bfs = SearchFrontier::new(Algorithm::Bfs);
        let mut list = [1, 2, 3, 4];
        bfs.order_neighbors(&mut list, &mut rng);
        assert_eq!(list, [1, 2, 3, 4]);

        let mut dfs = SearchFrontier::new(Algorithm::Dfs);
        let mut list = [1, 2, 3, 4];
        dfs.order_neighbors(&mut list, &mut rng);
        let mut sorted = list;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }
}
