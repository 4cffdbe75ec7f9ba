/// Disjoint-set forest over cell indices.
///
/// `find` compresses paths; `union` hangs the second root under the first
/// with no rank or size balancing. Edge count is bounded by the grid size,
/// so the degenerate chains this can build stay short-lived.
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point everything on the walk straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns `false` if they were already
    /// joined (the edge would close a cycle).
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_reports_cycles() {
        let mut set = DisjointSet::new(4);
        assert!(set.union(0, 1));
        assert!(set.union(2, 3));
        assert!(!set.connected(0, 3));
        assert!(set.union(1, 3));
        assert!(set.connected(0, 2));
        assert!(!set.union(0, 2));
    }

    #[test]
    fn find_compresses_long_chains() {
        let mut set = DisjointSet::new(5);
        // Chain 4 -> 3 -> 2 -> 1 -> 0
        for i in (0..4).rev() {
            assert!(set.union(i, i + 1));
        }
        let root = set.find(4);
        assert_eq!(root, 0);
        assert_eq!(set.parent[4], 0);
        assert_eq!(set.parent[3], 0);
    }
}
