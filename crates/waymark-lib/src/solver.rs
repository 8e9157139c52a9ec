//! All-pairs shortest paths over a [`RelationMatrix`].

use tracing::debug;

use crate::matrix::RelationMatrix;

/// Distance and predecessor matrices produced by Floyd–Warshall.
///
/// `cost(i, j)` is `None` when `j` cannot be reached from `i`.
/// `predecessor(i, j)` is the intermediate location that last improved the
/// `i → j` cost, or `None` when the direct relation is already optimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    size: usize,
    costs: Vec<Option<u64>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Relax every pair through every intermediate, `k` outermost.
    pub fn solve(matrix: &RelationMatrix) -> Self {
        let n = matrix.size();
        let mut costs = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                costs.push(matrix.get(i, j).weight());
            }
        }
        let mut predecessors = vec![None; n * n];

        for k in 0..n {
            for i in 0..n {
                let Some(via_k) = costs[i * n + k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(k_to_j) = costs[k * n + j] else {
                        continue;
                    };
                    let candidate = via_k.saturating_add(k_to_j);
                    let improves = match costs[i * n + j] {
                        Some(current) => candidate < current,
                        None => true,
                    };
                    if improves {
                        costs[i * n + j] = Some(candidate);
                        predecessors[i * n + j] = Some(k);
                    }
                }
            }
        }

        debug!(size = n, "solved all-pairs shortest paths");
        Self {
            size: n,
            costs,
            predecessors,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cost(&self, i: usize, j: usize) -> Option<u64> {
        self.costs[self.offset(i, j)]
    }

    pub fn predecessor(&self, i: usize, j: usize) -> Option<usize> {
        self.predecessors[self.offset(i, j)]
    }

    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.cost(i, j).is_some()
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.size && j < self.size, "matrix index out of bounds");
        i * self.size + j
    }
}
