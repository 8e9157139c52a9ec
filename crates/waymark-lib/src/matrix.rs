//! Per-goal relation matrix between directly connected locations.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::dataset::Edge;
use crate::index::LocationIndex;
use crate::routing::{select_weighting, Goal};

/// Traversal cost of a single matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cost {
    /// Literal integer cost (distance, duration, or hop count).
    Finite(u64),
    /// No usable edge: either none exists or it lacks the preferred attribute.
    #[default]
    Infinite,
    /// Edge carries the attribute the goal prefers; traversal is free.
    Preferred,
}

impl Cost {
    /// Truncate a literal edge value to an integer cost.
    ///
    /// Negative values clamp to zero; NaN and infinities are unusable.
    pub fn literal(value: f64) -> Self {
        if !value.is_finite() {
            return Cost::Infinite;
        }
        Cost::Finite(value.max(0.0).trunc() as u64)
    }

    /// Numeric weight used by the solver; `None` means unreachable.
    pub fn weight(self) -> Option<u64> {
        match self {
            Cost::Finite(value) => Some(value),
            Cost::Preferred => Some(0),
            Cost::Infinite => None,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(value) => write!(f, "{value}"),
            Cost::Infinite => f.write_str("inf"),
            Cost::Preferred => f.write_str("pref"),
        }
    }
}

/// Square, 0-indexed matrix of [`Cost`] values stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMatrix {
    size: usize,
    cells: Vec<Cost>,
}

impl RelationMatrix {
    /// Matrix with a zero diagonal and every other pair unreachable.
    pub fn new(size: usize) -> Self {
        let mut cells = vec![Cost::Infinite; size * size];
        for i in 0..size {
            cells[i * size + i] = Cost::Finite(0);
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of the cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Cost {
        assert!(i < self.size && j < self.size, "matrix index out of bounds");
        self.cells[i * self.size + j]
    }

    fn set_pair(&mut self, a: usize, b: usize, cost: Cost) {
        self.cells[a * self.size + b] = cost;
        self.cells[b * self.size + a] = cost;
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Build the relation matrix for `goal`.
///
/// Edges with an unresolved endpoint or two identical endpoints are skipped.
/// When several edges join the same pair, the first one listed sets the cell,
/// matching the edge route assembly picks for that hop.
pub fn build_relation_matrix(
    index: &LocationIndex<'_>,
    edges: &[Edge],
    goal: Goal,
) -> RelationMatrix {
    let weighting = select_weighting(goal);
    let mut matrix = RelationMatrix::new(index.len());
    let mut assigned: HashSet<(usize, usize)> = HashSet::new();
    let mut skipped = 0usize;
    let mut shadowed = 0usize;

    for edge in edges {
        let (Some(a), Some(b)) = (
            index.position_by_name(&edge.endpoint_a),
            index.position_by_name(&edge.endpoint_b),
        ) else {
            skipped += 1;
            continue;
        };
        if a == b {
            skipped += 1;
            continue;
        }
        // A blocked first edge still claims the pair.
        if !assigned.insert((a.min(b), a.max(b))) {
            shadowed += 1;
            continue;
        }
        matrix.set_pair(a, b, weighting.cost(edge));
    }

    debug!(
        goal = %goal,
        size = matrix.size(),
        edges = edges.len(),
        skipped,
        shadowed,
        "built relation matrix"
    );
    matrix
}
