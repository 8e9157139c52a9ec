//! Per-goal edge weighting strategies.
//!
//! Each [`Goal`] maps to an [`EdgeWeighting`] that turns a single edge into a
//! relation matrix [`Cost`]. Literal goals read a numeric field; attribute
//! goals prefer edges carrying one road tag and block every other edge.

use crate::dataset::Edge;
use crate::filter::RoadTag;
use crate::matrix::Cost;

use super::Goal;

/// Strategy for weighting one edge under a routing goal.
pub trait EdgeWeighting: Send + Sync {
    /// The goal this weighting implements.
    fn goal(&self) -> Goal;

    /// Cost of traversing `edge` in either direction.
    fn cost(&self, edge: &Edge) -> Cost;
}

/// Weights edges by their distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceWeighting;

impl EdgeWeighting for DistanceWeighting {
    fn goal(&self) -> Goal {
        Goal::Shortest
    }

    fn cost(&self, edge: &Edge) -> Cost {
        Cost::literal(edge.distance)
    }
}

/// Weights edges by their travel duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationWeighting;

impl EdgeWeighting for DurationWeighting {
    fn goal(&self) -> Goal {
        Goal::Fastest
    }

    fn cost(&self, edge: &Edge) -> Cost {
        Cost::literal(edge.duration)
    }
}

/// Every edge costs one hop.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopWeighting;

impl EdgeWeighting for HopWeighting {
    fn goal(&self) -> Goal {
        Goal::Simplest
    }

    fn cost(&self, _edge: &Edge) -> Cost {
        Cost::Finite(1)
    }
}

/// Edges tagged with `tag` are free; all others are blocked.
#[derive(Debug, Clone, Copy)]
pub struct AttributeWeighting {
    goal: Goal,
    tag: RoadTag,
}

impl AttributeWeighting {
    pub fn new(goal: Goal, tag: RoadTag) -> Self {
        Self { goal, tag }
    }

    pub fn tag(&self) -> RoadTag {
        self.tag
    }
}

impl EdgeWeighting for AttributeWeighting {
    fn goal(&self) -> Goal {
        self.goal
    }

    fn cost(&self, edge: &Edge) -> Cost {
        if edge.addition.has(self.tag) {
            Cost::Preferred
        } else {
            Cost::Infinite
        }
    }
}

/// Select the weighting strategy for a goal.
pub fn select_weighting(goal: Goal) -> Box<dyn EdgeWeighting> {
    match goal {
        Goal::Shortest => Box::new(DistanceWeighting),
        Goal::Fastest => Box::new(DurationWeighting),
        Goal::Simplest => Box::new(HopWeighting),
        Goal::MostScenic => Box::new(AttributeWeighting::new(goal, RoadTag::Scenic)),
        Goal::Cheapest => Box::new(AttributeWeighting::new(goal, RoadTag::Toll)),
        Goal::Safest => Box::new(AttributeWeighting::new(goal, RoadTag::Hazardous)),
    }
}
