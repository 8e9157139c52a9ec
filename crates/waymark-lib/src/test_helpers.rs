// Test-only helpers for `waymark-lib` tests
#![allow(dead_code)]
use crate::dataset::{Dataset, Edge, EdgeAddition, Location};

/// Builder to create `Edge` instances in tests with sensible defaults.
pub struct EdgeBuilder {
    edge: Edge,
}

impl EdgeBuilder {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            edge: Edge {
                endpoint_a: a.to_string(),
                endpoint_b: b.to_string(),
                distance: 1.0,
                duration: 1.0,
                mode: "car".to_string(),
                addition: EdgeAddition::default(),
            },
        }
    }

    pub fn distance(mut self, d: f64) -> Self {
        self.edge.distance = d;
        self
    }

    pub fn duration(mut self, d: f64) -> Self {
        self.edge.duration = d;
        self
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.edge.mode = mode.to_string();
        self
    }

    pub fn highway(mut self) -> Self {
        self.edge.addition.highway = true;
        self
    }

    pub fn toll(mut self) -> Self {
        self.edge.addition.toll = true;
        self
    }

    pub fn bridge(mut self) -> Self {
        self.edge.addition.bridge = true;
        self
    }

    pub fn hazardous(mut self) -> Self {
        self.edge.addition.hazardous = true;
        self
    }

    pub fn scenic(mut self) -> Self {
        self.edge.addition.scenic = true;
        self
    }

    pub fn build(self) -> Edge {
        self.edge
    }
}

/// Shorthand for an edge with only distance and mode set.
pub fn edge(a: &str, b: &str, distance: f64, mode: &str) -> Edge {
    EdgeBuilder::new(a, b).distance(distance).mode(mode).build()
}

/// Three collinear locations `X(0,0)`, `Y(1,0)`, `Z(2,0)` joined by
/// `X-Y` (5) and `Y-Z` (3), both by car.
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![
            Location::new("X", 0.0, 0.0),
            Location::new("Y", 1.0, 0.0),
            Location::new("Z", 2.0, 0.0),
        ],
        vec![edge("X", "Y", 5.0, "car"), edge("Y", "Z", 3.0, "car")],
    )
}
