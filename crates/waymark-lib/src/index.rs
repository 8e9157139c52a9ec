//! Name and coordinate lookups over the location list.
//!
//! Positions are 0-based offsets into the location slice and double as the
//! row/column indices of the relation matrix.

use strsim::jaro_winkler;

use crate::dataset::{Coordinates, Location};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only index over a dataset's locations.
#[derive(Debug, Clone, Copy)]
pub struct LocationIndex<'a> {
    locations: &'a [Location],
}

impl<'a> LocationIndex<'a> {
    pub fn new(locations: &'a [Location]) -> Self {
        Self { locations }
    }

    /// Number of indexed locations (the matrix dimension).
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location(&self, position: usize) -> Option<&'a Location> {
        self.locations.get(position)
    }

    /// Position of the first location whose name matches exactly.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.locations.iter().position(|l| l.name == name)
    }

    /// Position of the first location at exactly these coordinates.
    pub fn position_by_coordinates(&self, coordinates: Coordinates) -> Option<usize> {
        self.locations.iter().position(|l| {
            l.latitude == coordinates.latitude && l.longitude == coordinates.longitude
        })
    }

    /// Names most similar to `name`, best first, at most `limit` of them.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|l| (jaro_winkler(&needle, &l.name.to_lowercase()), l.name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
