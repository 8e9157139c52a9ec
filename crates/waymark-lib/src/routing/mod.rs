//! Route planning entry points.
//!
//! This module provides:
//! - [`Goal`] - The optimization criterion for a request
//! - [`RouteOptions`] - Goal plus the requested mode/constraint filters
//! - [`plan_route`] - The full pipeline, keeping every failure cause
//! - [`find`] - The caller-facing contract, collapsing failures to `None`
//! - [`RouteService`] - Loads a dataset from a [`DatasetSource`] per request
//!
//! # Pipeline
//!
//! A request resolves both endpoints through the [`LocationIndex`], builds
//! the goal's [`RelationMatrix`](crate::matrix::RelationMatrix), solves all
//! pairs, expands the origin → destination path, assembles route steps from
//! the edge list, and finally checks the route's footprint against the
//! requested modes and constraints.
//!
//! # Example
//!
//! ```ignore
//! use waymark_lib::{find, load_dataset, Coordinates, Goal, RouteOptions};
//!
//! let dataset = load_dataset("network.json".as_ref())?;
//! let options = RouteOptions::new(Goal::Fastest).with_modes(["car"]);
//! let route = find(&dataset, Coordinates::new(0.0, 0.0), Coordinates::new(2.0, 0.0), &options);
//! ```

mod weighting;

pub use weighting::{
    select_weighting, AttributeWeighting, DistanceWeighting, DurationWeighting, EdgeWeighting,
    HopWeighting,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{Coordinates, Dataset, DatasetSource};
use crate::error::{Error, Result, RouteError};
use crate::filter::{ConstraintMatch, RouteFootprint};
use crate::index::LocationIndex;
use crate::matrix::build_relation_matrix;
use crate::output::{assemble_route, RouteResult};
use crate::path::reconstruct_path;
use crate::solver::ShortestPaths;

/// Number of fuzzy suggestions attached to unknown-location errors.
const MAX_SUGGESTIONS: usize = 3;

/// Optimization criterion for a routing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// Minimize total distance.
    #[default]
    Shortest,
    /// Minimize total duration.
    Fastest,
    /// Minimize the number of hops.
    Simplest,
    /// Travel only over scenic edges.
    MostScenic,
    /// Travel only over toll edges.
    Cheapest,
    /// Travel only over edges flagged hazardous.
    Safest,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::Shortest,
        Goal::Fastest,
        Goal::Simplest,
        Goal::MostScenic,
        Goal::Cheapest,
        Goal::Safest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Shortest => "SHORTEST",
            Goal::Fastest => "FASTEST",
            Goal::Simplest => "SIMPLEST",
            Goal::MostScenic => "MOST_SCENIC",
            Goal::Cheapest => "CHEAPEST",
            Goal::Safest => "SAFEST",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    /// Accepts wire names in any case, `-` for `_`, and the short aliases
    /// `distance`, `duration`, `simple`, `scenic`, `cheap` and `safe`.
    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        let goal = match normalized.as_str() {
            "SHORTEST" | "DISTANCE" => Goal::Shortest,
            "FASTEST" | "DURATION" => Goal::Fastest,
            "SIMPLEST" | "SIMPLE" => Goal::Simplest,
            "MOST_SCENIC" | "SCENIC" => Goal::MostScenic,
            "CHEAPEST" | "CHEAP" => Goal::Cheapest,
            "SAFEST" | "SAFE" => Goal::Safest,
            _ => {
                return Err(Error::InvalidGoal {
                    value: value.to_string(),
                })
            }
        };
        Ok(goal)
    }
}

/// Goal and filters for a routing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    #[serde(rename = "routeGoal")]
    pub goal: Goal,
    #[serde(default)]
    pub modes: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub matching: ConstraintMatch,
}

impl RouteOptions {
    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            ..Self::default()
        }
    }

    pub fn with_modes<I, S>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modes = modes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_matching(mut self, matching: ConstraintMatch) -> Self {
        self.matching = matching;
        self
    }
}

/// Compute a route, reporting why none was produced.
///
/// An empty dataset (no locations or no edges) yields an empty result rather
/// than an error. The dataset is only read.
pub fn plan_route(
    dataset: &Dataset,
    origin: Coordinates,
    destination: Coordinates,
    options: &RouteOptions,
) -> std::result::Result<RouteResult, RouteError> {
    if dataset.is_empty() {
        debug!(
            locations = dataset.locations.len(),
            edges = dataset.edges.len(),
            "dataset is empty; returning empty result"
        );
        return Ok(RouteResult::empty());
    }

    // Step 1: Resolve endpoints
    let index = LocationIndex::new(&dataset.locations);
    let start = index
        .position_by_coordinates(origin)
        .ok_or(RouteError::UnknownOrigin)?;
    let goal = index
        .position_by_coordinates(destination)
        .ok_or(RouteError::UnknownDestination)?;

    // Step 2: Weight edges and solve all pairs
    let matrix = build_relation_matrix(&index, &dataset.edges, options.goal);
    let paths = ShortestPaths::solve(&matrix);

    if !paths.is_reachable(start, goal) {
        return Err(RouteError::Unreachable {
            origin: dataset.locations[start].name.clone(),
            destination: dataset.locations[goal].name.clone(),
        });
    }

    // Step 3: Expand the path and back every hop with an edge
    let path = reconstruct_path(&paths, start, goal);
    let segment = assemble_route(&index, &dataset.edges, &path)?;

    // Step 4: Filter on modes and road tags
    let footprint = RouteFootprint::from_segment(&segment);
    if !footprint.satisfies(&options.modes, &options.constraints, options.matching) {
        debug!(
            modes = ?footprint.modes,
            tags = ?footprint.tags,
            requested_modes = ?options.modes,
            requested_constraints = ?options.constraints,
            "route rejected by filter"
        );
        return Err(RouteError::Rejected);
    }

    debug!(
        goal = %options.goal,
        hops = segment.hop_count(),
        cost = ?paths.cost(start, goal),
        "route planned"
    );
    Ok(RouteResult::from_segment(segment))
}

/// Compute a route, returning `None` whenever no qualifying route exists.
///
/// `Some` with an empty result means the dataset had nothing to route over.
pub fn find(
    dataset: &Dataset,
    origin: Coordinates,
    destination: Coordinates,
    options: &RouteOptions,
) -> Option<RouteResult> {
    match plan_route(dataset, origin, destination, options) {
        Ok(result) => Some(result),
        Err(cause) => {
            debug!(%origin, %destination, %cause, "no route");
            None
        }
    }
}

/// Resolve a location name to its coordinates, suggesting close matches.
pub fn resolve_location(dataset: &Dataset, name: &str) -> Result<Coordinates> {
    let index = LocationIndex::new(&dataset.locations);
    index
        .position_by_name(name)
        .and_then(|position| index.location(position))
        .map(|location| location.coordinates())
        .ok_or_else(|| Error::UnknownLocation {
            name: name.to_string(),
            suggestions: index.suggest(name, MAX_SUGGESTIONS),
        })
}

/// Compute a route between two location names.
///
/// Unknown names are reported as [`Error::UnknownLocation`]; every other
/// failure is [`Error::NoRoute`].
pub fn plan_route_by_name(
    dataset: &Dataset,
    origin: &str,
    destination: &str,
    options: &RouteOptions,
) -> Result<RouteResult> {
    let origin = resolve_location(dataset, origin)?;
    let destination = resolve_location(dataset, destination)?;
    Ok(plan_route(dataset, origin, destination, options)?)
}

/// Routes against a dataset that is re-read from its source on every call.
#[derive(Debug, Clone)]
pub struct RouteService<S> {
    source: S,
}

impl<S: DatasetSource> RouteService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the dataset and route over it.
    ///
    /// Errors only come from the source; "no route" is `Ok(None)`.
    pub fn find(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        options: &RouteOptions,
    ) -> Result<Option<RouteResult>> {
        let dataset = self.source.load()?;
        dataset.validate();
        Ok(find(&dataset, origin, destination, options))
    }
}
