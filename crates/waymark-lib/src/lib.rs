//! Waymark library entry points.
//!
//! This crate loads a small location/edge network, weights it for one of six
//! routing goals, solves all-pairs shortest paths, and turns the optimal path
//! into route steps that are checked against the caller's mode and road
//! constraint filters. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod filter;
pub mod index;
pub mod matrix;
pub mod output;
pub mod path;
pub mod routing;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dataset::{
    default_dataset_path, load_dataset, resolve_dataset_path, Coordinates, Dataset,
    DatasetSource, Edge, EdgeAddition, JsonDataset, Location, SqliteDataset, DATASET_ENV_VAR,
};
pub use error::{Error, Result, RouteError};
pub use filter::{ConstraintMatch, RoadTag, RouteFootprint};
pub use index::LocationIndex;
pub use matrix::{build_relation_matrix, Cost, RelationMatrix};
pub use output::{assemble_route, RouteRenderMode, RouteResult, RouteStep, RouteSummary, Segment};
pub use path::reconstruct_path;
pub use routing::{
    find, plan_route, plan_route_by_name, resolve_location, Goal, RouteOptions, RouteService,
};
pub use solver::ShortestPaths;
