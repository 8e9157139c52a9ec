use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Waymark library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when the dataset file extension maps to no known loader.
    #[error("unsupported dataset format at {path}; expected .json, .db, .sqlite or .sqlite3")]
    UnsupportedDataset { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default dataset")]
    ProjectDirsUnavailable,

    /// Raised when a location name could not be found in the dataset.
    #[error("unknown location name: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a `lat,lon` pair could not be parsed.
    #[error("invalid coordinates '{value}'; expected 'latitude,longitude'")]
    InvalidCoordinates { value: String },

    /// Raised when a route goal name is not recognised.
    #[error("unknown route goal '{value}'")]
    InvalidGoal { value: String },

    /// Raised when a road constraint tag is not recognised.
    #[error("unknown road constraint '{value}'")]
    InvalidRoadTag { value: String },

    /// The routing pipeline did not produce an acceptable route.
    #[error(transparent)]
    NoRoute(#[from] RouteError),

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON dataset parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Reasons a routing request degrades to "no route".
///
/// The public [`find`](crate::find) contract collapses all of these into
/// `None`; they stay distinct here for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Origin coordinates match no location in the dataset.
    #[error("origin does not match any known location")]
    UnknownOrigin,

    /// Destination coordinates match no location in the dataset.
    #[error("destination does not match any known location")]
    UnknownDestination,

    /// Origin and destination sit in disconnected components for the goal.
    #[error("no route found between {origin} and {destination}")]
    Unreachable { origin: String, destination: String },

    /// A reconstructed hop has no direct edge backing it.
    #[error("no edge connects {from} and {to}")]
    MissingEdge { from: String, to: String },

    /// A route was assembled but its modes or road tags fail the request.
    #[error("route rejected by mode/constraint filter")]
    Rejected,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
