//! Location/edge dataset types and the loaders that supply them.
//!
//! Routing consumes two flat lists, locations and edges, retrieved in full
//! before each request through a [`DatasetSource`]. The library never mutates
//! or persists them.

use std::collections::HashSet;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::RoadTag;

/// Environment variable that overrides the default dataset location.
pub const DATASET_ENV_VAR: &str = "WAYMARK_DATASET";

/// Default filename for the dataset inside the platform data directory.
const DATASET_FILENAME: &str = "network.json";

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parse a `latitude,longitude` pair.
    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinates {
            value: value.to_string(),
        };
        let (lat, lon) = value.split_once(',').ok_or_else(invalid)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid());
        }
        Ok(Self::new(latitude, longitude))
    }
}

/// A named point in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Road attributes carried by an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeAddition {
    pub highway: bool,
    pub toll: bool,
    pub bridge: bool,
    pub hazardous: bool,
    pub scenic: bool,
}

impl EdgeAddition {
    /// Whether the attribute backing `tag` is set.
    pub fn has(&self, tag: RoadTag) -> bool {
        match tag {
            RoadTag::Highway => self.highway,
            RoadTag::Toll => self.toll,
            RoadTag::Bridge => self.bridge,
            RoadTag::Hazardous => self.hazardous,
            RoadTag::Scenic => self.scenic,
        }
    }

    /// Tags whose attribute is set, in [`RoadTag::ALL`] order.
    pub fn tags(&self) -> impl Iterator<Item = RoadTag> + '_ {
        RoadTag::ALL.into_iter().filter(|tag| self.has(*tag))
    }
}

/// Undirected connection between two locations, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "endpointA")]
    pub endpoint_a: String,
    #[serde(rename = "endpointB")]
    pub endpoint_b: String,
    pub distance: f64,
    pub duration: f64,
    pub mode: String,
    #[serde(default)]
    pub addition: EdgeAddition,
}

impl Edge {
    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.endpoint_a == a && self.endpoint_b == b)
            || (self.endpoint_a == b && self.endpoint_b == a)
    }
}

/// Snapshot of the network used for a single routing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Dataset {
    pub fn new(locations: Vec<Location>, edges: Vec<Edge>) -> Self {
        Self { locations, edges }
    }

    /// True when there is nothing to route over: no locations or no edges.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() || self.edges.is_empty()
    }

    /// Report edges that routing will ignore or shadow.
    ///
    /// Edges naming an unknown location, self-loops, and repeated unordered
    /// pairs are logged as warnings. Returns the number of issues found.
    pub fn validate(&self) -> usize {
        let names: HashSet<&str> = self.locations.iter().map(|l| l.name.as_str()).collect();
        let mut pairs: HashSet<(&str, &str)> = HashSet::new();
        let mut issues = 0;

        for edge in &self.edges {
            let a = edge.endpoint_a.as_str();
            let b = edge.endpoint_b.as_str();

            if !names.contains(a) || !names.contains(b) {
                warn!(endpoint_a = a, endpoint_b = b, "edge references unknown location");
                issues += 1;
                continue;
            }
            if a == b {
                warn!(endpoint = a, "edge is a self-loop");
                issues += 1;
                continue;
            }
            let key = if a <= b { (a, b) } else { (b, a) };
            if !pairs.insert(key) {
                warn!(endpoint_a = a, endpoint_b = b, "duplicate edge for location pair");
                issues += 1;
            }
        }

        issues
    }
}

/// Supplier of the full location/edge lists.
pub trait DatasetSource {
    /// Retrieve the complete dataset.
    fn load(&self) -> Result<Dataset>;
}

impl DatasetSource for Dataset {
    fn load(&self) -> Result<Dataset> {
        Ok(self.clone())
    }
}

/// JSON file with top-level `locations` and `edges` arrays.
#[derive(Debug, Clone)]
pub struct JsonDataset {
    pub path: PathBuf,
}

impl JsonDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonDataset {
    fn load(&self) -> Result<Dataset> {
        let contents = std::fs::read_to_string(&self.path)?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            locations = dataset.locations.len(),
            edges = dataset.edges.len(),
            "loaded JSON dataset"
        );
        Ok(dataset)
    }
}

/// SQLite database with `Locations` and `Edges` tables.
#[derive(Debug, Clone)]
pub struct SqliteDataset {
    pub path: PathBuf,
}

impl SqliteDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for SqliteDataset {
    fn load(&self) -> Result<Dataset> {
        let connection = Connection::open(&self.path)?;
        let locations = load_locations(&connection)?;
        let edges = load_edges(&connection)?;
        debug!(
            path = %self.path.display(),
            locations = locations.len(),
            edges = edges.len(),
            "loaded SQLite dataset"
        );
        Ok(Dataset { locations, edges })
    }
}

fn load_locations(connection: &Connection) -> Result<Vec<Location>> {
    // rowid keeps the insertion order, which decides first-match lookups.
    let mut stmt =
        connection.prepare("SELECT name, latitude, longitude FROM Locations ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| {
        Ok(Location {
            name: row.get(0)?,
            latitude: row.get(1)?,
            longitude: row.get(2)?,
        })
    })?;

    let mut locations = Vec::new();
    for entry in rows {
        locations.push(entry?);
    }
    Ok(locations)
}

fn load_edges(connection: &Connection) -> Result<Vec<Edge>> {
    let mut stmt = connection.prepare(
        "SELECT endpoint_a, endpoint_b, distance, duration, mode, \
         highway, toll, bridge, hazardous, scenic FROM Edges ORDER BY rowid",
    )?;
    let rows = stmt.query_map([], row_to_edge)?;

    let mut edges = Vec::new();
    for entry in rows {
        edges.push(entry?);
    }
    Ok(edges)
}

fn row_to_edge(row: &Row<'_>) -> rusqlite::Result<Edge> {
    let flag = |idx: usize| -> rusqlite::Result<bool> {
        Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or(0) != 0)
    };

    Ok(Edge {
        endpoint_a: row.get(0)?,
        endpoint_b: row.get(1)?,
        distance: row.get(2)?,
        duration: row.get(3)?,
        mode: row.get(4)?,
        addition: EdgeAddition {
            highway: flag(5)?,
            toll: flag(6)?,
            bridge: flag(7)?,
            hazardous: flag(8)?,
            scenic: flag(9)?,
        },
    })
}

/// Load a dataset, choosing the loader from the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => JsonDataset::new(path).load(),
        Some("db" | "sqlite" | "sqlite3") => SqliteDataset::new(path).load(),
        _ => Err(Error::UnsupportedDataset {
            path: path.to_path_buf(),
        }),
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "waymark", "waymark").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve which dataset file to use.
///
/// Precedence: the explicit path, then [`DATASET_ENV_VAR`], then
/// [`default_dataset_path`]. The resolved file must exist.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(DATASET_ENV_VAR) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => default_dataset_path()?,
        },
    };

    if !path.exists() {
        return Err(Error::DatasetNotFound { path });
    }
    debug!(path = %path.display(), "resolved dataset path");
    Ok(path)
}
