//! Common test utilities and fixture helpers.
//!
//! This module provides shared datasets for integration tests along with
//! helpers to write them to temporary JSON and SQLite files.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;
use waymark_lib::{Coordinates, Dataset, Edge, EdgeAddition, Location};

/// Path to the checked-in JSON fixture network.
#[allow(dead_code)]
pub fn fixture_json_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/network.json")
}

/// Build an edge with the given distance, duration and mode.
pub fn edge(a: &str, b: &str, distance: f64, duration: f64, mode: &str) -> Edge {
    Edge {
        endpoint_a: a.to_string(),
        endpoint_b: b.to_string(),
        distance,
        duration,
        mode: mode.to_string(),
        addition: EdgeAddition::default(),
    }
}

/// Build an edge carrying road attributes.
#[allow(dead_code)]
pub fn tagged_edge(a: &str, b: &str, distance: f64, mode: &str, addition: EdgeAddition) -> Edge {
    Edge {
        addition,
        ..edge(a, b, distance, distance, mode)
    }
}

/// Coordinates of a named location in `dataset`.
#[allow(dead_code)]
pub fn coords(dataset: &Dataset, name: &str) -> Coordinates {
    dataset
        .locations
        .iter()
        .find(|l| l.name == name)
        .map(Location::coordinates)
        .unwrap_or_else(|| panic!("location {name} present in fixture"))
}

/// `X(0,0)`, `Y(1,0)`, `Z(2,0)` with car edges `X-Y` (5) and `Y-Z` (3).
pub fn line_dataset() -> Dataset {
    Dataset::new(
        vec![
            Location::new("X", 0.0, 0.0),
            Location::new("Y", 1.0, 0.0),
            Location::new("Z", 2.0, 0.0),
        ],
        vec![
            edge("X", "Y", 5.0, 10.0, "car"),
            edge("Y", "Z", 3.0, 4.0, "car"),
        ],
    )
}

/// A five-location network where every goal has a distinct best route.
///
/// ```text
///   A --1-- B --1-- E
///   |               |
///   4 (scenic)      1
///   |               |
///   C -------9----- D
/// ```
///
/// A-E via B is shortest (2) and simplest (2 hops); A-C-D-E is the only route
/// over the scenic A-C edge.
#[allow(dead_code)]
pub fn mesh_dataset() -> Dataset {
    let scenic = EdgeAddition {
        scenic: true,
        ..EdgeAddition::default()
    };
    let toll = EdgeAddition {
        toll: true,
        highway: true,
        ..EdgeAddition::default()
    };
    Dataset::new(
        vec![
            Location::new("A", 0.0, 0.0),
            Location::new("B", 0.0, 1.0),
            Location::new("C", 1.0, 0.0),
            Location::new("D", 1.0, 2.0),
            Location::new("E", 0.0, 2.0),
        ],
        vec![
            edge("A", "B", 1.0, 30.0, "car"),
            edge("B", "E", 1.0, 30.0, "car"),
            tagged_edge("A", "C", 4.0, "car", scenic),
            Edge {
                duration: 2.0,
                ..tagged_edge("C", "D", 9.0, "car", toll)
            },
            edge("D", "E", 1.0, 1.0, "car"),
        ],
    )
}

/// Temporary directory holding serialized copies of a dataset.
#[allow(dead_code)]
pub struct DatasetFiles {
    _temp_dir: TempDir,
    pub json_path: PathBuf,
    pub sqlite_path: PathBuf,
}

#[allow(dead_code)]
impl DatasetFiles {
    pub fn write(dataset: &Dataset) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let json_path = temp_dir.path().join("network.json");
        let sqlite_path = temp_dir.path().join("network.db");

        let json = serde_json::to_string_pretty(dataset).expect("serialize dataset");
        std::fs::write(&json_path, json).expect("write json dataset");
        write_sqlite(&sqlite_path, dataset);

        Self {
            _temp_dir: temp_dir,
            json_path,
            sqlite_path,
        }
    }

    pub fn dir(&self) -> &Path {
        self._temp_dir.path()
    }
}

fn write_sqlite(path: &Path, dataset: &Dataset) {
    let conn = Connection::open(path).expect("open sqlite dataset");
    conn.execute_batch(
        r#"
        CREATE TABLE Locations (
            name TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL
        );
        CREATE TABLE Edges (
            endpoint_a TEXT NOT NULL,
            endpoint_b TEXT NOT NULL,
            distance REAL NOT NULL,
            duration REAL NOT NULL,
            mode TEXT NOT NULL,
            highway INTEGER,
            toll INTEGER,
            bridge INTEGER,
            hazardous INTEGER,
            scenic INTEGER
        );
        "#,
    )
    .expect("create schema");

    for location in &dataset.locations {
        conn.execute(
            "INSERT INTO Locations (name, latitude, longitude) VALUES (?1, ?2, ?3)",
            params![location.name, location.latitude, location.longitude],
        )
        .expect("insert location");
    }
    for edge in &dataset.edges {
        let a = edge.addition;
        conn.execute(
            "INSERT INTO Edges VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                edge.endpoint_a,
                edge.endpoint_b,
                edge.distance,
                edge.duration,
                edge.mode,
                a.highway as i64,
                a.toll as i64,
                a.bridge as i64,
                a.hazardous as i64,
                a.scenic as i64,
            ],
        )
        .expect("insert edge");
    }
}
