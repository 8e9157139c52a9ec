use std::fmt::Write;

use serde::Serialize;
use tracing::debug;

use crate::dataset::{Coordinates, Edge, EdgeAddition};
use crate::error::RouteError;
use crate::index::LocationIndex;

/// Presentation style for turning a [`RouteResult`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Compact,
}

/// One directly traversed edge of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub origin_name: String,
    pub destination_name: String,
    pub distance: f64,
    pub duration: f64,
    pub mode: String,
    pub addition: EdgeAddition,
}

/// Ordered steps forming one continuous route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segment {
    pub steps: Vec<RouteStep>,
}

impl Segment {
    pub fn hop_count(&self) -> usize {
        self.steps.len()
    }

    pub fn total_distance(&self) -> f64 {
        self.steps.iter().map(|step| step.distance).sum()
    }

    pub fn total_duration(&self) -> f64 {
        self.steps.iter().map(|step| step.duration).sum()
    }
}

/// Aggregate figures for a result.
///
/// Routing leaves these at zero; consumers derive totals from the segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance: f64,
    pub duration: f64,
}

/// Structured route returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteResult {
    pub segments: Vec<Segment>,
    pub summary: RouteSummary,
}

impl RouteResult {
    /// Result for a dataset with nothing to route over.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_segment(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
            summary: RouteSummary::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Steps across every segment, in travel order.
    pub fn steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.segments.iter().flat_map(|segment| segment.steps.iter())
    }

    /// Render the result using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if self.is_empty() {
            let _ = writeln!(buffer, "Route: <empty dataset>");
            return buffer;
        }

        for segment in &self.segments {
            let _ = writeln!(
                buffer,
                "Route: {} hops, distance {}, duration {}",
                segment.hop_count(),
                segment.total_distance(),
                segment.total_duration()
            );
            for (index, step) in segment.steps.iter().enumerate() {
                let tags = step
                    .addition
                    .tags()
                    .map(|tag| tag.as_str())
                    .collect::<Vec<_>>();
                let _ = write!(
                    buffer,
                    "{:>3}: {} -> {} [{}] distance {}, duration {}",
                    index + 1,
                    step.origin_name,
                    step.destination_name,
                    step.mode,
                    step.distance,
                    step.duration
                );
                if !tags.is_empty() {
                    let _ = write!(buffer, " ({})", tags.join(", "));
                }
                buffer.push('\n');
            }
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let mut names: Vec<&str> = Vec::new();
        for step in self.steps() {
            if names.is_empty() {
                names.push(&step.origin_name);
            }
            names.push(&step.destination_name);
        }
        format!("{}\n", names.join(" -> "))
    }
}

/// Turn a location path into route steps, one per consecutive pair.
///
/// Every hop must be backed by an edge joining the two names in either
/// orientation; the first listed match is used. A missing edge fails the
/// whole assembly.
pub fn assemble_route(
    index: &LocationIndex<'_>,
    edges: &[Edge],
    path: &[usize],
) -> Result<Segment, RouteError> {
    let mut steps = Vec::with_capacity(path.len().saturating_sub(1));

    for pair in path.windows(2) {
        let (Some(from), Some(to)) = (index.location(pair[0]), index.location(pair[1])) else {
            return Err(RouteError::MissingEdge {
                from: pair[0].to_string(),
                to: pair[1].to_string(),
            });
        };

        let Some(edge) = edges.iter().find(|e| e.connects(&from.name, &to.name)) else {
            return Err(RouteError::MissingEdge {
                from: from.name.clone(),
                to: to.name.clone(),
            });
        };

        steps.push(RouteStep {
            origin: from.coordinates(),
            destination: to.coordinates(),
            origin_name: from.name.clone(),
            destination_name: to.name.clone(),
            distance: edge.distance,
            duration: edge.duration,
            mode: edge.mode.clone(),
            addition: edge.addition,
        });
    }

    debug!(hops = steps.len(), "assembled route segment");
    Ok(Segment { steps })
}
