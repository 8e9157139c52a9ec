//! Output formatting for route rendering.
//!
//! Text output goes through the library's renderers; JSON output wraps the
//! result in a small envelope so "no route" is distinguishable from an empty
//! dataset.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use waymark_lib::{Goal, Location, RouteRenderMode, RouteResult};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Compact,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "compact" => Ok(OutputFormat::Compact),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{other}'; expected text, compact or json"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Compact => "compact",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

#[derive(Serialize)]
struct RouteEnvelope<'a> {
    goal: Goal,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a RouteResult>,
}

/// Render a routing outcome; `None` means no qualifying route.
pub fn render_route(
    goal: Goal,
    route: Option<&RouteResult>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let envelope = RouteEnvelope {
                goal,
                found: route.is_some(),
                route,
            };
            let mut json = serde_json::to_string_pretty(&envelope)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text | OutputFormat::Compact => Ok(match route {
            None => format!("No {goal} route found.\n"),
            Some(route) => {
                let mode = if format == OutputFormat::Compact {
                    RouteRenderMode::Compact
                } else {
                    RouteRenderMode::PlainText
                };
                route.render(mode)
            }
        }),
    }
}

/// Render the location list.
pub fn render_locations(locations: &[Location], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(locations)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text | OutputFormat::Compact => {
            let mut buffer = String::new();
            for location in locations {
                buffer.push_str(&format!(
                    "{} ({}, {})\n",
                    location.name, location.latitude, location.longitude
                ));
            }
            Ok(buffer)
        }
    }
}
