//! Route command handler for computing paths between locations.

use std::path::Path;

use anyhow::{Context, Result};

use waymark_cli::output::{render_route, OutputFormat};
use waymark_lib::{
    plan_route, resolve_location, ConstraintMatch, Coordinates, Dataset, Goal, RoadTag,
    RouteOptions,
};

use super::load_network;

/// One end of a route, given either by name or by coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Name(String),
    Coordinates(Coordinates),
}

impl Endpoint {
    fn resolve(&self, dataset: &Dataset) -> Result<Coordinates> {
        match self {
            Endpoint::Name(name) => Ok(resolve_location(dataset, name)?),
            Endpoint::Coordinates(coordinates) => Ok(*coordinates),
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting point.
    pub from: Endpoint,
    /// Destination point.
    pub to: Endpoint,
    /// Optimization goal.
    pub goal: Goal,
    /// Acceptable travel modes.
    pub modes: Vec<String>,
    /// Acceptable road constraint tags.
    pub constraints: Vec<String>,
    /// Require every used mode and tag to be requested.
    pub strict_constraints: bool,
}

impl RouteCommandArgs {
    /// Convert CLI args to library route options.
    ///
    /// Every constraint must name a known road tag, in any case.
    pub fn to_options(&self) -> Result<RouteOptions> {
        let tags = self
            .constraints
            .iter()
            .map(|value| value.parse::<RoadTag>())
            .collect::<waymark_lib::Result<Vec<_>>>()
            .context("invalid --constraint value")?;
        let matching = if self.strict_constraints {
            ConstraintMatch::Containment
        } else {
            ConstraintMatch::Overlap
        };
        Ok(RouteOptions::new(self.goal)
            .with_modes(self.modes.iter().cloned())
            .with_constraints(tags.iter().map(|tag| tag.as_str()))
            .with_matching(matching))
    }
}

/// Handle the route subcommand.
///
/// Prints the route (or a "no route" notice) and returns whether one was found.
pub fn handle_route_command(
    dataset_path: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<bool> {
    let options = args.to_options()?;
    let dataset = load_network(dataset_path)?;
    let origin = args.from.resolve(&dataset)?;
    let destination = args.to.resolve(&dataset)?;

    let route = match plan_route(&dataset, origin, destination, &options) {
        Ok(route) => Some(route),
        Err(cause) => {
            tracing::warn!(%cause, goal = %options.goal, "no route");
            None
        }
    };

    print!("{}", render_route(options.goal, route.as_ref(), format)?);
    Ok(route.is_some())
}
