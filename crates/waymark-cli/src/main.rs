mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::locations::handle_locations_command;
use commands::route::{handle_route_command, Endpoint, RouteCommandArgs};
use waymark_cli::output::OutputFormat;
use waymark_lib::{Coordinates, Goal};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-goal route planner over small location networks")]
struct Cli {
    /// Dataset file (.json, .db, .sqlite). Falls back to $WAYMARK_DATASET.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format: text, compact or json.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two locations.
    Route(RouteArgs),
    /// List locations in the dataset.
    Locations {
        /// Only show names similar to this one.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Starting location name.
    #[arg(long, conflicts_with = "from_coords", required_unless_present = "from_coords")]
    from: Option<String>,
    /// Starting coordinates as `lat,lon`.
    #[arg(long, allow_hyphen_values = true)]
    from_coords: Option<Coordinates>,
    /// Destination location name.
    #[arg(long, conflicts_with = "to_coords", required_unless_present = "to_coords")]
    to: Option<String>,
    /// Destination coordinates as `lat,lon`.
    #[arg(long, allow_hyphen_values = true)]
    to_coords: Option<Coordinates>,
    /// Optimization goal: shortest, fastest, simplest, most-scenic, cheapest, safest.
    #[arg(long, default_value = "shortest")]
    goal: Goal,
    /// Acceptable travel mode (repeatable).
    #[arg(long = "mode")]
    modes: Vec<String>,
    /// Acceptable road constraint tag, e.g. TOLL or SCENIC (repeatable).
    #[arg(long = "constraint")]
    constraints: Vec<String>,
    /// Reject routes using any mode or tag that was not requested.
    #[arg(long)]
    strict_constraints: bool,
}

impl RouteArgs {
    fn into_command_args(self) -> RouteCommandArgs {
        RouteCommandArgs {
            from: endpoint(self.from, self.from_coords),
            to: endpoint(self.to, self.to_coords),
            goal: self.goal,
            modes: self.modes,
            constraints: self.constraints,
            strict_constraints: self.strict_constraints,
        }
    }
}

fn endpoint(name: Option<String>, coordinates: Option<Coordinates>) -> Endpoint {
    // clap guarantees exactly one of the pair is present.
    match (name, coordinates) {
        (_, Some(coordinates)) => Endpoint::Coordinates(coordinates),
        (name, None) => Endpoint::Name(name.unwrap_or_default()),
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    match cli.command {
        Command::Route(args) => {
            let found = handle_route_command(dataset, cli.format, &args.into_command_args())?;
            Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Locations { search } => {
            handle_locations_command(dataset, cli.format, search.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
