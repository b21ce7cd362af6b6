mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roadroute_cli::args::{parse_coordinate, AlgorithmArg};
use roadroute_cli::logging::{init_logging, LoggingConfig};
use roadroute_cli::output::OutputFormat;
use roadroute_lib::Coordinate;

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network pathfinding utilities")]
struct Cli {
    /// Override the road network file or directory (defaults to $ROADROUTE_NETWORK,
    /// then the platform data directory).
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two points given as X,Y percentages of the map extent.
    Route {
        /// Starting point, e.g. `10,25`.
        #[arg(long = "from", value_parser = parse_coordinate)]
        from: Coordinate,
        /// Destination point, e.g. `90,75`.
        #[arg(long = "to", value_parser = parse_coordinate)]
        to: Coordinate,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t)]
        algorithm: AlgorithmArg,
        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Report the routable node closest to a point.
    Nearest {
        /// Query point, e.g. `50,50`.
        #[arg(long = "at", value_parser = parse_coordinate)]
        at: Coordinate,
    },
    /// Write a binary snapshot of the loaded network.
    Snapshot {
        /// Destination file.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let network = cli.network.as_deref();

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            format,
        } => commands::route::handle_route_command(network, from, to, algorithm, format),
        Command::Nearest { at } => commands::nearest::handle_nearest_command(network, at),
        Command::Snapshot { output } => {
            commands::snapshot::handle_snapshot_command(network, &output)
        }
    }
}
