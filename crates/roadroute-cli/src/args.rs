//! Argument types and parsers for the CLI.

use clap::ValueEnum;
use roadroute_lib::{Coordinate, RouteAlgorithm};

/// Algorithm selection exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    AStar,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

/// Parse an `X,Y` percentage pair such as `12.5,80`.
pub fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x value '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y value '{}'", y.trim()))?;
    Coordinate::new(x, y).map_err(|error| error.to_string())
}
