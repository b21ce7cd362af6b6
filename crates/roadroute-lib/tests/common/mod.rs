//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use roadroute_lib::{NetworkSource, RoadNetwork};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn small_town() -> RoadNetwork {
    RoadNetwork::from_json_path(&fixtures_dir().join("small_town.json")).expect("fixture loads")
}

#[allow(dead_code)]
pub fn square_source() -> NetworkSource {
    NetworkSource::from_path(&fixtures_dir().join("square.json")).expect("fixture parses")
}

/// Sum of straight-line legs along `steps`, in metres.
#[allow(dead_code)]
pub fn leg_sum(network: &RoadNetwork, steps: &[usize]) -> f64 {
    steps
        .windows(2)
        .map(|pair| {
            let a = network.position(pair[0]).expect("known node");
            let b = network.position(pair[1]).expect("known node");
            a.distance_to(&b)
        })
        .sum::<f64>()
        * network.metric_scale()
}
