mod common;

use roadroute_lib::{AStarSearch, RoadNetwork};

#[test]
fn diagonal_beats_perimeter() {
    let network = RoadNetwork::from_source(&common::square_source()).expect("valid source");
    let mut search = AStarSearch::new(&network, 0.0, 0.0, 100.0, 100.0).expect("endpoints");
    let route = search.search().expect("route exists");

    let ids: Vec<_> = route
        .nodes
        .iter()
        .map(|&node| network.node(node).unwrap().id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert!((route.distance - 100.0 * 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn perimeter_used_without_diagonal() {
    let mut source = common::square_source();
    source.roads.retain(|road| road.id != 105);
    let network = RoadNetwork::from_source(&source).expect("valid source");

    let route = AStarSearch::new(&network, 0.0, 0.0, 100.0, 100.0)
        .expect("endpoints")
        .search()
        .expect("route exists");

    assert_eq!(route.hop_count(), 2);
    assert!((route.distance - 200.0).abs() < 1e-9);
    let first = network.node(route.nodes[0]).unwrap().id;
    let last = network.node(route.nodes[2]).unwrap().id;
    assert_eq!((first, last), (1, 3));
}
