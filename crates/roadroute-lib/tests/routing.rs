mod common;

use roadroute_lib::{
    plan_route, AStarSearch, Coordinate, Error, Heuristic, RoadModel, RouteAlgorithm,
    RouteRequest,
};

fn request(start: (f64, f64), goal: (f64, f64)) -> RouteRequest {
    RouteRequest::a_star(
        Coordinate::new(start.0, start.1).expect("valid start"),
        Coordinate::new(goal.0, goal.1).expect("valid goal"),
    )
}

#[test]
fn route_runs_from_start_to_goal() {
    let network = common::small_town();
    let plan = plan_route(&network, &request((0.0, 0.0), (50.0, 50.0))).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::AStar);
    assert_eq!(plan.steps.first(), Some(&plan.start));
    assert_eq!(network.distance(*plan.steps.last().unwrap(), plan.goal), 0.0);
    assert_eq!(network.node(plan.goal).unwrap().id, 9);
    assert_eq!(plan.hop_count(), 4);
    assert!((plan.distance - 400.0).abs() < 1e-9);
}

#[test]
fn distance_matches_sum_of_legs() {
    let network = common::small_town();
    let plan = plan_route(&network, &request((0.0, 50.0), (50.0, 0.0))).expect("route exists");

    let expected = common::leg_sum(&network, &plan.steps);
    assert!((plan.distance - expected).abs() < 1e-9);
}

#[test]
fn footway_shortcut_is_ignored() {
    let network = common::small_town();
    let plan = plan_route(&network, &request((0.0, 0.0), (25.0, 25.0))).expect("route exists");

    // Node 5 sits on the diagonal footway, but only the streets may be used.
    assert_eq!(network.node(plan.goal).unwrap().id, 5);
    assert_eq!(plan.hop_count(), 2);
    assert!((plan.distance - 200.0).abs() < 1e-9);
}

#[test]
fn same_start_and_goal_yields_single_node() {
    let network = common::small_town();
    let plan = plan_route(&network, &request((25.0, 25.0), (24.0, 26.0))).expect("route exists");

    assert_eq!(plan.steps, vec![plan.start]);
    assert_eq!(plan.distance, 0.0);
}

#[test]
fn disconnected_goal_reports_no_route() {
    let network = common::small_town();
    let error = plan_route(&network, &request((0.0, 0.0), (100.0, 0.0))).expect_err("island");

    assert!(matches!(error, Error::RouteNotFound { .. }));
    assert!(format!("{error}").contains("no route found"));
}

#[test]
fn dijkstra_agrees_with_a_star() {
    let network = common::small_town();
    let a_star = plan_route(&network, &request((0.0, 50.0), (50.0, 0.0))).expect("a*");
    let dijkstra = plan_route(
        &network,
        &request((0.0, 50.0), (50.0, 0.0)).with_algorithm(RouteAlgorithm::Dijkstra),
    )
    .expect("dijkstra");

    assert_eq!(dijkstra.algorithm, RouteAlgorithm::Dijkstra);
    assert!((a_star.distance - dijkstra.distance).abs() < 1e-9);
    assert!(a_star.expanded <= dijkstra.expanded);
}

#[test]
fn repeated_search_is_deterministic() {
    let network = common::small_town();
    let mut search = AStarSearch::new(&network, 0.0, 50.0, 50.0, 0.0).expect("endpoints");

    let first = search.search().expect("route exists");
    let second = search.search().expect("route exists");
    assert_eq!(first, second);

    let fresh = AStarSearch::new(&network, 0.0, 50.0, 50.0, 0.0)
        .expect("endpoints")
        .search()
        .expect("route exists");
    assert_eq!(first, fresh);
}

#[test]
fn heuristic_never_overestimates() {
    let network = common::small_town();
    let goal = network.closest_node(0.5, 0.5).expect("goal");
    let search = AStarSearch::between(&network, goal, goal);

    for node in 0..network.len() {
        let exact = AStarSearch::between(&network, node, goal)
            .with_heuristic(Heuristic::Zero)
            .search();
        let Ok(exact) = exact else {
            continue;
        };
        let estimate = AStarSearch::between(&network, node, goal).calculate_h_value(node);
        assert!(estimate <= exact.raw_distance + 1e-12, "node {node}");
    }
    assert_eq!(search.calculate_h_value(goal), 0.0);
}

#[test]
fn out_of_range_coordinate_is_rejected() {
    let error = Coordinate::new(120.0, 10.0).expect_err("x too large");
    assert!(format!("{error}").contains("outside the 0-100 range"));
}
