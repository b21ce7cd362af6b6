use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/small_town.json")
        .canonicalize()
        .expect("fixture network present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("roadroute-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("ROADROUTE_NETWORK")
        .env_remove("LOG_FORMAT");
    cmd
}

fn route_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--network").arg(fixture_path()).arg("route");
    cmd
}

#[test]
fn route_prints_text_summary() {
    route_command()
        .args(["--from", "0,0", "--to", "50,50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: 1 -> 9 (4 hops, 400.0 m, algorithm: a-star)",
        ))
        .stdout(predicate::str::contains("node 9 at (50.00, 50.00)"));
}

#[test]
fn route_supports_json_output() {
    let output = route_command()
        .args(["--from", "0,0", "--to", "50,50", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["algorithm"], "a-star");
    assert_eq!(value["hops"], 4);
    assert_eq!(value["start"]["id"], 1);
    assert_eq!(value["goal"]["id"], 9);
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(5));
}

#[test]
fn route_supports_dijkstra_and_note_output() {
    route_command()
        .args(["--from", "0,0", "--to", "50,50"])
        .args(["--algorithm", "dijkstra", "--format", "note"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 -> "))
        .stdout(predicate::str::ends_with(" -> 9 (400 m)\n"));
}

#[test]
fn disconnected_route_fails() {
    route_command()
        .args(["--from", "0,0", "--to", "100,25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));
}

#[test]
fn out_of_range_coordinate_is_rejected_by_parser() {
    route_command()
        .args(["--from", "0,0", "--to", "50,120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the 0-100 range"));
}

#[test]
fn missing_network_fails() {
    let dir = tempdir().expect("temp dir");
    cli()
        .arg("--network")
        .arg(dir.path().join("absent.json"))
        .args(["route", "--from", "0,0", "--to", "50,50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to locate the road network"));
}

#[test]
fn network_can_come_from_environment() {
    cli()
        .env("ROADROUTE_NETWORK", fixture_path())
        .args(["route", "--from", "0,0", "--to", "50,0", "--format", "note"])
        .assert()
        .success()
        .stdout("1 -> 2 -> 3 (200 m)\n");
}

#[test]
fn nearest_skips_footway_only_nodes() {
    cli()
        .arg("--network")
        .arg(fixture_path())
        .args(["nearest", "--at", "74,74"])
        .assert()
        .success()
        .stdout("Closest node: 9 at (50.00, 50.00)\n");
}

#[test]
fn snapshot_round_trips_through_cli() {
    let dir = tempdir().expect("temp dir");
    let snapshot = dir.path().join("town.bin");

    cli()
        .arg("--network")
        .arg(fixture_path())
        .arg("snapshot")
        .arg("--output")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot with 12 nodes"));

    cli()
        .arg("--network")
        .arg(&snapshot)
        .args(["route", "--from", "0,0", "--to", "50,50", "--format", "note"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("(400 m)\n"));
}
