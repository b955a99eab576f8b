use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn orbit_prints_reference_frame() {
    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args(["--at", "2000-01-01T12:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("instant         2000-01-01T12:00:00Z"))
        .stdout(predicate::str::contains("earth angle     1.751869 rad"))
        .stdout(predicate::str::contains("earth rotation  4.894961 rad"));
}

#[test]
fn orbit_json_is_machine_readable() {
    let output = Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args(["--at", "2024-03-20T03:06:00+00:00", "--json"])
        .output()
        .expect("run orbit");
    assert!(output.status.success());
    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json frame");
    let earth = frame["angles"]["earth"].as_f64().expect("earth angle");
    assert!((0.0..std::f64::consts::TAU).contains(&earth));
    assert_eq!(frame["earth_position"].as_array().map(Vec::len), Some(3));
}

#[test]
fn orbit_writes_csv_and_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out/orbits.csv");
    let png_path = dir.path().join("out/orbits.png");

    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args([
            "--at",
            "2025-10-17T21:00:00Z",
            "--csv",
            csv_path.to_str().unwrap(),
            "--png",
            png_path.to_str().unwrap(),
            "--size",
            "300",
        ])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&csv_path).expect("csv reader");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["body", "index", "angle_rad", "x", "z"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 201 + 51);
    assert_eq!(rows.iter().filter(|r| &r[0] == "moon").count(), 51);

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn orbit_respects_config_segments() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("skyview.yaml");
    fs::write(
        &config_path,
        "orbits:\n  earth_path_segments: 8\n  moon_path_segments: 4\n",
    )
    .unwrap();

    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args([
            "--at",
            "2025-01-01T00:00:00Z",
            "--config",
            config_path.to_str().unwrap(),
            "--csv",
            "-",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("earth,8,"))
        .stdout(predicate::str::contains("moon,4,"))
        .stdout(predicate::str::contains("earth,9,").not());
}

#[test]
fn orbit_rejects_invalid_eccentricity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("bad.toml");
    fs::write(
        &config_path,
        "[orbits.moon]\nsemi_major_axis = 4.0\neccentricity = 1.5\n",
    )
    .unwrap();

    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("eccentricity"));
}

#[test]
fn orbit_rejects_malformed_instant() {
    Command::cargo_bin("orbit")
        .expect("orbit bin")
        .args(["--at", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RFC 3339"));
}

#[test]
fn ask_dry_run_routes_without_network() {
    Command::cargo_bin("ask")
        .expect("ask bin")
        .args(["--dry-run", "what's the weather in Paris?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""intent":"weather_query""#))
        .stdout(predicate::str::contains(r#""city":"PARIS""#));

    Command::cargo_bin("ask")
        .expect("ask bin")
        .args(["--dry-run", "--city", "Pune", "what should I wear?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""intent":"lifestyle_suggestion""#))
        .stdout(predicate::str::contains(r#""city":"Pune""#));
}

#[test]
fn ask_chat_needs_no_city() {
    Command::cargo_bin("ask")
        .expect("ask bin")
        .arg("hello there")
        .assert()
        .success()
        .stdout(predicate::str::contains("weather and outfit questions"));
}

#[test]
fn ask_transcript_records_both_turns() {
    Command::cargo_bin("ask")
        .expect("ask bin")
        .args(["--transcript", "hello there"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"role":"user","content":"hello there"}"#,
        ))
        .stdout(predicate::str::contains(r#""role":"assistant""#));
}

#[test]
fn weekly_rejects_unknown_view() {
    Command::cargo_bin("weekly")
        .expect("weekly bin")
        .args(["Mumbai", "--view", "rain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown weekly view `rain`"))
        .stderr(predicate::str::contains("TEMP, WIND or HUMIDITY"));
}

#[test]
fn weekly_needs_a_city() {
    Command::cargo_bin("weekly")
        .expect("weekly bin")
        .args(["--view", "wind"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no city given"));
}
