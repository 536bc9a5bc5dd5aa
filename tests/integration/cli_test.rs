//! Integration tests for the cutreview CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use cutreview::{CutFile, CutId, CutStatus};

use super::helpers::{fixtures_dir, run_cutreview, strip_ansi, temp_fixture};

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().into_owned()
}

fn cutreview() -> Command {
    let mut cmd = Command::cargo_bin("cutreview").expect("binary should build");
    cmd.env("CUTREVIEW_CONFIG", "/nonexistent/cutreview/config.toml")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_cutreview(&["--help"]);

    assert_eq!(exit_code, 0);
    for sub in ["review", "simulate", "analyze", "metrics", "report", "set-status", "config"] {
        assert!(stdout.contains(sub), "help should list {}", sub);
    }
}

/// Snapshot `--help` in the same layout for every command.
fn assert_help_snapshot(name: &str, args: &[&str]) {
    let (stdout, stderr, exit_code) = run_cutreview(args);
    let output = format!(
        "=== cutreview {} ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        args.join(" "),
        exit_code,
        stdout,
        stderr
    );
    insta::assert_snapshot!(name, output.trim_end());
}

#[test]
fn snapshot_cli_help() {
    assert_help_snapshot("cli_help", &["--help"]);
}

#[test]
fn snapshot_cli_help_subcommands() {
    let subcommands = [
        "review",
        "simulate",
        "analyze",
        "metrics",
        "report",
        "set-status",
        "config",
        "completions",
    ];
    for sub in subcommands {
        let name = format!("cli_help_{}", sub.replace('-', "_"));
        assert_help_snapshot(&name, &[sub, "--help"]);
    }
}

#[test]
fn version_flag_prints_package_version() {
    cutreview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (_stdout, _stderr, exit_code) = run_cutreview(&[]);
    assert_eq!(exit_code, 2);
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn metrics_prints_summary() {
    let (stdout, _stderr, exit_code) = run_cutreview(&["metrics", &fixture("sample.json")]);
    let stdout = strip_ansi(&stdout);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Original duration"));
    assert!(stdout.contains("01:00.0"));
    assert!(stdout.contains("00:55.5"));
    assert!(stdout.contains("4.5s (7.5%)"));
}

#[test]
fn metrics_json_is_machine_readable() {
    let output = cutreview()
        .args(["metrics", "--json", &fixture("sample.json")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["original_duration"], 60.0);
    assert_eq!(value["final_duration"], 55.5);
    assert_eq!(value["cuts_count"], 2);
    assert_eq!(value["time_saved"], 4.5);
}

#[test]
fn duration_flag_overrides_file() {
    let output = cutreview()
        .args(["metrics", "--json", "-d", "30", &fixture("sample.json")])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["final_duration"], 25.5);
}

#[test]
fn missing_duration_is_reported() {
    cutreview()
        .args(["metrics", &fixture("no_duration.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No media duration"));

    cutreview()
        .args(["metrics", "-d", "10", &fixture("no_duration.json")])
        .assert()
        .success();
}

#[test]
fn invalid_cut_bounds_are_rejected() {
    cutreview()
        .args(["metrics", &fixture("invalid_bounds.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad"));
}

#[test]
fn nonexistent_cut_file_fails() {
    cutreview()
        .args(["metrics", "/nonexistent/cuts.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load cuts"));
}

// ============================================================================
// Report
// ============================================================================

#[test]
fn report_lists_cuts_by_status() {
    let (stdout, _stderr, exit_code) = run_cutreview(&["report", &fixture("sample.json")]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Cut Review Report"));
    assert!(stdout.contains("Accepted cuts:      2 of 3"));

    let accepted = stdout.find("\nAccepted cuts\n").expect("accepted section");
    let rejected = stdout.find("\nRejected cuts\n").expect("rejected section");
    assert!(accepted < rejected);
    assert!(stdout[accepted..rejected].contains("c1"));
    assert!(stdout[accepted..rejected].contains("c3"));
    assert!(stdout[rejected..].contains("c2"));
}

// ============================================================================
// Set Status
// ============================================================================

#[test]
fn set_status_updates_file_in_place() {
    let (_dir, path) = temp_fixture("sample.json");
    let path_str = path.to_string_lossy().into_owned();

    cutreview()
        .args(["set-status", &path_str, "c1", "rejected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected"));

    let file = CutFile::load(&path).unwrap();
    assert_eq!(file.duration, Some(60.0));
    let set = file.into_set().unwrap();
    assert_eq!(set.get(&CutId::new("c1")).unwrap().status, CutStatus::Rejected);
    assert_eq!(set.get(&CutId::new("c3")).unwrap().status, CutStatus::Accepted);
}

#[test]
fn set_status_unknown_id_leaves_file_untouched() {
    let (_dir, path) = temp_fixture("sample.json");
    let before = std::fs::read_to_string(&path).unwrap();

    cutreview()
        .args(["set-status", &path.to_string_lossy(), "nope", "accepted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn analyze_is_deterministic_per_seed() {
    let run = |seed: &str| {
        cutreview()
            .args(["analyze", "-d", "120", "--seed", seed])
            .output()
            .unwrap()
            .stdout
    };

    let first = run("7");
    assert_eq!(first, run("7"));

    let file = CutFile::parse(&String::from_utf8(first).unwrap()).unwrap();
    assert_eq!(file.duration, Some(120.0));
    let set = file.into_set().unwrap();
    assert!(!set.is_empty());
    assert!(set.iter().all(|c| c.end <= 120.0));
}

#[test]
fn analyze_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("cuts.json");

    cutreview()
        .args(["analyze", "-d", "45", "-o", &out.to_string_lossy()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Detected"));

    let file = CutFile::load(&out).unwrap();
    assert_eq!(file.duration, Some(45.0));
}

#[test]
fn analyze_rejects_non_positive_duration() {
    cutreview()
        .args(["analyze", "-d", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

// ============================================================================
// Simulate
// ============================================================================

#[test]
fn simulate_skips_accepted_cuts_only() {
    let output = cutreview()
        .args(["simulate", "--json", "--frame-ms", "100", &fixture("sample.json")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let jumps = value["jumps"].as_array().unwrap();
    let ids: Vec<&str> = jumps.iter().map(|j| j["cut"].as_str().unwrap()).collect();
    assert_eq!(ids, ["c1", "c3"]);
    assert_eq!(jumps[0]["to"], 4.0);
    assert_eq!(jumps[1]["to"], 22.5);

    let runtime = value["runtime"].as_f64().unwrap();
    assert!(runtime >= 55.5 - 0.01 && runtime <= 55.5 + 0.21, "runtime {}", runtime);
}

#[test]
fn simulate_text_output_lists_skips() {
    let (stdout, _stderr, exit_code) =
        run_cutreview(&["simulate", "--frame-ms", "50", &fixture("sample.json")]);
    let stdout = strip_ansi(&stdout);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("-> 00:04.0"));
    assert!(stdout.contains("-> 00:22.5"));
    assert!(stdout.contains("2 skips"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_init_show_and_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");
    let path_str = path.to_string_lossy().into_owned();

    cutreview()
        .args(["config", "path", "--config", &path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    cutreview()
        .args(["config", "init", "--config", &path_str])
        .assert()
        .success();
    assert!(path.exists());

    // Second init without --force refuses to overwrite
    cutreview()
        .args(["config", "init", "--config", &path_str])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cutreview()
        .args(["config", "show", "--config", &path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("lookahead_secs"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playback]\nframe_interval_ms = 0\n").unwrap();

    cutreview()
        .args(["config", "show", "--config", &path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("frame_interval_ms"));
}

#[test]
fn completions_generate_script() {
    cutreview()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cutreview"));
}
