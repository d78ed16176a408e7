// ABOUTME: Integration tests for the logbook-cli binary
// ABOUTME: Runs local-only commands end to end and checks JSON output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the logbook-cli binary.
//!
//! Every command runs with `--local-only` and provider keys removed, so no
//! test depends on the network.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::Command;

use serde_json::Value;
use tempfile::NamedTempFile;

/// Run the CLI and capture (exit code, stdout, stderr)
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_logbook-cli"))
        .args(args)
        .env_remove("GEMINI_API_KEY")
        .env_remove("GROQ_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    (exit_code, stdout, stderr)
}

fn run_json(args: &[&str]) -> Value {
    let (exit_code, stdout, stderr) = run_cli(args);
    assert_eq!(exit_code, 0, "command failed: {stderr}");
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["food", "workout", "one-rep-max", "recovery", "plateau", "energy", "foods"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_food_command_outputs_json() {
    let value = run_json(&["--local-only", "food", "2 rotis, dal fry, glass of milk"]);

    assert_eq!(value["source"], "local");
    assert_eq!(value["confidence"], "medium");
    assert_eq!(value["data"]["total_calories"], 539);
    assert_eq!(value["data"]["items"].as_array().unwrap().len(), 3);
}

#[test]
fn test_workout_command_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Day 1: Push\nBench Press 4x8\nDay 2: Legs\nBack Squat 5x5\n")
        .unwrap();
    let path = file.path().to_str().unwrap();

    let value = run_json(&["--local-only", "workout", "--file", path]);

    assert_eq!(value["confidence"], "high");
    assert_eq!(value["data"]["days"][1]["exercises"][0]["muscle_group"], "quads");
}

#[test]
fn test_empty_input_fails() {
    let (exit_code, _stdout, stderr) = run_cli(&["--local-only", "food", "   "]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("empty"), "{stderr}");
}

#[test]
fn test_one_rep_max_command() {
    let value = run_json(&["one-rep-max", "--weight", "100", "--reps", "10", "--sets", "3"]);

    assert!((value["one_rep_max"].as_f64().unwrap() - 133.3).abs() < 1e-9);
    assert!((value["volume"].as_f64().unwrap() - 3000.0).abs() < 1e-9);
}

#[test]
fn test_recovery_rejects_out_of_range_rating() {
    let (exit_code, _stdout, _stderr) = run_cli(&[
        "recovery",
        "--sleep-hours",
        "8",
        "--sleep-quality",
        "9",
        "--stress",
        "1",
        "--mood",
        "5",
        "--soreness",
        "1",
        "--energy",
        "5",
    ]);
    assert_ne!(exit_code, 0);
}

#[test]
fn test_foods_command_searches_table() {
    let value = run_json(&["foods", "paneer"]);
    let keys: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|food| food["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["palak paneer", "paneer"]);
}

#[test]
fn test_text_format_is_human_readable() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["--local-only", "--format", "text", "food", "rice"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("source: local"));
    assert!(stdout.contains("Total: 195 kcal"));
}
