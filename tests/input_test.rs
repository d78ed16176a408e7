// ABOUTME: Integration tests for CLI input handling
// ABOUTME: Covers text source selection, file reading, and weigh-in log parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use pierre_logbook::errors::ErrorCode;
use pierre_logbook::input::{parse_weigh_ins, read_text_input, read_weigh_ins, TextSource};
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// Text sources
// ============================================================================

#[test]
fn test_source_selection() {
    assert_eq!(
        TextSource::from_args(Some("2 rotis".to_owned()), None).unwrap(),
        TextSource::Inline("2 rotis".to_owned())
    );
    assert_eq!(
        TextSource::from_args(Some("-".to_owned()), None).unwrap(),
        TextSource::Stdin
    );
    assert_eq!(
        TextSource::from_args(None, Some(PathBuf::from("meal.txt"))).unwrap(),
        TextSource::File(PathBuf::from("meal.txt"))
    );
}

#[test]
fn test_source_requires_exactly_one_input() {
    let neither = TextSource::from_args(None, None).unwrap_err();
    assert_eq!(neither.code, ErrorCode::InvalidInput);

    let both =
        TextSource::from_args(Some("rice".to_owned()), Some(PathBuf::from("x"))).unwrap_err();
    assert_eq!(both.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_read_inline_and_file() {
    let text = read_text_input(Some("dal fry".to_owned()), None)
        .await
        .unwrap();
    assert_eq!(text, "dal fry");

    let file = temp_file("Day 1: Push\nBench Press 4x8\n");
    let text = read_text_input(None, Some(file.path().to_path_buf()))
        .await
        .unwrap();
    assert!(text.starts_with("Day 1: Push"));
}

#[tokio::test]
async fn test_blank_input_is_rejected() {
    let error = read_text_input(Some("   ".to_owned()), None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let file = temp_file("\n\n");
    let error = read_text_input(None, Some(file.path().to_path_buf()))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let error = read_text_input(None, Some(PathBuf::from("/nonexistent/meal.txt")))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("/nonexistent/meal.txt"));
}

// ============================================================================
// Weigh-in logs
// ============================================================================

#[test]
fn test_parse_weigh_ins() {
    let samples = parse_weigh_ins(
        "# morning weigh-ins\n2025-01-01,80.4\n\n 2025-01-02 , 80.1 \n2025-01-03,79.9\n",
    )
    .unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert!((samples[0].weight_kg - 80.4).abs() < f64::EPSILON);
    assert_eq!(samples[1].date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
}

#[test]
fn test_malformed_weigh_in_names_the_line() {
    for bad in ["2025-01-01;80", "01/02/2025,80", "2025-01-01,heavy", "2025-01-01,0"] {
        let error = parse_weigh_ins(&format!("2024-12-31,81\n{bad}")).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.starts_with("line 2:"), "{}", error.message);
    }
}

#[test]
fn test_empty_log_has_no_samples() {
    assert!(parse_weigh_ins("").unwrap().is_empty());
    assert!(parse_weigh_ins("# nothing yet\n").unwrap().is_empty());
}

#[tokio::test]
async fn test_read_weigh_ins_from_file() {
    let file = temp_file("2025-03-01,72.0\n2025-03-02,71.8\n");
    let samples = read_weigh_ins(file.path()).await.unwrap();
    assert_eq!(samples.len(), 2);
}
