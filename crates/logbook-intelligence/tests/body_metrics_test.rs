// ABOUTME: Unit tests for plateau detection, moving averages, and energy expenditure
// ABOUTME: Exercises the 14-day window boundary and Mifflin-St Jeor validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use logbook_intelligence::{
    calculate_bmr, calculate_tdee, detect_plateau, moving_average, ActivityLevel, Sex,
    WeightSample,
};

fn samples(weights: &[f64]) -> Vec<WeightSample> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    weights
        .iter()
        .enumerate()
        .map(|(i, &weight_kg)| WeightSample {
            date: start + Duration::days(i as i64),
            weight_kg,
        })
        .collect()
}

#[test]
fn test_flat_fourteen_days_is_plateau() {
    let status = detect_plateau(&samples(&[80.0; 14]));
    assert!(status.detected);
    assert_eq!(status.days, 14);
    assert!(status.message.unwrap().contains("14 days"));
}

#[test]
fn test_exact_half_kilo_spread_is_not_plateau() {
    let mut weights = vec![80.0; 14];
    weights[3] = 80.5;
    let status = detect_plateau(&samples(&weights));
    assert!(!status.detected);
    assert_eq!(status.days, 0);
    assert!(status.message.is_none());
}

#[test]
fn test_decimal_half_kilo_spread_is_not_plateau() {
    let mut weights = vec![70.1; 14];
    weights[0] = 70.6;
    assert!(!detect_plateau(&samples(&weights)).detected);
}

#[test]
fn test_fewer_than_fourteen_samples() {
    let status = detect_plateau(&samples(&[80.0; 13]));
    assert!(!status.detected);
    assert_eq!(status.days, 0);
}

#[test]
fn test_only_last_fourteen_samples_count() {
    let mut weights = vec![90.0, 85.0];
    weights.extend([80.0, 80.2, 80.1, 80.3, 80.0, 80.1, 80.2, 80.4, 80.1, 80.0, 80.2, 80.3, 80.1, 80.0]);
    assert!(detect_plateau(&samples(&weights)).detected);
}

#[test]
fn test_moving_average_window() {
    let averages = moving_average(&[1.0, 2.0, 3.0, 4.0], 2);
    assert_eq!(averages, vec![1.0, 1.5, 2.5, 3.5]);
}

#[test]
fn test_moving_average_rounds_to_two_decimals() {
    let averages = moving_average(&[1.0, 1.0, 2.0], 3);
    assert!((averages[2] - 1.33).abs() < 1e-9);
}

#[test]
fn test_moving_average_empty_and_zero_window() {
    assert!(moving_average(&[], 7).is_empty());
    assert_eq!(moving_average(&[2.0, 4.0], 0), vec![2.0, 4.0]);
}

#[test]
fn test_bmr_mifflin_st_jeor() {
    // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
    let male = calculate_bmr(70.0, 175.0, 30, Sex::Male).unwrap();
    assert!((male - 1648.75).abs() < 1e-9);

    let female = calculate_bmr(70.0, 175.0, 30, Sex::Female).unwrap();
    assert!((male - female - 166.0).abs() < 1e-9);
}

#[test]
fn test_bmr_rejects_out_of_range() {
    assert!(calculate_bmr(0.0, 175.0, 30, Sex::Male).is_err());
    assert!(calculate_bmr(70.0, 400.0, 30, Sex::Male).is_err());
    assert!(calculate_bmr(70.0, 175.0, 5, Sex::Female).is_err());
    assert!(calculate_bmr(f64::NAN, 175.0, 30, Sex::Female).is_err());
}

#[test]
fn test_tdee_multipliers() {
    assert!((calculate_tdee(1000.0, ActivityLevel::Sedentary) - 1200.0).abs() < f64::EPSILON);
    assert!((calculate_tdee(1000.0, ActivityLevel::LightlyActive) - 1375.0).abs() < f64::EPSILON);
    assert!((calculate_tdee(1648.75, ActivityLevel::ModeratelyActive) - 2556.0).abs() < f64::EPSILON);
}
