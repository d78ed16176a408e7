// ABOUTME: Body-weight trend analysis for plateau detection and smoothing
// ABOUTME: Fourteen-day plateau check and trailing moving averages over weigh-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use logbook_core::constants::analysis::{PLATEAU_RANGE_KG, PLATEAU_WINDOW_DAYS};
use logbook_core::rounding::{round1, round2};
use serde::{Deserialize, Serialize};

// Absorbs float noise so a 0.5 kg spread never reads as 0.4999...
const RANGE_EPSILON: f64 = 1e-9;

/// One dated body-weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Day of the weigh-in
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
}

/// Result of a plateau check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauStatus {
    /// Whether weight has been flat across the window
    pub detected: bool,
    /// Length of the flat window in days (0 when not detected)
    pub days: u32,
    /// Advice shown with a detected plateau
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PlateauStatus {
    const fn not_detected() -> Self {
        Self {
            detected: false,
            days: 0,
            message: None,
        }
    }
}

/// Detect a body-weight plateau over the most recent 14 samples
///
/// Samples must be in chronological order. A plateau means the spread
/// (max - min) of the last 14 weights is strictly below 0.5 kg. Fewer than
/// 14 samples never count as a plateau.
#[must_use]
pub fn detect_plateau(samples: &[WeightSample]) -> PlateauStatus {
    if samples.len() < PLATEAU_WINDOW_DAYS {
        return PlateauStatus::not_detected();
    }

    let recent = &samples[samples.len() - PLATEAU_WINDOW_DAYS..];
    let (min, max) = recent.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, s| {
        (acc.0.min(s.weight_kg), acc.1.max(s.weight_kg))
    });
    let range = max - min;

    if range < PLATEAU_RANGE_KG - RANGE_EPSILON {
        PlateauStatus {
            detected: true,
            days: PLATEAU_WINDOW_DAYS as u32,
            message: Some(format!(
                "Weight has been within a {:.1}kg range for {PLATEAU_WINDOW_DAYS} days. Consider adjusting calories.",
                round1(range)
            )),
        }
    } else {
        PlateauStatus::not_detected()
    }
}

/// Trailing moving average, one output per input
///
/// Early points average over however many values exist so far. Results are
/// rounded to two decimals. A zero window is treated as 1.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            round2(slice.iter().sum::<f64>() / slice.len() as f64)
        })
        .collect()
}
