// ABOUTME: Daily recovery score from sleep and subjective wellness ratings
// ABOUTME: Weighted 0-100 score over six normalized sub-scores plus a category label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Calculator Module
//!
//! Combines last night's sleep with five 1-5 wellness ratings into a single
//! readiness score. Every sub-score is normalized to 0-100 before weighting,
//! so the best possible check-in scores 100 and the worst scores 0.
//!
//! # Scientific References
//!
//! - Hooper, S.L., & Mackinnon, L.T. (1995). Monitoring overtraining in athletes.
//!   *Sports Medicine*, 20(5), 321-327. <https://doi.org/10.2165/00007256-199520050-00003>
//!
//! - Saw, A.E., et al. (2016). Monitoring the athlete training response: subjective
//!   self-reported measures trump commonly used objective measures.
//!   *British Journal of Sports Medicine*, 50(5), 281-291.
//!   <https://doi.org/10.1136/bjsports-2015-094758>

use logbook_core::constants::analysis::SLEEP_TARGET_HOURS;
use logbook_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::RangeInclusive;

/// Accepted range for every subjective rating
const RATING_RANGE: RangeInclusive<u8> = 1..=5;

// Sub-score weights; they sum to exactly 1.0
const SLEEP_HOURS_WEIGHT: f64 = 0.25;
const SLEEP_QUALITY_WEIGHT: f64 = 0.15;
const STRESS_WEIGHT: f64 = 0.20;
const MOOD_WEIGHT: f64 = 0.15;
const SORENESS_WEIGHT: f64 = 0.10;
const ENERGY_WEIGHT: f64 = 0.15;

/// Morning check-in used for the recovery score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryInputs {
    /// Hours slept
    pub sleep_hours: f64,
    /// Sleep quality, 1 (worst) to 5 (best)
    pub sleep_quality: u8,
    /// Stress, 1 (lowest) to 5 (highest)
    pub stress_level: u8,
    /// Mood, 1 (worst) to 5 (best)
    pub mood: u8,
    /// Muscle soreness, 1 (none) to 5 (severe)
    pub soreness: u8,
    /// Energy, 1 (lowest) to 5 (highest)
    pub energy_level: u8,
}

/// Recovery category label for a score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryCategory {
    /// 80 and above
    Excellent,
    /// 65 to 79
    Good,
    /// 50 to 64
    Moderate,
    /// 35 to 49
    Poor,
    /// Below 35
    VeryPoor,
}

impl Display for RecoveryCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        };
        f.write_str(label)
    }
}

/// Recovery score calculator
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Calculate the 0-100 recovery score
    ///
    /// Weights: sleep hours 0.25, sleep quality 0.15, stress 0.20 (inverted),
    /// mood 0.15, soreness 0.10 (inverted), energy 0.15. Sleep hours score
    /// against an 8 hour target and cap at 100.
    ///
    /// # Errors
    ///
    /// Returns an error if a rating is outside 1-5 or sleep hours are
    /// negative or not finite.
    pub fn calculate_score(inputs: &RecoveryInputs) -> AppResult<u8> {
        Self::validate(inputs)?;

        let sleep = (inputs.sleep_hours / SLEEP_TARGET_HOURS).min(1.0) * 100.0;
        let weighted = sleep * SLEEP_HOURS_WEIGHT
            + Self::favorable(inputs.sleep_quality) * SLEEP_QUALITY_WEIGHT
            + Self::inverted(inputs.stress_level) * STRESS_WEIGHT
            + Self::favorable(inputs.mood) * MOOD_WEIGHT
            + Self::inverted(inputs.soreness) * SORENESS_WEIGHT
            + Self::favorable(inputs.energy_level) * ENERGY_WEIGHT;

        Ok(weighted.round().clamp(0.0, 100.0) as u8)
    }

    /// Map a score onto its category label
    #[must_use]
    pub const fn categorize(score: u8) -> RecoveryCategory {
        match score {
            80..=u8::MAX => RecoveryCategory::Excellent,
            65..=79 => RecoveryCategory::Good,
            50..=64 => RecoveryCategory::Moderate,
            35..=49 => RecoveryCategory::Poor,
            _ => RecoveryCategory::VeryPoor,
        }
    }

    fn validate(inputs: &RecoveryInputs) -> AppResult<()> {
        if !inputs.sleep_hours.is_finite() || inputs.sleep_hours < 0.0 {
            return Err(AppError::invalid_input(
                "Sleep hours must be a non-negative number",
            ));
        }

        let ratings = [
            ("sleep_quality", inputs.sleep_quality),
            ("stress_level", inputs.stress_level),
            ("mood", inputs.mood),
            ("soreness", inputs.soreness),
            ("energy_level", inputs.energy_level),
        ];
        for (field, value) in ratings {
            if !RATING_RANGE.contains(&value) {
                return Err(AppError::invalid_input(format!(
                    "{field} must be between 1 and 5, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// 1 maps to 0, 5 maps to 100
    fn favorable(rating: u8) -> f64 {
        f64::from(rating - 1) / 4.0 * 100.0
    }

    /// 1 maps to 100, 5 maps to 0
    fn inverted(rating: u8) -> f64 {
        f64::from(5 - rating) / 4.0 * 100.0
    }
}
