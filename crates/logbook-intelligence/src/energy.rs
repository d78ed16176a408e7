// ABOUTME: Energy expenditure calculators for nutrition targets
// ABOUTME: Mifflin-St Jeor basal metabolic rate and activity-scaled daily expenditure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use logbook_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Exercise 6-7 days/week
    VeryActive,
    /// Athlete, hard training daily
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// # Errors
///
/// Returns an error if weight or height is outside (0, 300] or age is
/// outside 10-120.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> AppResult<f64> {
    if !(weight_kg > 0.0 && weight_kg <= 300.0) {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !(height_cm > 0.0 && height_cm <= 300.0) {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years",
        ));
    }

    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };

    Ok(6.25f64.mul_add(height_cm, 10.0 * weight_kg) - 5.0 * f64::from(age) + sex_constant)
}

/// Total Daily Energy Expenditure, rounded to whole kcal
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    (bmr * activity_level.factor()).round()
}
