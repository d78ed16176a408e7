// ABOUTME: Strength calculators for estimated one-rep max, training volume, and overload advice
// ABOUTME: Epley 1RM plus a decision table over RPE, rep targets, and weekly 1RM trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Calculator Module
//!
//! # Scientific References
//!
//! - Epley, B. (1985). Poundage chart. *Boyd Epley Workout*. Lincoln, NE.
//!
//! - Helms, E.R., et al. (2016). Application of the repetitions in reserve-based
//!   rating of perceived exertion scale for resistance training.
//!   *Strength and Conditioning Journal*, 38(4), 42-49.
//!   <https://doi.org/10.1519/SSC.0000000000000218>

use logbook_core::constants::analysis::{
    DECLINE_WEEKS, DEFAULT_RPE, DELOAD_RPE_THRESHOLD, INCREASE_RPE_CEILING,
};
use logbook_core::rounding::round1;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Estimate a one-rep max with the Epley formula
///
/// Formula: 1RM = weight x (1 + reps / 30), rounded to one decimal.
/// A single rep (or zero) returns `weight` unchanged.
#[must_use]
pub fn epley_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps <= 1 {
        return weight;
    }
    round1(weight * (1.0 + f64::from(reps) / 30.0))
}

/// Total load moved: weight x reps x sets
#[must_use]
pub fn training_volume(weight: f64, reps: u32, sets: u32) -> f64 {
    weight * f64::from(reps) * f64::from(sets)
}

/// One logged working set with its target rep range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Load (kg)
    pub weight: f64,
    /// Reps completed
    pub reps: u32,
    /// Bottom of the target rep range
    pub target_reps_min: u32,
    /// Top of the target rep range
    pub target_reps_max: u32,
    /// Rating of perceived exertion (1-10), if logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
}

impl LoggedSet {
    /// Whether the set reached the top of its target range
    #[must_use]
    pub const fn hit_top_of_range(&self) -> bool {
        self.reps >= self.target_reps_max
    }
}

/// Progressive-overload recommendation kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverloadAction {
    /// Add load next session
    IncreaseWeight,
    /// Take a reduced-volume week
    Deload,
    /// Cut working sets and focus on quality
    ReduceVolume,
    /// Keep the current prescription
    Maintain,
}

/// Recommendation with a headline and the reasoning behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadSuggestion {
    /// What to do next
    pub action: OverloadAction,
    /// Short headline
    pub message: String,
    /// Human-readable rationale
    pub detail: String,
}

impl OverloadSuggestion {
    fn new(action: OverloadAction, message: &str, detail: &str) -> Self {
        Self {
            action,
            message: message.to_owned(),
            detail: detail.to_owned(),
        }
    }
}

/// Decision table over recent sets and weekly estimated-1RM trend
pub struct ProgressiveOverloadAnalyzer;

impl ProgressiveOverloadAnalyzer {
    /// Suggest the next progression step
    ///
    /// Rules, first match wins:
    /// 1. No sets: maintain.
    /// 2. Average RPE above 9 and a three-week 1RM decline: deload.
    /// 3. Three-week 1RM decline: reduce volume.
    /// 4. Every set at the top of its range and average RPE at most 8: increase weight.
    /// 5. Otherwise maintain.
    ///
    /// Sets without an RPE count as RPE 7.
    #[must_use]
    pub fn suggest(recent_sets: &[LoggedSet], weekly_one_rep_max: &[f64]) -> OverloadSuggestion {
        if recent_sets.is_empty() {
            return OverloadSuggestion::new(
                OverloadAction::Maintain,
                "No data yet",
                "Log more sessions to get suggestions.",
            );
        }

        let average_rpe = Self::average_rpe(recent_sets);
        let all_hit_max = recent_sets.iter().all(LoggedSet::hit_top_of_range);
        let declining = Self::is_declining(weekly_one_rep_max);

        debug!(
            average_rpe,
            all_hit_max, declining, "Evaluating progressive overload"
        );

        if average_rpe > DELOAD_RPE_THRESHOLD && declining {
            return OverloadSuggestion::new(
                OverloadAction::Deload,
                "Deload recommended",
                "RPE consistently above 9 with declining strength. Take a deload week at 50-60% volume.",
            );
        }

        if declining {
            return OverloadSuggestion::new(
                OverloadAction::ReduceVolume,
                "Reduce volume",
                "Strength has been declining for 3 weeks. Consider reducing volume by 20% and focusing on quality.",
            );
        }

        if all_hit_max && average_rpe <= INCREASE_RPE_CEILING {
            return OverloadSuggestion::new(
                OverloadAction::IncreaseWeight,
                "Add weight",
                "All sets hit the top of the rep range at a manageable RPE. Add 2.5kg next session.",
            );
        }

        OverloadSuggestion::new(
            OverloadAction::Maintain,
            "Keep going",
            "Progress is solid. Keep the current load and aim for the top of your rep range.",
        )
    }

    /// Mean RPE with missing values counted as the default
    #[must_use]
    pub fn average_rpe(sets: &[LoggedSet]) -> f64 {
        if sets.is_empty() {
            return DEFAULT_RPE;
        }
        let total: f64 = sets.iter().map(|set| set.rpe.unwrap_or(DEFAULT_RPE)).sum();
        total / sets.len() as f64
    }

    /// True when the last three weekly values are strictly decreasing
    #[must_use]
    pub fn is_declining(weekly_one_rep_max: &[f64]) -> bool {
        if weekly_one_rep_max.len() < DECLINE_WEEKS {
            return false;
        }
        let recent = &weekly_one_rep_max[weekly_one_rep_max.len() - DECLINE_WEEKS..];
        recent.windows(2).all(|pair| pair[1] < pair[0])
    }
}
