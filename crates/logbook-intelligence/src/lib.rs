// ABOUTME: Training, recovery, and body-metric calculators for the Pierre logbook
// ABOUTME: Pure functions consumed by the display layer and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Logbook Intelligence
//!
//! Small, pure numeric algorithms. Nothing here performs I/O.
//!
//! - **strength**: Epley one-rep max, training volume, progressive-overload advice
//! - **recovery**: Weighted daily recovery score and category labels
//! - **`body_metrics`**: Plateau detection and moving averages over weigh-ins
//! - **energy**: Mifflin-St Jeor BMR and TDEE

/// Body-weight plateau detection and smoothing
pub mod body_metrics;
/// BMR and TDEE calculators
pub mod energy;
/// Daily recovery scoring
pub mod recovery;
/// One-rep max, volume, and overload suggestions
pub mod strength;

pub use body_metrics::{detect_plateau, moving_average, PlateauStatus, WeightSample};
pub use energy::{calculate_bmr, calculate_tdee, ActivityLevel, Sex};
pub use recovery::{RecoveryCalculator, RecoveryCategory, RecoveryInputs};
pub use strength::{
    epley_one_rep_max, training_volume, LoggedSet, OverloadAction, OverloadSuggestion,
    ProgressiveOverloadAnalyzer,
};
