// ABOUTME: Local text parsers and provider response handling for meals and workout programs
// ABOUTME: Pure, deterministic building blocks used by the tiered resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parsers
//!
//! - **food**: meal text against the reference food table
//! - **`food_database`**: the reference table and its search helpers
//! - **muscle**: exercise name to muscle group classifier
//! - **workout**: day-block and exercise-line parser
//! - **json**: lenient JSON extraction from model output
//! - **validation**: strict typing of provider JSON

/// Local meal parser
pub mod food;
/// Reference foods with per-100 g macros
pub mod food_database;
/// JSON extraction from model completions
pub mod json;
/// Exercise muscle-group classifier
pub mod muscle;
/// Provider response validation
pub mod validation;
/// Local workout program parser
pub mod workout;

pub use food::parse_food_locally;
pub use food_database::{food_by_key, search_foods, REFERENCE_FOODS};
pub use json::extract_json;
pub use muscle::{infer_muscle_group, MUSCLE_KEYWORDS};
pub use validation::{validate_food_response, validate_workout_response, ValidationError};
pub use workout::{parse_exercise_line, parse_workout_locally};
