// ABOUTME: Core data models for parsed meals, workout programs, and parse outcomes
// ABOUTME: Re-exports nutrition, workout, and outcome types for the parser crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every value here is transient: built per parse call, handed to the caller
//! for persistence, and dropped. Only `FoodReference` tables are static.

mod nutrition;
mod parse;
mod workout;

pub use nutrition::{FoodReference, ParsedFoodItem, ParsedFoodResult};
pub use parse::{Confidence, ParseOutcome, ParseSource};
pub use workout::{MuscleGroup, ParsedExercise, ParsedProgramDay, ParsedWorkoutProgram};
