// ABOUTME: Strict validation and numeric normalization of provider JSON into typed parse results
// ABOUTME: Coerces numeric strings, re-rounds macros, recomputes totals, and backfills muscle groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Provider output validation.
//!
//! Remote models return loosely typed JSON. Nothing a provider says is
//! trusted until it passes through here: the food validator rejects the
//! whole response on any bad item, the workout validator drops bad
//! exercises and days and rejects only when nothing usable remains.

use logbook_core::models::{
    Confidence, MuscleGroup, ParsedExercise, ParsedFoodItem, ParsedFoodResult, ParsedProgramDay,
    ParsedWorkoutProgram,
};
use logbook_core::rounding::{round1, round_whole};
use serde_json::{Map, Value};
use thiserror::Error;

use super::food_database::food_by_key;
use super::muscle::infer_muscle_group;

/// Why a provider response was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Top-level value has the wrong shape
    #[error("expected {0}")]
    UnexpectedShape(&'static str),
    /// A required array is absent or empty
    #[error("missing or empty `{0}` array")]
    MissingArray(&'static str),
    /// A food item failed validation
    #[error("item {index}: {reason}")]
    InvalidItem {
        /// Zero-based position in the provider's `items`
        index: usize,
        /// What was wrong with it
        reason: String,
    },
    /// Provider total is absent, zero, or negative
    #[error("total_calories must be a positive number")]
    NonPositiveTotal,
    /// Every day or exercise was dropped
    #[error("no day with at least one valid exercise")]
    NoUsableDays,
}

// ============================================================================
// Number coercion
// ============================================================================

/// Read a finite number from a JSON number or a numeric string
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn field_number(item: &Map<String, Value>, key: &str) -> Result<f64, String> {
    optional_field_number(item, key)?.ok_or_else(|| format!("missing `{key}`"))
}

/// Absent and `null` read as `None`; anything else must be a number
fn optional_field_number(item: &Map<String, Value>, key: &str) -> Result<Option<f64>, String> {
    match item.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_number(value)
            .map(Some)
            .ok_or_else(|| format!("`{key}` is not a number")),
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

// ============================================================================
// Food
// ============================================================================

/// Validate a provider meal breakdown
///
/// Items are re-rounded (calories whole, grams and macros one decimal) and
/// totals are recomputed from them; the provider's own totals are only
/// checked for a `total_calories` that is still positive once rounded.
/// Only `name` and `calories` are required per item. Missing macros read
/// as zero; a missing `quantity_g` falls back to the reference serving
/// when the name is a known food, otherwise zero (weight not reported).
///
/// # Errors
///
/// Returns the first rule the response breaks
pub fn validate_food_response(
    value: &Value,
    confidence: Confidence,
) -> Result<ParsedFoodResult, ValidationError> {
    let object = value
        .as_object()
        .ok_or(ValidationError::UnexpectedShape("a JSON object with `items`"))?;

    let raw_items = object
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ValidationError::MissingArray("items"))?;

    let items = raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_food_item(item).map_err(|reason| ValidationError::InvalidItem { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_calories = object.get("total_calories").and_then(coerce_number);
    if !total_calories.is_some_and(|total| round_whole(total) > 0) {
        return Err(ValidationError::NonPositiveTotal);
    }

    let result = ParsedFoodResult::from_items(items, confidence);
    if result.total_calories == 0 {
        return Err(ValidationError::NonPositiveTotal);
    }
    Ok(result)
}

fn validate_food_item(value: &Value) -> Result<ParsedFoodItem, String> {
    let item = value.as_object().ok_or("not an object")?;

    let name = non_empty_string(item.get("name")).ok_or("missing or empty `name`")?;
    let calories = round_whole(field_number(item, "calories")?);
    if calories == 0 {
        return Err("`calories` must be positive".to_owned());
    }

    let quantity_g = match optional_field_number(item, "quantity_g")? {
        Some(grams) if grams < 0.0 => return Err("`quantity_g` must not be negative".to_owned()),
        Some(grams) if grams > 0.0 => grams,
        _ => food_by_key(&name).map_or(0.0, |food| food.serving_grams),
    };

    let mut macros = [0.0; 3];
    for (slot, key) in macros.iter_mut().zip(["protein", "carbs", "fat"]) {
        let amount = optional_field_number(item, key)?.unwrap_or(0.0);
        if amount < 0.0 {
            return Err(format!("`{key}` must not be negative"));
        }
        *slot = round1(amount);
    }
    let [protein, carbs, fat] = macros;

    Ok(ParsedFoodItem {
        name,
        quantity_g: round1(quantity_g),
        calories,
        protein,
        carbs,
        fat,
        servings: None,
    })
}

// ============================================================================
// Workout
// ============================================================================

/// Validate a provider workout program
///
/// Accepts `{"days": [...]}` or a bare array of days. Exercises without a
/// name, a positive set count, or reps are dropped; a missing or unknown
/// `muscle_group` is inferred from the exercise name; a day without a name
/// becomes `Day N` (1-based position in the provider's list).
///
/// # Errors
///
/// Returns an error when the shape is wrong or no day keeps an exercise
pub fn validate_workout_response(value: &Value) -> Result<ParsedWorkoutProgram, ValidationError> {
    let raw_days = match value {
        Value::Array(days) => days,
        Value::Object(object) => object
            .get("days")
            .and_then(Value::as_array)
            .ok_or(ValidationError::MissingArray("days"))?,
        _ => {
            return Err(ValidationError::UnexpectedShape(
                "a JSON object with `days` or an array of days",
            ))
        }
    };

    let days: Vec<ParsedProgramDay> = raw_days
        .iter()
        .enumerate()
        .filter_map(|(index, day)| validate_day(index, day))
        .collect();

    if days.is_empty() {
        return Err(ValidationError::NoUsableDays);
    }
    Ok(ParsedWorkoutProgram { days })
}

fn validate_day(index: usize, value: &Value) -> Option<ParsedProgramDay> {
    let day = value.as_object()?;
    let exercises: Vec<ParsedExercise> = day
        .get("exercises")?
        .as_array()?
        .iter()
        .filter_map(validate_exercise)
        .collect();

    if exercises.is_empty() {
        return None;
    }

    Some(ParsedProgramDay {
        day_name: non_empty_string(day.get("day_name"))
            .unwrap_or_else(|| format!("Day {}", index + 1)),
        focus: non_empty_string(day.get("focus")),
        exercises,
    })
}

fn validate_exercise(value: &Value) -> Option<ParsedExercise> {
    let exercise = value.as_object()?;
    let name = non_empty_string(exercise.get("name"))?;

    let sets = exercise.get("sets").and_then(coerce_number)?.round();
    if !(1.0..=f64::from(u32::MAX)).contains(&sets) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sets = sets as u32;

    let reps = match exercise.get("reps")? {
        Value::String(text) => Some(text.trim().to_owned()).filter(|reps| !reps.is_empty()),
        Value::Number(number) => number.as_f64().filter(|n| *n > 0.0).map(format_reps),
        _ => None,
    }?;

    let muscle_group = exercise
        .get("muscle_group")
        .and_then(Value::as_str)
        .and_then(MuscleGroup::parse)
        .unwrap_or_else(|| infer_muscle_group(&name));

    Some(ParsedExercise {
        name,
        sets,
        reps,
        muscle_group,
    })
}

/// `10.0` becomes `"10"`; fractional counts keep their decimals
fn format_reps(reps: f64) -> String {
    if reps.fract().abs() < f64::EPSILON {
        format!("{reps:.0}")
    } else {
        reps.to_string()
    }
}
