// ABOUTME: Unit tests for logbook-core parse models
// ABOUTME: Validates confidence parsing, source serialization, taxonomy lookup, and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use logbook_core::models::{
    Confidence, FoodReference, MuscleGroup, ParseOutcome, ParsedExercise, ParsedFoodResult,
    ParsedProgramDay, ParsedWorkoutProgram,
};

const PANEER: FoodReference =
    FoodReference::new("paneer", "Paneer", 100.0, "100g").per_100g(265.0, 18.0, 3.4, 20.0);
const RICE: FoodReference =
    FoodReference::new("rice", "Rice (Cooked)", 150.0, "cup").per_100g(130.0, 2.7, 28.0, 0.3);

fn day(name: &str) -> ParsedProgramDay {
    ParsedProgramDay {
        day_name: name.to_owned(),
        focus: None,
        exercises: vec![ParsedExercise {
            name: "Bench Press".to_owned(),
            sets: 3,
            reps: "8-12".to_owned(),
            muscle_group: MuscleGroup::Chest,
        }],
    }
}

#[test]
fn test_confidence_parsing() {
    assert_eq!(Confidence::from_str_or_default("LOW"), Confidence::Low);
    assert_eq!(Confidence::from_str_or_default("high"), Confidence::High);
    assert_eq!(Confidence::from_str_or_default("medium"), Confidence::Medium);
    assert_eq!(Confidence::from_str_or_default("bogus"), Confidence::Medium); // Default fallback
}

#[test]
fn test_confidence_ordering() {
    assert!(Confidence::Low < Confidence::Medium);
    assert!(Confidence::Medium < Confidence::High);
    assert!(!Confidence::Low.is_usable());
    assert!(Confidence::Medium.is_usable());
}

#[test]
fn test_outcome_serializes_source_as_string() {
    let outcome = ParseOutcome::local(ParsedFoodResult::empty(), Confidence::Low);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["source"], "local");
    assert_eq!(json["confidence"], "low");
    assert!(json.get("diagnostics").is_none());

    let outcome = ParseOutcome::from_provider(ParsedFoodResult::empty(), "groq", Confidence::Medium)
        .with_diagnostics(vec!["gemini: timed out".to_owned()]);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["source"], "groq");
    assert_eq!(json["diagnostics"][0], "gemini: timed out");
}

#[test]
fn test_muscle_group_wire_names() {
    assert_eq!(
        serde_json::to_string(&MuscleGroup::FullBody).unwrap(),
        "\"full_body\""
    );
    assert_eq!(MuscleGroup::parse("Full Body"), Some(MuscleGroup::FullBody));
    assert_eq!(MuscleGroup::parse("full-body"), Some(MuscleGroup::FullBody));
    assert_eq!(MuscleGroup::parse(" Hamstrings "), Some(MuscleGroup::Hamstrings));
    assert_eq!(MuscleGroup::parse("neck"), None);

    for group in MuscleGroup::ALL {
        assert_eq!(MuscleGroup::parse(group.as_str()), Some(group));
    }
}

#[test]
fn test_scaled_item_uses_per_100g_values() {
    let item = RICE.scaled_item(300.0, Some(2.0));
    assert_eq!(item.name, "rice");
    assert!((item.quantity_g - 300.0).abs() < f64::EPSILON);
    assert_eq!(item.calories, 390);
    assert!((item.protein - 8.1).abs() < 1e-9);
    assert!((item.carbs - 84.0).abs() < 1e-9);
    assert!((item.fat - 0.9).abs() < 1e-9);
    assert_eq!(item.servings, Some(2.0));
}

#[test]
fn test_totals_are_sums_of_items() {
    let items = vec![
        PANEER.scaled_item(100.0, Some(1.0)),
        RICE.scaled_item(150.0, Some(1.0)),
    ];
    let result = ParsedFoodResult::from_items(items, Confidence::Medium);

    assert_eq!(result.total_calories, 265 + 195);
    let protein: f64 = result.items.iter().map(|item| item.protein).sum();
    let carbs: f64 = result.items.iter().map(|item| item.carbs).sum();
    let fat: f64 = result.items.iter().map(|item| item.fat).sum();
    assert!((result.total_protein - protein).abs() < 1e-6);
    assert!((result.total_carbs - carbs).abs() < 1e-6);
    assert!((result.total_fat - fat).abs() < 1e-6);
}

#[test]
fn test_program_confidence_by_day_count() {
    let mut program = ParsedWorkoutProgram::default();
    assert_eq!(program.confidence(), Confidence::Low);

    program.days.push(day("Monday"));
    assert_eq!(program.confidence(), Confidence::Medium);

    program.days.push(day("Wednesday"));
    assert_eq!(program.confidence(), Confidence::High);
    assert_eq!(program.exercise_count(), 2);
}
