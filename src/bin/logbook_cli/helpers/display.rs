// ABOUTME: Output formatting helpers for logbook-cli
// ABOUTME: JSON printing plus plain-text summaries of parsed meals and programs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::ValueEnum;
use pierre_logbook::models::{
    FoodReference, ParseOutcome, ParsedFoodResult, ParsedWorkoutProgram,
};
use serde::Serialize;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Text,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_diagnostics(diagnostics: &[String]) {
    if diagnostics.is_empty() {
        return;
    }
    println!("\nProvider attempts that failed:");
    for diagnostic in diagnostics {
        println!("  - {diagnostic}");
    }
}

/// Display a parsed meal with per-item macros and totals
pub fn display_food(outcome: &ParseOutcome<ParsedFoodResult>) {
    let meal = &outcome.data;
    println!(
        "Meal ({} confidence, source: {})",
        outcome.confidence, outcome.source
    );
    println!("{}", "=".repeat(64));

    if meal.items.is_empty() {
        println!("No foods recognized.");
    }
    for item in &meal.items {
        let servings = item
            .servings
            .map_or_else(String::new, |servings| format!(" x{servings}"));
        println!(
            "  {:<20}{servings:<6} {:>7.1} g {:>5} kcal  P {:>5.1}  C {:>5.1}  F {:>5.1}",
            item.name, item.quantity_g, item.calories, item.protein, item.carbs, item.fat
        );
    }

    println!("{}", "-".repeat(64));
    println!(
        "  Total: {} kcal  P {:.1} g  C {:.1} g  F {:.1} g",
        meal.total_calories, meal.total_protein, meal.total_carbs, meal.total_fat
    );
    print_diagnostics(&outcome.diagnostics);
}

/// Display a parsed program day by day
pub fn display_workout(outcome: &ParseOutcome<ParsedWorkoutProgram>) {
    println!(
        "Program ({} confidence, source: {})",
        outcome.confidence, outcome.source
    );
    println!("{}", "=".repeat(64));

    if outcome.data.days.is_empty() {
        println!("No training days recognized.");
    }
    for day in &outcome.data.days {
        match &day.focus {
            Some(focus) => println!("{}: {focus}", day.day_name),
            None => println!("{}", day.day_name),
        }
        for exercise in &day.exercises {
            println!(
                "  {:<28} {} x {:<8} [{}]",
                exercise.name, exercise.sets, exercise.reps, exercise.muscle_group
            );
        }
    }
    print_diagnostics(&outcome.diagnostics);
}

/// Display reference foods with their serving size and per-100 g macros
pub fn display_foods(foods: &[&FoodReference]) {
    if foods.is_empty() {
        println!("No matching foods.");
        return;
    }
    println!(
        "{:<16} {:<22} {:>12}  {:>5} {:>6} {:>6} {:>6}",
        "key", "name", "serving", "kcal", "P", "C", "F"
    );
    for food in foods {
        let serving = format!("{} g/{}", food.serving_grams, food.unit_label);
        println!(
            "{:<16} {:<22} {serving:>12}  {:>5} {:>6.1} {:>6.1} {:>6.1}",
            food.key,
            food.name,
            food.calories_per_100g,
            food.protein_per_100g,
            food.carbs_per_100g,
            food.fat_per_100g
        );
    }
}
