// ABOUTME: Text parsing commands for logbook-cli
// ABOUTME: Runs meal and workout text through the tiered resolver and searches reference foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use pierre_logbook::input::read_text_input;
use pierre_logbook::parsers::search_foods;
use pierre_logbook::{parse_food_text, parse_workout_text, TieredResolver};
use tracing::info;

use crate::helpers::display::{
    display_food, display_foods, display_workout, print_json, OutputFormat,
};

/// Parse a meal description
pub async fn food(
    resolver: &TieredResolver,
    text: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let text = read_text_input(text, file).await?;
    info!(providers = ?resolver.provider_names(), "Parsing meal");

    let outcome = parse_food_text(resolver, &text).await?;
    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Text => display_food(&outcome),
    }
    Ok(())
}

/// Parse a training program
pub async fn workout(
    resolver: &TieredResolver,
    text: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let text = read_text_input(text, file).await?;
    info!(providers = ?resolver.provider_names(), "Parsing workout program");

    let outcome = parse_workout_text(resolver, &text).await?;
    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Text => display_workout(&outcome),
    }
    Ok(())
}

/// List reference foods, optionally filtered by a query
pub fn foods(query: Option<&str>, limit: usize, format: OutputFormat) -> Result<()> {
    let foods = search_foods(query.unwrap_or_default(), limit);

    match format {
        OutputFormat::Json => print_json(&foods)?,
        OutputFormat::Text => display_foods(&foods),
    }
    Ok(())
}
