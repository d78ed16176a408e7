// ABOUTME: Calculator commands for logbook-cli
// ABOUTME: One-rep max, recovery score, plateau detection, and BMR/TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use pierre_logbook::input::read_weigh_ins;
use pierre_logbook::intelligence::{
    calculate_bmr, calculate_tdee, detect_plateau, epley_one_rep_max, moving_average,
    training_volume, ActivityLevel, RecoveryCalculator, RecoveryInputs, Sex,
};
use serde_json::json;
use tracing::info;

use crate::helpers::display::{print_json, OutputFormat};

/// Days in the weigh-in smoothing window
const WEIGHT_AVERAGE_WINDOW: usize = 7;

/// `--sex` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    /// Male
    Male,
    /// Female
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Self::Male,
            SexArg::Female => Self::Female,
        }
    }
}

/// `--activity` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityArg {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days a week
    LightlyActive,
    /// 3-5 days a week
    ModeratelyActive,
    /// 6-7 days a week
    VeryActive,
    /// Hard daily training
    ExtraActive,
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Sedentary => Self::Sedentary,
            ActivityArg::LightlyActive => Self::LightlyActive,
            ActivityArg::ModeratelyActive => Self::ModeratelyActive,
            ActivityArg::VeryActive => Self::VeryActive,
            ActivityArg::ExtraActive => Self::ExtraActive,
        }
    }
}

/// Estimate a one-rep max, with volume when sets are given
pub fn one_rep_max(weight: f64, reps: u32, sets: Option<u32>, format: OutputFormat) -> Result<()> {
    let estimate = epley_one_rep_max(weight, reps);
    let volume = sets.map(|sets| training_volume(weight, reps, sets));

    match format {
        OutputFormat::Json => print_json(&json!({
            "weight": weight,
            "reps": reps,
            "one_rep_max": estimate,
            "volume": volume,
        }))?,
        OutputFormat::Text => {
            println!("Estimated 1RM: {estimate:.1} kg ({weight} kg x {reps})");
            if let Some(volume) = volume {
                println!("Volume: {volume:.1} kg");
            }
        }
    }
    Ok(())
}

/// Score recovery and label it
pub fn recovery(inputs: &RecoveryInputs, format: OutputFormat) -> Result<()> {
    let score = RecoveryCalculator::calculate_score(inputs)?;
    let category = RecoveryCalculator::categorize(score);

    match format {
        OutputFormat::Json => print_json(&json!({
            "score": score,
            "category": category,
            "inputs": inputs,
        }))?,
        OutputFormat::Text => println!("Recovery: {score}/100 ({category})"),
    }
    Ok(())
}

/// Check a weigh-in log for a plateau
pub async fn plateau(file: &Path, format: OutputFormat) -> Result<()> {
    let samples = read_weigh_ins(file).await?;
    info!(samples = samples.len(), "Loaded weigh-ins");

    let status = detect_plateau(&samples);
    let weights: Vec<f64> = samples.iter().map(|sample| sample.weight_kg).collect();
    let trend = moving_average(&weights, WEIGHT_AVERAGE_WINDOW);

    match format {
        OutputFormat::Json => print_json(&json!({
            "plateau": status,
            "moving_average": trend,
        }))?,
        OutputFormat::Text => {
            match &status.message {
                Some(message) if status.detected => println!("Plateau: {message}"),
                _ => println!("No plateau detected across {} weigh-ins.", samples.len()),
            }
            if let Some(latest) = trend.last() {
                println!("{WEIGHT_AVERAGE_WINDOW}-day average: {latest:.2} kg");
            }
        }
    }
    Ok(())
}

/// Basal metabolic rate and daily energy expenditure
pub fn energy(
    weight: f64,
    height: f64,
    age: u32,
    sex: SexArg,
    activity: ActivityArg,
    format: OutputFormat,
) -> Result<()> {
    let bmr = calculate_bmr(weight, height, age, sex.into())?;
    let tdee = calculate_tdee(bmr, activity.into());

    match format {
        OutputFormat::Json => print_json(&json!({
            "bmr": bmr.round(),
            "tdee": tdee,
            "activity_level": ActivityLevel::from(activity),
        }))?,
        OutputFormat::Text => {
            println!("BMR: {bmr:.0} kcal/day");
            println!("TDEE: {tdee:.0} kcal/day");
        }
    }
    Ok(())
}
