// ABOUTME: Deterministic local parser for multi-day workout programs written as plain text
// ABOUTME: Splits day blocks on header lines and reads "Name SETSxREPS" exercise lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local workout program parser.
//!
//! ```text
//! Monday: Chest + Triceps
//! - Bench Press 4x8
//! - Incline DB Press 3x8-12
//! ```
//!
//! Lines that do not look like an exercise are dropped silently, and days
//! left without exercises are omitted.

use std::sync::LazyLock;

use logbook_core::models::{ParsedExercise, ParsedProgramDay, ParsedWorkoutProgram};
use regex::Regex;
use tracing::debug;

use super::muscle::infer_muscle_group;

/// A later line opens a new day block when it starts with a word character and has a colon
static BLOCK_START_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\w.*:").ok());

/// `Monday: Chest + Triceps` or `Push Day:`
static HEADER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.+?):\s*(.*)$").ok());

/// Leading list bullet
static BULLET_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[-•*]\s*").ok());

/// `Bench Press 4x8`, `Squat 5 X 5`, `Curl 3×8-12`
static EXERCISE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d+)\s*[xX×]\s*([\d-]+)\s*$").ok());

/// Parse a workout program using only line patterns and the muscle classifier
#[must_use]
pub fn parse_workout_locally(text: &str) -> ParsedWorkoutProgram {
    let days: Vec<ParsedProgramDay> = split_blocks(text)
        .iter()
        .filter_map(|block| parse_block(block))
        .collect();

    let program = ParsedWorkoutProgram { days };
    debug!(
        days = program.days.len(),
        exercises = program.exercise_count(),
        "Local workout parse complete"
    );
    program
}

/// Group lines into day blocks; the first line always opens a block
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();

    for line in text.trim().lines() {
        let starts_block = BLOCK_START_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(line));
        match blocks.last_mut() {
            Some(block) if !starts_block => block.push(line),
            _ => blocks.push(vec![line]),
        }
    }

    blocks
}

fn parse_block(lines: &[&str]) -> Option<ParsedProgramDay> {
    let mut lines = lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty());

    let header = HEADER_PATTERN.as_ref()?.captures(lines.next()?)?;
    let day_name = header.get(1)?.as_str().trim().to_owned();
    let focus = header
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|focus| !focus.is_empty())
        .map(str::to_owned);

    let exercises: Vec<ParsedExercise> = lines.filter_map(parse_exercise_line).collect();
    if day_name.is_empty() || exercises.is_empty() {
        return None;
    }

    Some(ParsedProgramDay {
        day_name,
        focus,
        exercises,
    })
}

/// Parse one body line, `None` when it is not an exercise
#[must_use]
pub fn parse_exercise_line(line: &str) -> Option<ParsedExercise> {
    let line = line.trim();
    let line = BULLET_PATTERN
        .as_ref()
        .map_or(line, |pattern| {
            pattern.find(line).map_or(line, |bullet| &line[bullet.end()..])
        });

    let captures = EXERCISE_PATTERN.as_ref()?.captures(line)?;
    let name = captures.get(1)?.as_str().trim();
    let sets: u32 = captures.get(2)?.as_str().parse().ok()?;
    let reps = captures.get(3)?.as_str();

    if name.is_empty() || sets == 0 {
        return None;
    }

    Some(ParsedExercise {
        name: name.to_owned(),
        sets,
        reps: reps.to_owned(),
        muscle_group: infer_muscle_group(name),
    })
}
