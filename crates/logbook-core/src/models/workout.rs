// ABOUTME: Workout program models for text-parsed training schedules
// ABOUTME: MuscleGroup taxonomy plus parsed exercises, program days, and programs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Confidence;

/// Closed muscle-group taxonomy assigned to every parsed exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// General back (rows, deadlifts)
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// General lower body
    Legs,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Glutes
    Glutes,
    /// Calves
    Calves,
    /// Abs and trunk
    Core,
    /// Forearms and grip
    Forearms,
    /// Trapezius
    Traps,
    /// Latissimus dorsi
    Lats,
    /// Compound full-body movements; also the fallback group
    FullBody,
}

impl MuscleGroup {
    /// Every group, in declaration order
    pub const ALL: [Self; 15] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
        Self::Core,
        Self::Forearms,
        Self::Traps,
        Self::Lats,
        Self::FullBody,
    ];

    /// `snake_case` wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
            Self::Core => "core",
            Self::Forearms => "forearms",
            Self::Traps => "traps",
            Self::Lats => "lats",
            Self::FullBody => "full_body",
        }
    }

    /// Parse a wire name, tolerating case, spaces, and hyphens
    ///
    /// Returns `None` for anything outside the taxonomy.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
    }
}

impl Display for MuscleGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// One exercise line of a program day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExercise {
    /// Exercise name as written
    pub name: String,
    /// Number of sets, always positive
    pub sets: u32,
    /// Reps per set; a count ("10") or a range ("8-12")
    pub reps: String,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
}

/// One labelled day of a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProgramDay {
    /// Day label ("Monday", "Day 1", "Push")
    pub day_name: String,
    /// Optional focus written after the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Exercises in input order, never empty
    pub exercises: Vec<ParsedExercise>,
}

/// A multi-day training program parsed from text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWorkoutProgram {
    /// Days in input order
    pub days: Vec<ParsedProgramDay>,
}

impl ParsedWorkoutProgram {
    /// Confidence implied by the number of parsed days
    ///
    /// Two or more days is `High`, one is `Medium`, none is `Low`.
    #[must_use]
    pub fn confidence(&self) -> Confidence {
        match self.days.len() {
            0 => Confidence::Low,
            1 => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    /// Total exercises across all days
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|day| day.exercises.len()).sum()
    }

    /// Whether no day was parsed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
