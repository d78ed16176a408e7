// ABOUTME: Nutrition models for reference foods and parsed meal descriptions
// ABOUTME: FoodReference, ParsedFoodItem, and ParsedFoodResult with total bookkeeping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Confidence;
use crate::rounding::{round1, round_whole};

/// Static reference record for a food the local parser recognizes
///
/// Macros are stored per 100 g; `serving_grams` is what one unit of
/// `unit_label` weighs (one roti, one bowl of dal, one glass of milk).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodReference {
    /// Lowercase token matched against meal text
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Energy per 100 g (kcal)
    pub calories_per_100g: f64,
    /// Protein per 100 g (g)
    pub protein_per_100g: f64,
    /// Carbohydrate per 100 g (g)
    pub carbs_per_100g: f64,
    /// Fat per 100 g (g)
    pub fat_per_100g: f64,
    /// Weight of one reference serving (g)
    pub serving_grams: f64,
    /// Unit one serving is counted in
    pub unit_label: &'static str,
}

impl FoodReference {
    /// Create a reference with zeroed macros; chain the builders below
    #[must_use]
    pub const fn new(
        key: &'static str,
        name: &'static str,
        serving_grams: f64,
        unit_label: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            calories_per_100g: 0.0,
            protein_per_100g: 0.0,
            carbs_per_100g: 0.0,
            fat_per_100g: 0.0,
            serving_grams,
            unit_label,
        }
    }

    /// Set per-100 g macros (kcal, protein, carbs, fat)
    #[must_use]
    pub const fn per_100g(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.calories_per_100g = calories;
        self.protein_per_100g = protein;
        self.carbs_per_100g = carbs;
        self.fat_per_100g = fat;
        self
    }

    /// Scale this reference to a parsed item of `grams` weight
    #[must_use]
    pub fn scaled_item(&self, grams: f64, servings: Option<f64>) -> ParsedFoodItem {
        let factor = grams / 100.0;
        ParsedFoodItem {
            name: self.key.to_owned(),
            quantity_g: round1(grams),
            calories: round_whole(self.calories_per_100g * factor),
            protein: round1(self.protein_per_100g * factor),
            carbs: round1(self.carbs_per_100g * factor),
            fat: round1(self.fat_per_100g * factor),
            servings,
        }
    }
}

/// One food recognized in a meal description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFoodItem {
    /// Food name (reference key for local results)
    pub name: String,
    /// Total weight (g), always positive
    pub quantity_g: f64,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (g), one decimal
    pub protein: f64,
    /// Carbohydrate (g), one decimal
    pub carbs: f64,
    /// Fat (g), one decimal
    pub fat: f64,
    /// Reference servings the quantity corresponds to (local results only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
}

/// Itemized macro breakdown of a meal description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFoodResult {
    /// Recognized foods in input order of their reference table
    pub items: Vec<ParsedFoodItem>,
    /// Sum of item calories
    pub total_calories: u32,
    /// Sum of item protein (g)
    pub total_protein: f64,
    /// Sum of item carbohydrate (g)
    pub total_carbs: f64,
    /// Sum of item fat (g)
    pub total_fat: f64,
    /// Trust level of this result
    pub confidence: Confidence,
}

impl ParsedFoodResult {
    /// Build a result whose totals are the sums of the given items
    #[must_use]
    pub fn from_items(items: Vec<ParsedFoodItem>, confidence: Confidence) -> Self {
        let total_calories = items.iter().map(|item| item.calories).sum();
        let total_protein = round1(items.iter().map(|item| item.protein).sum());
        let total_carbs = round1(items.iter().map(|item| item.carbs).sum());
        let total_fat = round1(items.iter().map(|item| item.fat).sum());

        Self {
            items,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
            confidence,
        }
    }

    /// Empty result with `Low` confidence
    #[must_use]
    pub fn empty() -> Self {
        Self::from_items(Vec::new(), Confidence::Low)
    }

    /// Whether no food was recognized
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
