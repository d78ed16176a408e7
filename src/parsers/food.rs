// ABOUTME: Deterministic local meal parser matching free text against the reference food table
// ABOUTME: Extracts numeric or spelled-out quantities and scales per-100 g macros to parsed items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local food parser.
//!
//! Never fails: unrecognized text yields an empty result with `Low`
//! confidence. Each reference key is matched at most once, at its first
//! occurrence that does not overlap a span already claimed by an earlier
//! (more specific) key.

use std::ops::Range;
use std::sync::LazyLock;

use logbook_core::constants::food::NUMBER_WORD_WINDOW_CHARS;
use logbook_core::models::{Confidence, FoodReference, ParsedFoodResult};
use regex::Regex;
use tracing::debug;

use super::food_database::REFERENCE_FOODS;

/// Number plus optional unit and "of", anchored to the end of the text before a food
static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:\.\d+)?)\s*(pieces?|cups?|bowls?|glass(?:es)?|plates?|scoops?|slices?|tbsp|tsp|kgs?|grams?|gms?|g)?\s*(?:of\s+)?$",
    )
    .ok()
});

/// Spelled-out quantities
static NUMBER_WORD_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(one|two|three|four|five|half|an|a)\b").ok());

/// Clause boundaries; number words before the last one belong to another food
static CLAUSE_BREAK_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[,;+\n]|\band\b|\bwith\b|\bplus\b").ok());

/// One compiled matcher per reference food, in table order
static FOOD_MATCHERS: LazyLock<Vec<(&'static FoodReference, Option<Regex>)>> =
    LazyLock::new(|| {
        REFERENCE_FOODS
            .iter()
            .map(|food| {
                let pattern = food
                    .key
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+");
                (food, Regex::new(&pattern).ok())
            })
            .collect()
    });

/// Parse a meal description using only the reference table
#[must_use]
pub fn parse_food_locally(text: &str) -> ParsedFoodResult {
    let lower = text.to_lowercase();
    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut items = Vec::new();

    for (food, matcher) in FOOD_MATCHERS.iter() {
        let Some(matcher) = matcher else { continue };
        let Some(span) = matcher
            .find_iter(&lower)
            .map(|m| m.range())
            .find(|range| !claimed.iter().any(|c| overlaps(c, range)))
        else {
            continue;
        };

        let servings = quantity_before(&lower[..span.start], food);
        if servings <= 0.0 {
            continue;
        }
        let grams = food.serving_grams * servings;
        items.push(food.scaled_item(grams, Some(servings)));
        claimed.push(span);
    }

    let confidence = if items.is_empty() {
        Confidence::Low
    } else {
        Confidence::Medium
    };
    debug!(items = items.len(), %confidence, "Local food parse complete");
    ParsedFoodResult::from_items(items, confidence)
}

const fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Servings implied by the text directly preceding a food
fn quantity_before(prefix: &str, food: &FoodReference) -> f64 {
    if let Some(quantity) = numeric_quantity(prefix, food) {
        return quantity;
    }
    number_word_quantity(prefix).unwrap_or(1.0)
}

/// `2 rotis`, `1.5 cups rice`, `200g paneer`, `2 glasses of milk`
fn numeric_quantity(prefix: &str, food: &FoodReference) -> Option<f64> {
    let captures = QUANTITY_PATTERN.as_ref()?.captures(prefix)?;
    let number: f64 = captures.get(1)?.as_str().parse().ok()?;
    let quantity = match captures.get(2).map(|unit| unit.as_str()) {
        Some("kg" | "kgs") => number * 1000.0 / food.serving_grams,
        Some("g" | "gm" | "gms" | "gram" | "grams") => number / food.serving_grams,
        _ => number,
    };
    Some(quantity)
}

/// `two eggs`, `a half roti`, `a bowl of dal`
///
/// Looks at the last few characters of the current clause. The number word
/// closest to the food wins, so `half a roti` is one roti.
fn number_word_quantity(prefix: &str) -> Option<f64> {
    let window = trailing_chars(prefix, NUMBER_WORD_WINDOW_CHARS);
    let clause = CLAUSE_BREAK_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.find_iter(window).last())
        .map_or(window, |boundary| &window[boundary.end()..]);

    NUMBER_WORD_PATTERN
        .as_ref()?
        .find_iter(clause)
        .last()
        .and_then(|word| number_word_value(word.as_str()))
}

fn number_word_value(word: &str) -> Option<f64> {
    match word {
        "one" | "a" | "an" => Some(1.0),
        "two" => Some(2.0),
        "three" => Some(3.0),
        "four" => Some(4.0),
        "five" => Some(5.0),
        "half" => Some(0.5),
        _ => None,
    }
}

/// Last `count` characters of `text`, on a char boundary
fn trailing_chars(text: &str, count: usize) -> &str {
    let start = text
        .char_indices()
        .rev()
        .nth(count.saturating_sub(1))
        .map_or(0, |(index, _)| index);
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_chars_respects_utf8() {
        assert_eq!(trailing_chars("dal • roti", 6), "• roti");
        assert_eq!(trailing_chars("ab", 20), "ab");
        assert_eq!(trailing_chars("", 20), "");
    }

    #[test]
    fn test_number_words() {
        assert_eq!(number_word_quantity("two "), Some(2.0));
        assert_eq!(number_word_quantity("a half "), Some(0.5));
        assert_eq!(number_word_quantity("a bowl of "), Some(1.0));
        assert_eq!(number_word_quantity("nothing here "), None);
    }

    #[test]
    fn test_closest_number_word_wins() {
        assert_eq!(number_word_quantity("half a "), Some(1.0));
        assert_eq!(number_word_quantity("one or two "), Some(2.0));
        assert_eq!(number_word_quantity("two bowls, a "), Some(1.0));
    }

    #[test]
    fn test_number_words_stop_at_clause_break() {
        assert_eq!(number_word_quantity("two eggs and "), None);
        assert_eq!(number_word_quantity("three idli, "), None);
    }

    #[test]
    fn test_whole_word_only() {
        // "an" inside "banana" and "a" inside "plate" must not count
        assert_eq!(number_word_quantity("banana plate "), None);
    }
}
