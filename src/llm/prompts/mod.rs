// ABOUTME: Prompt templates for structured meal and workout extraction, loaded at compile time
// ABOUTME: Builds deterministic chat requests embedding the raw text and the target JSON schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Extraction Prompts
//!
//! Prompts live in markdown files next to this module and are embedded at
//! compile time. Rendering is pure string substitution, so the same input
//! always produces the same request.

use logbook_core::models::MuscleGroup;

use super::{ChatMessage, ChatRequest};
use crate::config::ResolverConfig;

/// System instruction shared by both extraction prompts
pub const SYSTEM_PROMPT: &str = include_str!("system.md");

/// Meal extraction template; `{{TEXT}}` is replaced by the meal description
pub const FOOD_PROMPT_TEMPLATE: &str = include_str!("food.md");

/// Program extraction template; `{{TEXT}}` and `{{MUSCLE_GROUPS}}` are substituted
pub const WORKOUT_PROMPT_TEMPLATE: &str = include_str!("workout.md");

const TEXT_PLACEHOLDER: &str = "{{TEXT}}";
const MUSCLE_GROUPS_PLACEHOLDER: &str = "{{MUSCLE_GROUPS}}";

/// Render the meal prompt for `text`
#[must_use]
pub fn food_prompt(text: &str) -> String {
    FOOD_PROMPT_TEMPLATE.replace(TEXT_PLACEHOLDER, text.trim())
}

/// Render the workout prompt for `text`
#[must_use]
pub fn workout_prompt(text: &str) -> String {
    let groups = MuscleGroup::ALL
        .iter()
        .map(MuscleGroup::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    // Substitute the fixed list first so user text is never rescanned
    WORKOUT_PROMPT_TEMPLATE
        .replace(MUSCLE_GROUPS_PLACEHOLDER, &groups)
        .replace(TEXT_PLACEHOLDER, text.trim())
}

fn extraction_request(prompt: String, config: &ResolverConfig) -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(prompt),
    ])
    .with_temperature(config.temperature)
    .with_max_tokens(config.max_tokens)
    .with_json_response()
}

/// Complete chat request for meal extraction
#[must_use]
pub fn food_request(text: &str, config: &ResolverConfig) -> ChatRequest {
    extraction_request(food_prompt(text), config)
}

/// Complete chat request for workout program extraction
#[must_use]
pub fn workout_request(text: &str, config: &ResolverConfig) -> ChatRequest {
    extraction_request(workout_prompt(text), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn test_food_prompt_embeds_text_once() {
        let prompt = food_prompt("  2 rotis and dal  ");
        assert!(prompt.contains("Meal: \"2 rotis and dal\""));
        assert!(!prompt.contains(TEXT_PLACEHOLDER));
    }

    #[test]
    fn test_workout_prompt_lists_every_group() {
        let prompt = workout_prompt("Monday: Legs");
        for group in MuscleGroup::ALL {
            assert!(prompt.contains(group.as_str()));
        }
        assert!(!prompt.contains(MUSCLE_GROUPS_PLACEHOLDER));
    }

    #[test]
    fn test_user_text_is_not_rescanned() {
        let prompt = workout_prompt("Day {{MUSCLE_GROUPS}}: x");
        assert!(prompt.contains("Day {{MUSCLE_GROUPS}}: x"));
    }

    #[test]
    fn test_request_carries_sampling_settings() {
        let config = ResolverConfig::default();
        let request = food_request("rice", &config);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.max_tokens, Some(2048));
        assert!(request.json_response);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            serde_json::to_string(&food_request("rice", &config)).unwrap()
        );
    }
}
