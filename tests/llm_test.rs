// ABOUTME: Unit tests for the provider abstraction layer
// ABOUTME: Tests message handling, request builders, the ordered registry, and extraction prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Test files don't require documentation - this is a rustc lint (not clippy)
#![allow(missing_docs)]

use std::collections::HashMap;

use pierre_logbook::config::{LogbookConfig, ResolverConfig};
use pierre_logbook::llm::prompts::{food_request, workout_prompt, workout_request, SYSTEM_PROMPT};
use pierre_logbook::llm::{
    ChatMessage, ChatRequest, GeminiProvider, GroqProvider, LlmProvider, LlmProviderRegistry,
    MessageRole,
};

fn config_with(vars: &[(&str, &str)]) -> LogbookConfig {
    let map: HashMap<&str, &str> = vars.iter().copied().collect();
    LogbookConfig::from_lookup(|key| map.get(key).map(|value| (*value).to_owned())).unwrap()
}

// ============================================================================
// MessageRole Tests
// ============================================================================

#[test]
fn test_message_role_as_str() {
    assert_eq!(MessageRole::System.as_str(), "system");
    assert_eq!(MessageRole::User.as_str(), "user");
    assert_eq!(MessageRole::Assistant.as_str(), "assistant");
}

#[test]
fn test_chat_message_constructors() {
    let system = ChatMessage::system("rules");
    let user = ChatMessage::user("2 rotis");
    let assistant = ChatMessage::assistant("{}");

    assert_eq!(system.role, MessageRole::System);
    assert_eq!(user.role, MessageRole::User);
    assert_eq!(user.content, "2 rotis");
    assert_eq!(assistant.role, MessageRole::Assistant);
}

// ============================================================================
// ChatRequest Tests
// ============================================================================

#[test]
fn test_chat_request_defaults() {
    let request = ChatRequest::new(vec![ChatMessage::user("hi")]);

    assert_eq!(request.messages.len(), 1);
    assert!(request.model.is_none());
    assert!(request.temperature.is_none());
    assert!(request.max_tokens.is_none());
    assert!(!request.json_response);
}

#[test]
fn test_chat_request_builder() {
    let request = ChatRequest::new(vec![ChatMessage::user("hi")])
        .with_model("llama-3.1-8b-instant")
        .with_temperature(0.5)
        .with_max_tokens(256)
        .with_json_response();

    assert_eq!(request.model.as_deref(), Some("llama-3.1-8b-instant"));
    assert_eq!(request.temperature, Some(0.5));
    assert_eq!(request.max_tokens, Some(256));
    assert!(request.json_response);
}

// ============================================================================
// Provider Tests
// ============================================================================

#[test]
fn test_provider_identity_and_default_models() {
    let gemini = GeminiProvider::new("key");
    assert_eq!(gemini.name(), "gemini");
    assert_eq!(gemini.display_name(), "Google Gemini");
    assert_eq!(gemini.default_model(), "gemini-2.5-flash");

    let groq = GroqProvider::new("key");
    assert_eq!(groq.name(), "groq");
    assert_eq!(groq.default_model(), "llama-3.1-8b-instant");

    let custom = GroqProvider::new("key").with_default_model("llama-3.3-70b-versatile");
    assert_eq!(custom.default_model(), "llama-3.3-70b-versatile");
}

#[test]
fn test_provider_debug_hides_api_key() {
    let debug = format!("{:?}", GeminiProvider::new("secret-key"));
    assert!(!debug.contains("secret-key"));

    let debug = format!("{:?}", GroqProvider::new("secret-key"));
    assert!(!debug.contains("secret-key"));
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_registry_keeps_registration_order() {
    let mut registry = LlmProviderRegistry::new();
    assert!(registry.is_empty());

    registry.register(Box::new(GroqProvider::new("b")));
    registry.register(Box::new(GeminiProvider::new("a")));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names(), vec!["groq", "gemini"]);
    assert!(registry.get("gemini").is_some());
    assert!(registry.get("openai").is_none());
}

#[test]
fn test_registry_from_config_follows_priority() {
    let config = config_with(&[
        ("GROQ_API_KEY", "b"),
        ("GEMINI_API_KEY", "a"),
        ("LOGBOOK_GROQ_MODEL", "m"),
    ]);
    let registry = LlmProviderRegistry::from_config(&config).unwrap();

    assert_eq!(registry.names(), vec!["gemini", "groq"]);
    assert_eq!(registry.get("groq").unwrap().default_model(), "m");
}

#[test]
fn test_registry_from_config_without_keys_is_empty() {
    let config = config_with(&[]);
    let registry = LlmProviderRegistry::from_config(&config).unwrap();
    assert!(registry.is_empty());
}

// ============================================================================
// Prompt Tests
// ============================================================================

#[test]
fn test_extraction_requests_embed_text() {
    let config = ResolverConfig::default();

    for request in [
        food_request("2 rotis, dal fry", &config),
        workout_request("Day 1: Push\nBench Press 4x8", &config),
    ] {
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert!(request.json_response);
        assert!(request.model.is_none());
    }

    let food = food_request("2 rotis, dal fry", &config);
    assert!(food.messages[1].content.contains("2 rotis, dal fry"));
}

#[test]
fn test_workout_prompt_is_deterministic() {
    let text = "Monday: Legs\nSquat 5x5";
    assert_eq!(workout_prompt(text), workout_prompt(text));
    assert!(workout_prompt(text).contains("Squat 5x5"));
}
