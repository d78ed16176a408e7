// ABOUTME: Unit tests for environment-driven logbook configuration
// ABOUTME: Validates provider ordering, blank keys, numeric settings, and typed enum parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use pierre_logbook::config::environment::{
    AI_CONFIDENCE_ENV_VAR, LOG_LEVEL_ENV_VAR, MAX_TOKENS_ENV_VAR, TEMPERATURE_ENV_VAR,
    TIMEOUT_ENV_VAR,
};
use pierre_logbook::config::{LlmProviderType, LogLevel, LogbookConfig, ResolverConfig};
use pierre_logbook::errors::{AppResult, ErrorCode};
use pierre_logbook::models::Confidence;
use serial_test::serial;

fn load(vars: &[(&str, &str)]) -> AppResult<LogbookConfig> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    LogbookConfig::from_lookup(|key| map.get(key).cloned())
}

// ============================================================================
// Typed enums
// ============================================================================

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("warning"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_provider_type_parsing() {
    assert_eq!(LlmProviderType::parse("gemini"), Some(LlmProviderType::Gemini));
    assert_eq!(LlmProviderType::parse("Google"), Some(LlmProviderType::Gemini));
    assert_eq!(LlmProviderType::parse(" GROQ "), Some(LlmProviderType::Groq));
    assert_eq!(LlmProviderType::parse("openai"), None);

    assert_eq!(
        LlmProviderType::PRIORITY,
        [LlmProviderType::Gemini, LlmProviderType::Groq]
    );
    assert_eq!(LlmProviderType::Gemini.api_key_env(), "GEMINI_API_KEY");
    assert_eq!(LlmProviderType::Groq.api_key_env(), "GROQ_API_KEY");
    assert_eq!(LlmProviderType::Groq.to_string(), "groq");
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_empty_environment_uses_defaults() {
    let config = load(&[]).unwrap();

    assert!(config.providers.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.resolver, ResolverConfig::default());
    assert_eq!(config.resolver.provider_timeout, Duration::from_secs(20));
    assert_eq!(config.resolver.max_tokens, 2048);
    assert_eq!(config.resolver.ai_confidence, Confidence::Medium);
    assert!(config.summary().contains("none (local parsers only)"));
}

// ============================================================================
// Providers
// ============================================================================

#[test]
fn test_providers_follow_priority_order() {
    let config = load(&[("GROQ_API_KEY", "groq-key"), ("GEMINI_API_KEY", "gemini-key")]).unwrap();

    assert_eq!(config.provider_names(), vec!["gemini", "groq"]);
    assert_eq!(config.providers[0].api_key, "gemini-key");
    assert!(config.summary().contains("gemini -> groq"));
}

#[test]
fn test_blank_key_does_not_enable_provider() {
    let config = load(&[("GEMINI_API_KEY", "   "), ("GROQ_API_KEY", "groq-key")]).unwrap();
    assert_eq!(config.provider_names(), vec!["groq"]);
}

#[test]
fn test_model_override() {
    let config = load(&[
        ("GEMINI_API_KEY", "key"),
        ("LOGBOOK_GEMINI_MODEL", "gemini-2.5-pro"),
    ])
    .unwrap();

    assert_eq!(config.providers[0].model.as_deref(), Some("gemini-2.5-pro"));
}

#[test]
fn test_api_key_is_redacted_in_debug_output() {
    let config = load(&[("GEMINI_API_KEY", "super-secret")]).unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
    assert!(!config.summary().contains("super-secret"));
}

#[test]
fn test_local_only_drops_providers() {
    let config = load(&[("GEMINI_API_KEY", "a"), ("GROQ_API_KEY", "b")])
        .unwrap()
        .local_only();

    assert!(config.providers.is_empty());
    assert!(config.provider_names().is_empty());
}

// ============================================================================
// Numeric settings
// ============================================================================

#[test]
fn test_numeric_overrides() {
    let config = load(&[
        (TIMEOUT_ENV_VAR, "5"),
        (TEMPERATURE_ENV_VAR, "0.4"),
        (MAX_TOKENS_ENV_VAR, "512"),
        (AI_CONFIDENCE_ENV_VAR, "high"),
        (LOG_LEVEL_ENV_VAR, "debug"),
    ])
    .unwrap();

    assert_eq!(config.resolver.provider_timeout, Duration::from_secs(5));
    assert!((config.resolver.temperature - 0.4).abs() < f32::EPSILON);
    assert_eq!(config.resolver.max_tokens, 512);
    assert_eq!(config.resolver.ai_confidence, Confidence::High);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_invalid_numbers_are_rejected() {
    let cases = [
        (TIMEOUT_ENV_VAR, "soon"),
        (TIMEOUT_ENV_VAR, "0"),
        (TEMPERATURE_ENV_VAR, "warm"),
        (TEMPERATURE_ENV_VAR, "2.5"),
        (MAX_TOKENS_ENV_VAR, "-1"),
        (MAX_TOKENS_ENV_VAR, "0"),
    ];

    for (key, value) in cases {
        let error = load(&[(key, value)]).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{key}={value}");
        assert!(error.message.contains(key), "{}", error.message);
    }
}

#[test]
fn test_unknown_ai_confidence_falls_back() {
    let config = load(&[(AI_CONFIDENCE_ENV_VAR, "certain")]).unwrap();
    assert_eq!(config.resolver.ai_confidence, Confidence::Medium);
}

// ============================================================================
// Process environment
// ============================================================================

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var("GROQ_API_KEY", "from-env");
    env::remove_var("GEMINI_API_KEY");
    env::set_var(MAX_TOKENS_ENV_VAR, "1024");

    let config = LogbookConfig::from_env().unwrap();

    env::remove_var("GROQ_API_KEY");
    env::remove_var(MAX_TOKENS_ENV_VAR);

    assert_eq!(config.provider_names(), vec!["groq"]);
    assert_eq!(config.resolver.max_tokens, 1024);
}
