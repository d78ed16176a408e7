// ABOUTME: Environment-based configuration for the logbook parsers and provider chain
// ABOUTME: Reads API keys, model overrides, timeouts, and sampling settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

use logbook_core::constants::llm;
use logbook_core::models::Confidence;
use tracing::{debug, info};

use super::types::{LlmProviderType, LogLevel};
use crate::errors::{AppError, AppResult};

/// Request timeout applied to every provider call, in seconds
pub const TIMEOUT_ENV_VAR: &str = "LOGBOOK_LLM_TIMEOUT_SECS";
/// Sampling temperature sent to providers
pub const TEMPERATURE_ENV_VAR: &str = "LOGBOOK_LLM_TEMPERATURE";
/// Completion token ceiling sent to providers
pub const MAX_TOKENS_ENV_VAR: &str = "LOGBOOK_LLM_MAX_TOKENS";
/// Confidence assigned to results produced by a remote provider
pub const AI_CONFIDENCE_ENV_VAR: &str = "LOGBOOK_AI_CONFIDENCE";
/// Log level used when `RUST_LOG` is not set
pub const LOG_LEVEL_ENV_VAR: &str = "LOGBOOK_LOG_LEVEL";

/// Credentials and model choice for one enabled provider
#[derive(Clone)]
pub struct ProviderSettings {
    /// Which provider these settings belong to
    pub kind: LlmProviderType,
    /// API key, never logged
    pub api_key: String,
    /// Model override; the provider default applies when `None`
    pub model: Option<String>,
}

impl Debug for ProviderSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderSettings")
            .field("kind", &self.kind)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

/// Knobs that shape how the tiered resolver talks to providers
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Upper bound for a single provider call
    pub provider_timeout: Duration,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token ceiling
    pub max_tokens: u32,
    /// Confidence stamped on provider-produced results
    pub ai_confidence: Confidence,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(llm::DEFAULT_TIMEOUT_SECS),
            temperature: llm::DEFAULT_TEMPERATURE,
            max_tokens: llm::DEFAULT_MAX_TOKENS,
            ai_confidence: Confidence::Medium,
        }
    }
}

impl ResolverConfig {
    /// Override the per-provider timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Override the confidence given to provider results
    #[must_use]
    pub const fn with_ai_confidence(mut self, confidence: Confidence) -> Self {
        self.ai_confidence = confidence;
        self
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct LogbookConfig {
    /// Fallback log level when `RUST_LOG` is absent
    pub log_level: LogLevel,
    /// Enabled providers in priority order
    pub providers: Vec<ProviderSettings>,
    /// Resolver behavior
    pub resolver: ResolverConfig,
}

impl LogbookConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric setting cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading logbook configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Blank values are treated as unset, so an exported but empty API key
    /// does not enable its provider.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric setting cannot be parsed or is out of range
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let providers: Vec<ProviderSettings> = LlmProviderType::PRIORITY
            .iter()
            .filter_map(|&kind| {
                read(kind.api_key_env()).map(|api_key| ProviderSettings {
                    kind,
                    api_key,
                    model: read(kind.model_env()),
                })
            })
            .collect();

        let defaults = ResolverConfig::default();
        let timeout_secs = parse_or(&read, TIMEOUT_ENV_VAR, llm::DEFAULT_TIMEOUT_SECS)?;
        let resolver = ResolverConfig {
            provider_timeout: Duration::from_secs(timeout_secs),
            temperature: parse_or(&read, TEMPERATURE_ENV_VAR, defaults.temperature)?,
            max_tokens: parse_or(&read, MAX_TOKENS_ENV_VAR, defaults.max_tokens)?,
            ai_confidence: read(AI_CONFIDENCE_ENV_VAR)
                .map_or(defaults.ai_confidence, |value| {
                    Confidence::from_str_or_default(&value)
                }),
        };

        let config = Self {
            log_level: read(LOG_LEVEL_ENV_VAR)
                .map_or_else(LogLevel::default, |value| LogLevel::from_str_or_default(&value)),
            providers,
            resolver,
        };
        config.validate()?;

        debug!(
            providers = ?config.provider_names(),
            timeout_secs,
            "Logbook configuration loaded"
        );
        Ok(config)
    }

    /// Check value ranges that parsing alone cannot enforce
    ///
    /// # Errors
    ///
    /// Returns a config error naming the first offending variable
    pub fn validate(&self) -> AppResult<()> {
        if self.resolver.provider_timeout.is_zero() {
            return Err(AppError::config_invalid(TIMEOUT_ENV_VAR, "0"));
        }
        if !(0.0..=2.0).contains(&self.resolver.temperature) {
            return Err(AppError::config_invalid(
                TEMPERATURE_ENV_VAR,
                &self.resolver.temperature.to_string(),
            ));
        }
        if self.resolver.max_tokens == 0 {
            return Err(AppError::config_invalid(MAX_TOKENS_ENV_VAR, "0"));
        }
        Ok(())
    }

    /// Drop every provider so resolution stays on the local parsers
    #[must_use]
    pub fn local_only(mut self) -> Self {
        self.providers.clear();
        self
    }

    /// Names of the enabled providers in the order they will be tried
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.kind.as_str()).collect()
    }

    /// Human readable summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        let providers = if self.providers.is_empty() {
            "none (local parsers only)".to_owned()
        } else {
            self.provider_names().join(" -> ")
        };
        format!(
            "providers: {providers}; timeout: {}s; temperature: {}; max tokens: {}; ai confidence: {}",
            self.resolver.provider_timeout.as_secs(),
            self.resolver.temperature,
            self.resolver.max_tokens,
            self.resolver.ai_confidence,
        )
    }
}

fn parse_or<T, F>(read: &F, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    read(key).map_or(Ok(default), |value| {
        value
            .parse()
            .map_err(|_| AppError::config_invalid(key, &value))
    })
}
