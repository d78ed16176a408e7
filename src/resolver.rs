// ABOUTME: Tiered resolver turning meal and workout text into typed records
// ABOUTME: Local parser first, then providers in priority order, with local fallback on total failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tiered Resolution
//!
//! Every request runs the deterministic local parser first. A usable local
//! result (confidence above `low`) is returned without any network call.
//! Otherwise each configured provider is asked in turn, one request at a
//! time, and the first response that survives JSON extraction and strict
//! validation wins. Provider failures never reach the caller: each one is
//! logged at `warn` and recorded as a `"<provider>: <reason>"` diagnostic on
//! the outcome. When every provider fails the local result is returned with
//! its own (low) confidence.

use logbook_core::models::{Confidence, ParseOutcome, ParsedFoodResult, ParsedWorkoutProgram};
use serde_json::Value;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::config::{LogbookConfig, ResolverConfig};
use crate::errors::{AppError, AppResult};
use crate::llm::{prompts, ChatRequest, LlmProvider, LlmProviderRegistry};
use crate::parsers::{
    extract_json, parse_food_locally, parse_workout_locally, validate_food_response,
    validate_workout_response, ValidationError,
};

/// Why a single provider attempt was discarded
#[derive(Debug, Error)]
enum AttemptError {
    #[error("{}", .0.message)]
    Provider(AppError),
    #[error("response contained no JSON")]
    NoJson,
    #[error("invalid response: {0}")]
    Invalid(#[from] ValidationError),
}

impl AttemptError {
    /// `"<provider>: <reason>"`, without repeating a service name the message already carries
    fn diagnostic(&self, provider: &str) -> String {
        let message = self.to_string();
        let reason = message
            .split_once(": ")
            .filter(|(service, _)| service.eq_ignore_ascii_case(provider))
            .map_or(message.as_str(), |(_, rest)| rest);
        format!("{provider}: {reason}")
    }
}

/// Local parser first, remote providers as fallback
pub struct TieredResolver {
    providers: LlmProviderRegistry,
    config: ResolverConfig,
}

impl TieredResolver {
    /// Create a resolver over an explicit provider chain
    #[must_use]
    pub const fn new(providers: LlmProviderRegistry, config: ResolverConfig) -> Self {
        Self { providers, config }
    }

    /// Resolver that never leaves the process
    #[must_use]
    pub fn local_only() -> Self {
        Self::new(LlmProviderRegistry::new(), ResolverConfig::default())
    }

    /// Build the provider chain described by configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &LogbookConfig) -> AppResult<Self> {
        Ok(Self::new(
            LlmProviderRegistry::from_config(config)?,
            config.resolver.clone(),
        ))
    }

    /// Names of the providers that will be tried, in order
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.names()
    }

    /// Active resolver settings
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a meal description into an itemized macro breakdown
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or whitespace-only text; provider
    /// failures are reported as diagnostics, never as errors
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn resolve_food(&self, text: &str) -> AppResult<ParseOutcome<ParsedFoodResult>> {
        ensure_text(text)?;

        let local = parse_food_locally(text);
        let local_confidence = local.confidence;
        let ai_confidence = self.config.ai_confidence;
        let request = prompts::food_request(text, &self.config);

        Ok(self
            .resolve("food", local, local_confidence, &request, |value| {
                validate_food_response(value, ai_confidence)
            })
            .await)
    }

    /// Resolve a plain-text training program into days and exercises
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or whitespace-only text; provider
    /// failures are reported as diagnostics, never as errors
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn resolve_workout(
        &self,
        text: &str,
    ) -> AppResult<ParseOutcome<ParsedWorkoutProgram>> {
        ensure_text(text)?;

        let local = parse_workout_locally(text);
        let local_confidence = local.confidence();
        let request = prompts::workout_request(text, &self.config);

        Ok(self
            .resolve("workout", local, local_confidence, &request, validate_workout_response)
            .await)
    }

    async fn resolve<T, F>(
        &self,
        kind: &'static str,
        local: T,
        local_confidence: Confidence,
        request: &ChatRequest,
        validate: F,
    ) -> ParseOutcome<T>
    where
        F: Fn(&Value) -> Result<T, ValidationError> + Sync,
    {
        if local_confidence.is_usable() {
            debug!(kind, confidence = %local_confidence, "Local parse is usable, skipping providers");
            return ParseOutcome::local(local, local_confidence);
        }
        if self.providers.is_empty() {
            debug!(kind, "Local parse is low confidence and no provider is configured");
            return ParseOutcome::local(local, local_confidence);
        }

        let mut diagnostics = Vec::new();
        for provider in self.providers.list() {
            match self.attempt(provider, request, &validate).await {
                Ok(data) => {
                    info!(kind, provider = provider.name(), "Resolved by provider");
                    return ParseOutcome::from_provider(
                        data,
                        provider.name(),
                        self.config.ai_confidence,
                    )
                    .with_diagnostics(diagnostics);
                }
                Err(failure) => {
                    let diagnostic = failure.diagnostic(provider.name());
                    warn!(kind, provider = provider.name(), reason = %failure, "Provider attempt failed");
                    diagnostics.push(diagnostic);
                }
            }
        }

        info!(
            kind,
            failures = diagnostics.len(),
            "All providers failed, returning local result"
        );
        ParseOutcome::local(local, local_confidence).with_diagnostics(diagnostics)
    }

    async fn attempt<T, F>(
        &self,
        provider: &dyn LlmProvider,
        request: &ChatRequest,
        validate: &F,
    ) -> Result<T, AttemptError>
    where
        F: Fn(&Value) -> Result<T, ValidationError> + Sync,
    {
        let limit = self.config.provider_timeout;
        let response = timeout(limit, provider.complete(request))
            .await
            .map_err(|_| AttemptError::Provider(AppError::timeout(provider.name(), limit)))?
            .map_err(AttemptError::Provider)?;

        debug!(
            provider = provider.name(),
            model = %response.model,
            chars = response.content.len(),
            "Provider responded"
        );

        let value = extract_json(&response.content).ok_or(AttemptError::NoJson)?;
        Ok(validate(&value)?)
    }
}

fn ensure_text(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::invalid_input("text must not be empty"));
    }
    Ok(())
}

/// Parse a meal description through the resolver
///
/// # Errors
///
/// Returns `InvalidInput` for empty or whitespace-only text
pub async fn parse_food_text(
    resolver: &TieredResolver,
    text: &str,
) -> AppResult<ParseOutcome<ParsedFoodResult>> {
    resolver.resolve_food(text).await
}

/// Parse a workout program through the resolver
///
/// # Errors
///
/// Returns `InvalidInput` for empty or whitespace-only text
pub async fn parse_workout_text(
    resolver: &TieredResolver,
    text: &str,
) -> AppResult<ParseOutcome<ParsedWorkoutProgram>> {
    resolver.resolve_workout(text).await
}
