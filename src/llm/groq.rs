// ABOUTME: Groq provider implementation over the OpenAI-compatible chat completions API
// ABOUTME: Second tier of the parse resolver, used when Gemini is absent or fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Groq Provider
//!
//! Implementation of the `LlmProvider` trait for Groq's LPU-accelerated inference.
//!
//! ## Configuration
//!
//! Set the `GROQ_API_KEY` environment variable with your API key from
//! Groq Console: <https://console.groq.com/keys>. `LOGBOOK_GROQ_MODEL`
//! overrides the default model.
//!
//! ## Supported Models
//!
//! - `llama-3.1-8b-instant` (default): fast responses, enough for extraction
//! - `llama-3.3-70b-versatile`: higher quality general purpose

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{body_preview, ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::errors::AppError;

/// Default model to use
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Base URL for the Groq API (OpenAI-compatible)
const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Service label used in error messages
const SERVICE: &str = "Groq";

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// Groq API request structure (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    stream: bool,
}

/// `{"type": "json_object"}` switch for JSON mode
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Message structure for Groq API (OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroqMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for GroqMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Groq API response structure (OpenAI-compatible)
#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    #[serde(default)]
    usage: Option<GroqUsage>,
    model: String,
}

/// Choice in Groq response
#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
    finish_reason: Option<String>,
}

/// Message in Groq response
#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

/// Usage statistics in Groq response
#[derive(Debug, Deserialize)]
struct GroqUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Groq API error response
#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Groq LLM provider using LPU-accelerated inference
pub struct GroqProvider {
    client: Client,
    api_key: String,
    default_model: String,
}

impl Debug for GroqProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GroqProvider")
            .field("api_key", &"[REDACTED]")
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

impl GroqProvider {
    /// Create a new Groq provider with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(api_key, Client::new())
    }

    /// Create a provider that shares an already configured HTTP client
    #[must_use]
    pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Override the model used when requests do not name one
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Build the API URL for a given endpoint
    fn api_url(endpoint: &str) -> String {
        format!("{API_BASE_URL}/{endpoint}")
    }

    fn build_groq_request(&self, request: &ChatRequest) -> GroqRequest {
        GroqRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.default_model.clone()),
            messages: request.messages.iter().map(GroqMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_response.then_some(ResponseFormat {
                format_type: "json_object",
            }),
            stream: false,
        }
    }

    /// Parse error response from Groq API
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        serde_json::from_str::<GroqErrorResponse>(body).map_or_else(
            |_| AppError::external_service(SERVICE, format!("HTTP {status}: {}", body_preview(body))),
            |error_response| {
                let message = error_response.error.message;
                match status.as_u16() {
                    401 | 403 => AppError::external_auth_failed(SERVICE, format!("HTTP {status}: {message}")),
                    429 => AppError::external_rate_limited(SERVICE, format!("HTTP {status}: {message}")),
                    _ => {
                        let error_type = error_response
                            .error
                            .error_type
                            .unwrap_or_else(|| "unknown".to_owned());
                        AppError::external_service(
                            SERVICE,
                            format!("HTTP {status}: {error_type} - {message}"),
                        )
                    }
                }
            },
        )
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn display_name(&self) -> &'static str {
        "Groq (Llama)"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        debug!("Sending chat completion request to Groq");

        let groq_request = self.build_groq_request(request);

        let response = self
            .client
            .post(Self::api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Groq API: {}", e);
                if e.is_timeout() || e.is_connect() {
                    AppError::external_unavailable(SERVICE, format!("request failed: {e}"))
                } else {
                    AppError::external_service(SERVICE, format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Groq API response: {}", e);
            AppError::external_service(SERVICE, format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            warn!(status = %status, "Groq API returned an error status");
            return Err(Self::parse_error_response(status, &body));
        }

        let groq_response: GroqResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Groq API response: {}", e);
            AppError::external_service(SERVICE, format!("malformed response envelope: {e}"))
        })?;

        let choice = groq_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(AppError::external_service(SERVICE, "empty response"));
        }

        debug!(
            "Received response from Groq: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: groq_response.model,
            usage: groq_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
