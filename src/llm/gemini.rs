// ABOUTME: Google Gemini provider implementation for structured meal and workout extraction
// ABOUTME: Calls the generateContent endpoint with JSON output mode and maps API errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio. `LOGBOOK_GEMINI_MODEL` overrides the default model.
//!
//! ## Supported Models
//!
//! - `gemini-2.5-flash` (default): fast model, ample for extraction prompts
//! - `gemini-2.5-flash-lite`: cheaper, lower latency
//! - `gemini-2.5-pro`: stronger reasoning at higher cost

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{
    body_preview, ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole, TokenUsage,
};
use crate::errors::AppError;

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Service label used in error messages
const SERVICE: &str = "Gemini";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Text part of a content block; non-text parts deserialize with `text: None`
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Usage metadata
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error structure
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key and a default client
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(api_key, Client::new())
    }

    /// Create a provider that shares an already configured HTTP client
    #[must_use]
    pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            client,
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Override the model used when requests do not name one
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Gemini has no system role in `contents`; user and system both map to "user"
    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System | MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }

    fn build_url(&self, model: &str, method: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{model}:{method}?key={}",
            self.api_key
        )
    }

    fn text_content(role: Option<String>, text: &str) -> GeminiContent {
        GeminiContent {
            role,
            parts: vec![ContentPart {
                text: Some(text.to_owned()),
            }],
        }
    }

    /// Split messages into conversation contents and the system instruction
    fn convert_messages(messages: &[ChatMessage]) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut contents = Vec::new();
        let mut system_instruction = None;

        for message in messages {
            if message.role == MessageRole::System {
                system_instruction = Some(Self::text_content(None, &message.content));
            } else {
                contents.push(Self::text_content(
                    Some(Self::convert_role(message.role).to_owned()),
                    &message.content,
                ));
            }
        }

        (contents, system_instruction)
    }

    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let (contents, system_instruction) = Self::convert_messages(&request.messages);

        GeminiRequest {
            contents,
            system_instruction,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                candidate_count: Some(1),
                response_mime_type: request.json_response.then_some("application/json"),
            }),
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_content(response: &GeminiResponse) -> Result<String, AppError> {
        let text: String = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::external_service(SERVICE, "empty response"));
        }
        Ok(text)
    }

    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    fn map_api_error(status: StatusCode, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body_preview(response_text), |e| e.message);

        match status.as_u16() {
            401 | 403 => AppError::external_auth_failed(SERVICE, format!("HTTP {status}: {message}")),
            429 => AppError::external_rate_limited(SERVICE, format!("HTTP {status}: {message}")),
            _ => AppError::external_service(SERVICE, format!("HTTP {status}: {message}")),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Failed to send request to Gemini API: {}", e);
                if e.is_timeout() || e.is_connect() {
                    AppError::external_unavailable(SERVICE, format!("request failed: {e}"))
                } else {
                    AppError::external_service(SERVICE, format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("failed to read response: {}", e.without_url()))
        })?;

        if !status.is_success() {
            warn!(status = %status, "Gemini API returned an error status");
            return Err(Self::map_api_error(status, &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response envelope");
                AppError::external_service(SERVICE, format!("malformed response envelope: {e}"))
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(AppError::external_service(SERVICE, api_error.message));
        }

        let content = Self::extract_content(&gemini_response)?;
        let usage = gemini_response
            .usage_metadata
            .as_ref()
            .map(Self::convert_usage);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!(chars = content.len(), ?finish_reason, "Received Gemini response");

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            usage,
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_system_message_becomes_instruction() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("parse only"),
            ChatMessage::user("2 rotis"),
        ])
        .with_temperature(0.1)
        .with_max_tokens(2048)
        .with_json_response();

        let body = serde_json::to_value(GeminiProvider::build_gemini_request(&request)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "parse only");
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_extract_content_joins_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiProvider::extract_content(&response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_missing_candidates_is_an_error() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(GeminiProvider::extract_content(&response).is_err());
    }

    #[test]
    fn test_rate_limit_maps_to_rate_limited_code() {
        let error = GeminiProvider::map_api_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"quota exceeded"}}"#,
        );
        assert_eq!(error.code, ErrorCode::ExternalRateLimited);
        assert!(error.message.contains("quota exceeded"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let provider = GeminiProvider::new("secret-key");
        assert!(!format!("{provider:?}").contains("secret-key"));
    }
}
