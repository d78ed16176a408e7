// ABOUTME: LLM provider abstraction layer used by the tiered parse resolver
// ABOUTME: Defines the completion contract plus the ordered provider registry built from config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Service Provider Interface
//!
//! This module defines the contract remote completion providers implement so
//! the resolver can ask them to structure meal and workout text.
//!
//! ## Key Concepts
//!
//! - **`LlmProvider`**: Async trait for one-shot (non-streaming) chat completion
//! - **`ChatMessage`**: Role-based message structure
//! - **`ChatRequest`**: Request configuration including model, temperature, and JSON mode
//! - **`LlmProviderRegistry`**: Providers in the order the resolver tries them
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use pierre_logbook::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a structured data parser."),
//!         ChatMessage::user("2 rotis and dal"),
//!     ])
//!     .with_json_response();
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
mod groq;
pub mod prompts;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;

use std::time::Duration;

use async_trait::async_trait;
use logbook_core::constants::llm;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{LlmProviderType, LogbookConfig, ProviderSettings};
use crate::errors::AppError;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Ask the provider to emit a bare JSON document
    pub json_response: bool,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            json_response: false,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request JSON-only output where the provider supports it
    #[must_use]
    pub const fn with_json_response(mut self) -> Self {
        self.json_response = true;
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for chat completion
///
/// Implementations must treat non-2xx statuses and empty bodies as errors;
/// the resolver turns every error into a diagnostic and moves on.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier, also used as the result source tag
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Perform a chat completion (non-streaming)
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Build the shared HTTP client with connect and whole-request timeouts
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(llm::CONNECT_TIMEOUT_SECS))
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e))
}

/// Keep the first characters of a provider error body for diagnostics
pub(crate) fn body_preview(body: &str) -> String {
    body.chars().take(llm::ERROR_BODY_PREVIEW_CHARS).collect()
}

// ============================================================================
// Provider Registry
// ============================================================================

/// Ordered set of providers
///
/// Registration order is resolution order.
#[derive(Default)]
pub struct LlmProviderRegistry {
    providers: Vec<Box<dyn LlmProvider>>,
}

impl LlmProviderRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Build the registry from configuration, in provider priority order
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &LogbookConfig) -> Result<Self, AppError> {
        let mut registry = Self::new();
        if config.providers.is_empty() {
            info!("No provider API keys configured, parsing stays local");
            return Ok(registry);
        }

        let client = build_http_client(config.resolver.provider_timeout)?;
        for settings in &config.providers {
            registry.register(Self::build_provider(settings, client.clone()));
        }
        debug!(providers = ?registry.names(), "Provider registry built");
        Ok(registry)
    }

    fn build_provider(settings: &ProviderSettings, client: Client) -> Box<dyn LlmProvider> {
        match settings.kind {
            LlmProviderType::Gemini => {
                let provider = GeminiProvider::with_client(settings.api_key.clone(), client);
                Box::new(match &settings.model {
                    Some(model) => provider.with_default_model(model.clone()),
                    None => provider,
                })
            }
            LlmProviderType::Groq => {
                let provider = GroqProvider::with_client(settings.api_key.clone(), client);
                Box::new(match &settings.model {
                    Some(model) => provider.with_default_model(model.clone()),
                    None => provider,
                })
            }
        }
    }

    /// Register a provider after the ones already present
    pub fn register(&mut self, provider: Box<dyn LlmProvider>) {
        self.providers.push(provider);
    }

    /// Builder-style registration
    #[must_use]
    pub fn with_provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Get a provider by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn LlmProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(AsRef::as_ref)
    }

    /// All providers in resolution order
    #[must_use]
    pub fn list(&self) -> Vec<&dyn LlmProvider> {
        self.providers.iter().map(AsRef::as_ref).collect()
    }

    /// Provider names in resolution order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Number of registered providers
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
