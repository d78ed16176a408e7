// ABOUTME: Core configuration type definitions for logging and remote providers
// ABOUTME: Contains LogLevel and LlmProviderType enums with their environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level - only critical errors
    Error,
    /// Warning level - potential issues (provider soft failures land here)
    Warn,
    /// Info level - normal operational messages (default)
    #[default]
    Info,
    /// Debug level - detailed debugging information
    Debug,
    /// Trace level - very verbose tracing
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback (including "info")
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Remote completion providers, in resolution priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// Google Gemini - tried first
    Gemini,
    /// Groq (OpenAI-compatible Llama inference) - tried second
    Groq,
}

impl LlmProviderType {
    /// Every provider in the fixed order the resolver tries them
    pub const PRIORITY: [Self; 2] = [Self::Gemini, Self::Groq];

    /// Registry name, also used as the result source tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Groq => "groq",
        }
    }

    /// Environment variable holding the API key; presence enables the provider
    #[must_use]
    pub const fn api_key_env(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::Groq => "GROQ_API_KEY",
        }
    }

    /// Environment variable overriding the provider's default model
    #[must_use]
    pub const fn model_env(&self) -> &'static str {
        match self {
            Self::Gemini => "LOGBOOK_GEMINI_MODEL",
            Self::Groq => "LOGBOOK_GROQ_MODEL",
        }
    }

    /// Parse a provider name, `None` when unknown
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "groq" => Some(Self::Groq),
            _ => None,
        }
    }
}

impl Display for LlmProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
