// ABOUTME: Parse outcome envelope shared by the food and workout pipelines
// ABOUTME: Confidence tiers, result source attribution, and soft-failure diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// How much a caller should trust a parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Nothing usable was recognized
    Low,
    /// Usable, but should be confirmed by the user
    Medium,
    /// Structurally complete result
    High,
}

impl Confidence {
    /// Parse from string with fallback to `Medium`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Whether a tiered resolver may stop at this result
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        !matches!(self, Self::Low)
    }
}

impl Display for Confidence {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Which tier produced a result
///
/// Serialized as a bare string: `"local"` or the provider's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseSource {
    /// Deterministic local heuristic parser
    Local,
    /// Remote completion provider, by its registry name (e.g. `gemini`, `groq`)
    Provider(String),
}

impl ParseSource {
    /// Build a provider source from its name
    #[must_use]
    pub fn provider(name: impl Into<String>) -> Self {
        Self::Provider(name.into())
    }

    /// Source name as it appears in serialized output
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Provider(name) => name,
        }
    }

    /// Whether the result came from the local parser
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl Display for ParseSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParseSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Tagged result returned by the public parsing entry points
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome<T> {
    /// Parsed, validated data
    pub data: T,
    /// Tier that produced `data`
    pub source: ParseSource,
    /// Trust level of `data`
    pub confidence: Confidence,
    /// Soft-failure reasons from providers tried before `source`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl<T> ParseOutcome<T> {
    /// Outcome produced by the local parser
    #[must_use]
    pub fn local(data: T, confidence: Confidence) -> Self {
        Self {
            data,
            source: ParseSource::Local,
            confidence,
            diagnostics: Vec::new(),
        }
    }

    /// Outcome produced by a remote provider
    #[must_use]
    pub fn from_provider(data: T, provider: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            data,
            source: ParseSource::provider(provider),
            confidence,
            diagnostics: Vec::new(),
        }
    }

    /// Attach diagnostics collected while resolving
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Vec<String>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
