// ABOUTME: Configuration module for the logbook parsers and remote provider chain
// ABOUTME: Groups typed enums and the environment loader behind one import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Types**: log levels and the provider registry with its environment variable names
//! - **Environment**: `LogbookConfig` loaded from environment variables or any key lookup

/// Environment-driven configuration loading
pub mod environment;
/// Strongly typed configuration enums
pub mod types;

pub use environment::{LogbookConfig, ProviderSettings, ResolverConfig};
pub use types::{LlmProviderType, LogLevel};
