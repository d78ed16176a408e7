// ABOUTME: Logging configuration and structured logging setup for the logbook CLI and library
// ABOUTME: Writes tracing output to stderr so JSON results on stdout stay machine readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration built on `tracing-subscriber`

use std::env;
use std::io;

use anyhow::Result;
use tracing::{debug, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LogLevel;

/// Service name attached to the startup log line
pub const SERVICE_NAME: &str = "pierre-logbook";

const NOISY_TARGETS: [&str; 3] = ["hyper", "reqwest", "rustls"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is absent
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events (provider calls are instrumented)
    pub include_spans: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Multi-line pretty output for development
    Pretty,
    /// Single-line output (CLI default)
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn.to_string(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `fallback` is used as the level when `RUST_LOG` is unset.
    #[must_use]
    pub fn from_env(fallback: LogLevel) -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| fallback.to_string());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Compact, |value| LogFormat::from_str_or_default(&value));

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
        }
    }

    /// Raise the level to debug (CLI `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = LogLevel::Debug.to_string();
        self
    }

    /// Build the filter, always quieting HTTP client internals
    fn env_filter(&self) -> EnvFilter {
        NOISY_TARGETS
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, target| {
                filter.add_directive(
                    format!("{target}=warn")
                        .parse()
                        .unwrap_or_else(|_| Level::WARN.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(compact_layer).try_init()?;
            }
        }

        debug!(
            service.name = SERVICE_NAME,
            service.version = env!("CARGO_PKG_VERSION"),
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env(fallback: LogLevel) -> Result<()> {
    LoggingConfig::from_env(fallback).init()
}
