// ABOUTME: Main library entry point for the Pierre logbook parsers
// ABOUTME: Turns meal and workout text into typed records via local parsing with LLM fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Logbook
//!
//! Natural-language logging for a fitness tracker. A meal description such
//! as `"2 rotis, dal fry, glass of milk"` becomes an itemized macro
//! breakdown; a plain-text training plan becomes days of exercises with
//! sets, reps, and muscle groups.
//!
//! ## Architecture
//!
//! - **parsers**: deterministic local parsers, JSON extraction, and
//!   validation of provider output
//! - **llm**: the `LlmProvider` trait with Gemini and Groq clients
//! - **resolver**: local-first tiered resolution with soft provider failure
//! - **config**: environment-driven provider and resolver settings
//! - **logging**: `tracing` subscriber setup
//!
//! Numeric calculators (one-rep max, recovery score, plateau detection)
//! live in `logbook-intelligence` and are re-exported as [`intelligence`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_logbook::errors::AppResult;
//! use pierre_logbook::resolver::{parse_food_text, TieredResolver};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let resolver = TieredResolver::local_only();
//!     let outcome = parse_food_text(&resolver, "2 rotis, dal fry, glass of milk").await?;
//!     println!("{} kcal from {}", outcome.data.total_calories, outcome.source);
//!     Ok(())
//! }
//! ```

/// Environment configuration for providers and the resolver
pub mod config;

/// Unified error handling re-exported from `logbook-core`
pub mod errors;

/// Input text loading for the CLI
pub mod input;

/// LLM provider abstraction and the Gemini and Groq clients
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Local parsers and provider response validation
pub mod parsers;

/// Tiered local-then-provider resolution
pub mod resolver;

/// Shared constants from `logbook-core`
pub use logbook_core::constants;
/// Food, workout, and parse-outcome models from `logbook-core`
pub use logbook_core::models;
/// Rounding helpers from `logbook-core`
pub use logbook_core::rounding;
/// Numeric training and body-metric calculators
pub use logbook_intelligence as intelligence;

pub use resolver::{parse_food_text, parse_workout_text, TieredResolver};
