// ABOUTME: Core types and constants for the Pierre logbook parsers
// ABOUTME: Foundation crate with error handling, parse result models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Logbook Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! logbook. It changes rarely, so the parser and calculator crates compile
//! against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Defaults and thresholds organized by domain
//! - **models**: Food, workout, and parse-outcome data types
//! - **rounding**: One-decimal and whole-number rounding used by every calculator

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Parsed food, workout, and outcome models
pub mod models;

/// Rounding helpers for macros, weights, and scores
pub mod rounding;
