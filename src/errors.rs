// ABOUTME: Error handling entry point for the logbook crate
// ABOUTME: Re-exports the unified error types defined in logbook-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `logbook-core` so the calculator crate shares them;
//! this module keeps the familiar `crate::errors` path.

pub use logbook_core::errors::{AppError, AppResult, ErrorCode};
