// ABOUTME: Shared constants for logbook parsing and provider calls
// ABOUTME: Groups defaults by domain so parsers, resolver, and config agree on values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain.

/// Remote completion defaults
pub mod llm {
    /// Sampling temperature for structured extraction prompts
    pub const DEFAULT_TEMPERATURE: f32 = 0.1;
    /// Upper bound on generated tokens per provider call
    pub const DEFAULT_MAX_TOKENS: u32 = 2048;
    /// Whole-call timeout for one provider request, in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
    /// TCP/TLS connect timeout, in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;
    /// Maximum characters of a provider error body kept in diagnostics
    pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;
}

/// Local food parser tuning
pub mod food {
    /// Characters scanned before a matched food for spelled-out quantities
    pub const NUMBER_WORD_WINDOW_CHARS: usize = 20;
    /// Default number of results returned by reference food search
    pub const DEFAULT_SEARCH_LIMIT: usize = 10;
}

/// Body-metric and training analysis thresholds
pub mod analysis {
    /// Samples inspected by plateau detection
    pub const PLATEAU_WINDOW_DAYS: usize = 14;
    /// Weight range (kg) below which the window counts as a plateau
    pub const PLATEAU_RANGE_KG: f64 = 0.5;
    /// RPE assumed for sets logged without one
    pub const DEFAULT_RPE: f64 = 7.0;
    /// Average RPE above which a declining trend calls for a deload
    pub const DELOAD_RPE_THRESHOLD: f64 = 9.0;
    /// Average RPE at or below which load may increase
    pub const INCREASE_RPE_CEILING: f64 = 8.0;
    /// Consecutive weekly values that must strictly fall to count as a decline
    pub const DECLINE_WEEKS: usize = 3;
    /// Nightly sleep target used by the recovery score
    pub const SLEEP_TARGET_HOURS: f64 = 8.0;
}
