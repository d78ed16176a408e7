// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for logbook-cli
// ABOUTME: Provides access to text parsing and calculator commands

pub mod metrics;
pub mod parse;
