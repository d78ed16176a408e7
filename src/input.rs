// ABOUTME: Reads the free text handed to the parsers from an argument, a file, or stdin
// ABOUTME: Also parses dated weigh-in logs for plateau checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use logbook_intelligence::WeightSample;
use tokio::fs;
use tokio::io::{self, AsyncReadExt};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Where the text to parse comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Given inline on the command line
    Inline(String),
    /// Read from a file
    File(PathBuf),
    /// Read from standard input (`-`)
    Stdin,
}

impl TextSource {
    /// Pick a source from an optional inline argument and an optional path
    ///
    /// Inline text of `-` means standard input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when both or neither are given
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> AppResult<Self> {
        match (text, file) {
            (Some(_), Some(_)) => Err(AppError::invalid_input(
                "provide either inline text or --file, not both",
            )),
            (None, None) => Err(AppError::invalid_input(
                "provide inline text, --file, or - for stdin",
            )),
            (Some(text), None) if text.trim() == "-" => Ok(Self::Stdin),
            (Some(text), None) => Ok(Self::Inline(text)),
            (None, Some(path)) => Ok(Self::File(path)),
        }
    }

    /// Load the text
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read, or the text is blank
    pub async fn read(self) -> AppResult<String> {
        let text = match self {
            Self::Inline(text) => text,
            Self::File(path) => read_file(&path).await?,
            Self::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .await
                    .map_err(|e| AppError::invalid_input(format!("failed to read stdin: {e}")))?;
                buffer
            }
        };

        if text.trim().is_empty() {
            return Err(AppError::invalid_input("input text is empty"));
        }
        Ok(text)
    }
}

async fn read_file(path: &Path) -> AppResult<String> {
    debug!(path = %path.display(), "Reading input file");
    fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("failed to read {}: {e}", path.display()))
    })
}

/// Resolve and read the input text in one step
///
/// # Errors
///
/// See [`TextSource::from_args`] and [`TextSource::read`]
pub async fn read_text_input(text: Option<String>, file: Option<PathBuf>) -> AppResult<String> {
    TextSource::from_args(text, file)?.read().await
}

/// Parse a weigh-in log: one `YYYY-MM-DD,kg` pair per line
///
/// Blank lines and lines starting with `#` are skipped. Samples keep file order.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first malformed line
pub fn parse_weigh_ins(text: &str) -> AppResult<Vec<WeightSample>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            parse_weigh_in(line).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "line {number}: expected `YYYY-MM-DD,kg`, got `{line}`"
                ))
            })
        })
        .collect()
}

fn parse_weigh_in(line: &str) -> Option<WeightSample> {
    let (date, weight) = line.split_once(',')?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let weight_kg: f64 = weight.trim().parse().ok()?;
    (weight_kg.is_finite() && weight_kg > 0.0).then_some(WeightSample { date, weight_kg })
}

/// Read and parse a weigh-in log file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed
pub async fn read_weigh_ins(path: &Path) -> AppResult<Vec<WeightSample>> {
    parse_weigh_ins(&read_file(path).await?)
}
