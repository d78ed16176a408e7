// ABOUTME: Lenient JSON extraction from raw provider completions
// ABOUTME: Strips markdown fences, then falls back to the first balanced object or array span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Opening fence with an optional `json` tag, any case
static JSON_FENCE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)```json\s*").ok());

/// Any remaining fence
static FENCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"```\s*").ok());

/// Extract the JSON document a model returned
///
/// Tries, in order: the whole response with markdown fences removed, then
/// each balanced `{...}` or `[...]` span from left to right. Returns `None`
/// when nothing parses.
#[must_use]
pub fn extract_json(raw: &str) -> Option<Value> {
    let cleaned = strip_fences(raw);
    if let Ok(value) = serde_json::from_str::<Value>(cleaned.trim()) {
        return Some(value);
    }

    raw.char_indices()
        .filter(|(_, c)| matches!(c, '{' | '['))
        .filter_map(|(start, _)| balanced_span(raw, start))
        .find_map(|span| serde_json::from_str::<Value>(span).ok())
}

fn strip_fences(raw: &str) -> String {
    let mut cleaned = raw.to_owned();
    for pattern in [&JSON_FENCE_PATTERN, &FENCE_PATTERN]
        .into_iter()
        .filter_map(|pattern| pattern.as_ref())
    {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}

/// Span from `start` to its matching closer, honoring string literals
fn balanced_span(text: &str, start: usize) -> Option<&str> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(c) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
