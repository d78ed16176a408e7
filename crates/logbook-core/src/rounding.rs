// ABOUTME: Rounding helpers shared by parsers and calculators
// ABOUTME: Keeps every macro, weight, and score rounded the same way across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round to one decimal place (half away from zero)
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (half away from zero)
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a non-negative quantity to the nearest whole number
///
/// Negative and non-finite inputs clamp to zero.
#[must_use]
pub fn round_whole(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert!((round1(133.333_333) - 133.3).abs() < f64::EPSILON);
        assert!((round1(2.01) - 2.0).abs() < 1e-9);
        assert!((round1(-1.26) + 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_round_whole_clamps() {
        assert_eq!(round_whole(99.5), 100);
        assert_eq!(round_whole(-3.0), 0);
        assert_eq!(round_whole(f64::NAN), 0);
    }
}
