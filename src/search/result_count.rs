// SPDX-License-Identifier: MPL-2.0
//! Requested number of results (`top_k`).

use crate::app::config::{DEFAULT_RESULT_COUNT, MAX_RESULT_COUNT, MIN_RESULT_COUNT};
use std::fmt;

/// Result count, guaranteed to be within the valid range (1–10000).
///
/// Every input path (track drag, typed text, step buttons, config default)
/// goes through this type, so the value sent to the backend never needs
/// clamping at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultCount(u32);

impl ResultCount {
    /// Creates a result count, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(i64::from(MIN_RESULT_COUNT), i64::from(MAX_RESULT_COUNT));
        // In range by construction.
        Self(u32::try_from(clamped).unwrap_or(DEFAULT_RESULT_COUNT))
    }

    /// Maps a horizontal position on the track (0.0 = left edge, 1.0 = right
    /// edge) linearly onto the range, rounding to the nearest integer.
    #[must_use]
    pub fn from_fraction(fraction: f32) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            f64::from(fraction).clamp(0.0, 1.0)
        };
        let span = f64::from(MAX_RESULT_COUNT - MIN_RESULT_COUNT);
        #[allow(clippy::cast_possible_truncation)]
        let value = (f64::from(MIN_RESULT_COUNT) + fraction * span).round() as i64;
        Self::new(value)
    }

    /// Parses typed text and clamps it.
    ///
    /// Returns `None` when the text is not a number (including an empty
    /// field), so the caller can keep the previous value while the user is
    /// still typing. Fractions are rounded.
    #[must_use]
    pub fn parse_clamped(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed: f64 = trimmed.parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let rounded = parsed.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64;
        Some(Self::new(rounded))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Position of the value on the track, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let fraction =
            (self.0 - MIN_RESULT_COUNT) as f32 / (MAX_RESULT_COUNT - MIN_RESULT_COUNT) as f32;
        fraction
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(i64::from(self.0) + 1)
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(i64::from(self.0) - 1)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_RESULT_COUNT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_RESULT_COUNT
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        Self(DEFAULT_RESULT_COUNT)
    }
}

impl From<u32> for ResultCount {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(ResultCount::new(0).value(), MIN_RESULT_COUNT);
        assert_eq!(ResultCount::new(-50).value(), MIN_RESULT_COUNT);
        assert_eq!(ResultCount::new(20_000).value(), MAX_RESULT_COUNT);
        assert_eq!(ResultCount::new(42).value(), 42);
    }

    #[test]
    fn default_matches_initial_page_value() {
        assert_eq!(ResultCount::default().value(), 8);
    }

    #[test]
    fn track_edges_map_to_bounds() {
        assert_eq!(ResultCount::from_fraction(0.0).value(), MIN_RESULT_COUNT);
        assert_eq!(ResultCount::from_fraction(1.0).value(), MAX_RESULT_COUNT);
        assert_eq!(ResultCount::from_fraction(-0.3).value(), MIN_RESULT_COUNT);
        assert_eq!(ResultCount::from_fraction(1.7).value(), MAX_RESULT_COUNT);
        assert_eq!(ResultCount::from_fraction(f32::NAN).value(), MIN_RESULT_COUNT);
    }

    #[test]
    fn track_midpoint_rounds_linearly() {
        // 1 + 0.5 * 9999 = 5000.5
        assert_eq!(ResultCount::from_fraction(0.5).value(), 5001);
    }

    #[test]
    fn fraction_is_inverse_at_bounds() {
        assert!((ResultCount::new(1).fraction() - 0.0).abs() < f32::EPSILON);
        assert!((ResultCount::new(10_000).fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn typed_values_are_clamped() {
        assert_eq!(ResultCount::parse_clamped("250").map(ResultCount::value), Some(250));
        assert_eq!(
            ResultCount::parse_clamped("99999").map(ResultCount::value),
            Some(MAX_RESULT_COUNT)
        );
        assert_eq!(
            ResultCount::parse_clamped("-4").map(ResultCount::value),
            Some(MIN_RESULT_COUNT)
        );
        assert_eq!(ResultCount::parse_clamped(" 12.6 ").map(ResultCount::value), Some(13));
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert_eq!(ResultCount::parse_clamped(""), None);
        assert_eq!(ResultCount::parse_clamped("abc"), None);
        assert_eq!(ResultCount::parse_clamped("inf"), None);
    }

    #[test]
    fn step_buttons_saturate() {
        let min = ResultCount::new(1);
        assert_eq!(min.decrement(), min);
        assert!(min.is_min());

        let max = ResultCount::new(10_000);
        assert_eq!(max.increment(), max);
        assert!(max.is_max());

        assert_eq!(ResultCount::new(9).increment().value(), 10);
    }
}
