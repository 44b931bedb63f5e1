//! Tolerance configuration for approximate numeric comparisons.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{AssertError, FailureInfo};

/// How close two numbers must be to count as almost equal.
///
/// The two optional knobs accepted by the approximate assertions (`places`
/// and `epsilon`) are resolved into exactly one of these variants by
/// [`ToleranceMode::from_options`]. A knob that was passed as `0` is still a
/// knob that was passed; only `None` means absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceMode {
    /// Neither knob supplied. Differences are rounded to whole numbers.
    #[default]
    Unset,
    /// Absolute difference rounded to this many decimal digits must be zero.
    Places(i32),
    /// Absolute difference must not exceed this delta.
    Epsilon(f64),
}

impl ToleranceMode {
    /// Resolves the pair of optional knobs into a single mode.
    ///
    /// Supplying both is a configuration error, reported before any value is
    /// compared.
    pub fn from_options(places: Option<i32>, epsilon: Option<f64>) -> Result<Self, AssertError> {
        match (places, epsilon) {
            (Some(places), Some(epsilon)) => Err(AssertError::Configuration(
                FailureInfo::new("tolerance.conflict", "specify delta or places not both")
                    .with_context("places", places.to_string())
                    .with_context("epsilon", format!("{epsilon:?}"))
                    .with_hint("pass only one of `places` or `epsilon`"),
            )),
            (Some(places), None) => Ok(ToleranceMode::Places(places)),
            (None, Some(epsilon)) => Ok(ToleranceMode::Epsilon(epsilon)),
            (None, None) => Ok(ToleranceMode::Unset),
        }
    }

    /// Number of decimal places used for rounding, if this is a rounding mode.
    pub fn places(&self) -> Option<i32> {
        match self {
            ToleranceMode::Unset => Some(0),
            ToleranceMode::Places(places) => Some(*places),
            ToleranceMode::Epsilon(_) => None,
        }
    }

    /// Returns `true` when the absolute difference `diff` is within tolerance.
    ///
    /// NaN differences are never within tolerance.
    pub fn admits(&self, diff: f64) -> bool {
        match self {
            ToleranceMode::Epsilon(epsilon) => diff <= *epsilon,
            ToleranceMode::Unset | ToleranceMode::Places(_) => {
                rounds_to_zero(diff, self.places().unwrap_or(0))
            }
        }
    }

    /// Short name of the mode as used in failure messages.
    pub fn unit(&self) -> &'static str {
        match self {
            ToleranceMode::Epsilon(_) => "delta",
            ToleranceMode::Unset | ToleranceMode::Places(_) => "places",
        }
    }
}

impl Display for ToleranceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceMode::Unset => write!(f, "0 places"),
            ToleranceMode::Places(places) => write!(f, "{places} places"),
            ToleranceMode::Epsilon(epsilon) => write!(f, "{epsilon:?} delta"),
        }
    }
}

/// Fractional digits needed to write any finite `f64` exactly.
const MAX_FRACTION_DIGITS: i32 = 1074;

/// Returns `true` when `value` rounded to `places` decimal digits is zero.
///
/// Rounding is done on the exact binary value, half to even, so `0.05`
/// (slightly above one half of `0.1`) rounds up while `5.0` at `-1` places
/// rounds down to zero. Negative `places` round to tens, hundreds and so on,
/// and saturate: past the range of `f64` every finite value rounds to zero.
/// Non-finite values never do.
pub fn rounds_to_zero(value: f64, places: i32) -> bool {
    if !value.is_finite() {
        return false;
    }
    let value = value.abs();
    if places > MAX_FRACTION_DIGITS {
        return value == 0.0;
    }
    if places >= 0 {
        let rendered = format!("{:.*}", places as usize, value);
        return rendered.bytes().all(|b| b == b'0' || b == b'.');
    }

    // Zero iff value <= 5 * 10^(width - 1), ties included.
    let width = places.unsigned_abs() as usize;
    let whole = value.trunc();
    let digits = format!("{whole:.0}");
    if digits.len() != width {
        return digits.len() < width;
    }
    let half = format!("5{}", "0".repeat(width - 1));
    match digits.as_str().cmp(half.as_str()) {
        Ordering::Less => true,
        Ordering::Equal => value == whole,
        Ordering::Greater => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_handles_negative_places() {
        assert!(rounds_to_zero(49.0, -2));
        assert!(rounds_to_zero(50.0, -2));
        assert!(!rounds_to_zero(50.5, -2));
        assert!(!rounds_to_zero(1234.0, -2));
        assert!(rounds_to_zero(0.3, -1));
    }

    #[test]
    fn rounding_uses_the_exact_value() {
        assert!(rounds_to_zero(0.04, 1));
        assert!(!rounds_to_zero(0.05, 1));
        assert!(!rounds_to_zero(0.005, 2));
        assert!(rounds_to_zero(0.5, 0));
        assert!(!rounds_to_zero(1.5, 0));
        assert!(!rounds_to_zero(2.5, 0));
    }

    #[test]
    fn extreme_places_saturate() {
        assert!(rounds_to_zero(5.0, -400));
        assert!(rounds_to_zero(f64::MAX, i32::MIN));
        assert!(!rounds_to_zero(f64::MIN_POSITIVE, i32::MAX));
        assert!(rounds_to_zero(0.0, i32::MAX));
        assert!(!rounds_to_zero(f64::INFINITY, i32::MIN));
        assert!(!rounds_to_zero(f64::NAN, 0));
    }

    #[test]
    fn unset_rounds_to_whole_numbers() {
        assert!(ToleranceMode::Unset.admits(0.4));
        assert!(!ToleranceMode::Unset.admits(0.6));
    }
}
