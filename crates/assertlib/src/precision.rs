//! Decimal precision of a rendered number.

use std::fmt::Debug;

use assertlib_core::{AssertResult, FailureInfo};

use crate::report::{failure, render};

/// Asserts that `a` is written with exactly `amount` digits after the decimal point.
///
/// The number is rendered as written in its own type: integers have no
/// decimal point, floats use their shortest round-trip form (`1.0`, `1.111`,
/// `1e-7`). Digits of an exponent suffix are not counted, and renderings
/// without a decimal point have no fractional digits.
///
/// ```
/// use assertlib::assert_precision;
///
/// assert_precision(1.111, 3).unwrap();
/// assert_precision(2, 0).unwrap();
/// assert!(assert_precision(1.11, 3).is_err());
/// ```
pub fn assert_precision<N>(a: N, amount: usize) -> AssertResult
where
    N: Into<f64> + Debug,
{
    let rendered = render(&a);
    let digits = fractional_digits(&rendered);
    if digits == amount {
        return Ok(());
    }
    Err(failure(
        FailureInfo::new(
            "precision",
            format!("{rendered} does not have {amount} precision"),
        )
        .with_context("value", rendered)
        .with_context("expected", amount.to_string())
        .with_context("actual", digits.to_string()),
    ))
}

fn fractional_digits(rendered: &str) -> usize {
    rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| {
            fraction.chars().take_while(char::is_ascii_digit).count()
        })
}

#[cfg(test)]
mod tests {
    use super::fractional_digits;

    #[test]
    fn exponent_suffix_is_not_counted() {
        assert_eq!(fractional_digits("1.5e-7"), 1);
        assert_eq!(fractional_digits("1e16"), 0);
        assert_eq!(fractional_digits("NaN"), 0);
        assert_eq!(fractional_digits("0.125"), 3);
    }
}
