//! Approximate numeric comparisons.
//!
//! Tolerance is given either as a number of decimal `places` or as an absolute
//! `epsilon`, never both. Epsilon comparisons are subject to the usual binary
//! floating point representation error: `1.0` and `1.01` differ by slightly
//! more than `0.01`.

use assertlib_core::{AssertResult, FailureInfo, ToleranceMode};

use crate::report::{binary, configuration, failure};

/// Asserts that `a` and `b` are equal within the given tolerance.
///
/// Passing both `places` and `epsilon` is a configuration error and is
/// reported before the operands are looked at.
///
/// ```
/// use assertlib::assert_almost_equal;
///
/// assert_almost_equal(1.1, 1.111, Some(1), None).unwrap();
/// assert_almost_equal(1.1, 1.11, None, Some(0.02)).unwrap();
/// assert!(assert_almost_equal(1.0, 2.0, Some(1), Some(0.1)).unwrap_err().is_configuration());
/// ```
pub fn assert_almost_equal(
    a: impl Into<f64>,
    b: impl Into<f64>,
    places: Option<i32>,
    epsilon: Option<f64>,
) -> AssertResult {
    let mode = ToleranceMode::from_options(places, epsilon).map_err(configuration)?;
    assert_almost_equal_with(a, b, mode)
}

/// Asserts that `a` and `b` differ by more than the given tolerance.
pub fn assert_not_almost_equal(
    a: impl Into<f64>,
    b: impl Into<f64>,
    places: Option<i32>,
    epsilon: Option<f64>,
) -> AssertResult {
    let mode = ToleranceMode::from_options(places, epsilon).map_err(configuration)?;
    assert_not_almost_equal_with(a, b, mode)
}

/// [`assert_almost_equal`] with an already resolved [`ToleranceMode`].
pub fn assert_almost_equal_with(
    a: impl Into<f64>,
    b: impl Into<f64>,
    mode: ToleranceMode,
) -> AssertResult {
    let (a, b) = (a.into(), b.into());
    if a == b {
        return Ok(());
    }
    let diff = (a - b).abs();
    if mode.admits(diff) {
        return Ok(());
    }
    let message = format!("{a:?} != {b:?} within {mode}");
    Err(failure(tolerance_info("almost_equal", message, a, b, mode, diff)))
}

/// [`assert_not_almost_equal`] with an already resolved [`ToleranceMode`].
pub fn assert_not_almost_equal_with(
    a: impl Into<f64>,
    b: impl Into<f64>,
    mode: ToleranceMode,
) -> AssertResult {
    let (a, b) = (a.into(), b.into());
    if a == b {
        let message = format!("{a:?} == {b:?}");
        return Err(failure(tolerance_info("not_almost_equal", message, a, b, mode, 0.0)));
    }
    let diff = (a - b).abs();
    if !mode.admits(diff) {
        return Ok(());
    }
    let message = format!("{a:?} == {b:?} within {mode}");
    Err(failure(tolerance_info("not_almost_equal", message, a, b, mode, diff)))
}

fn tolerance_info(
    code: &str,
    message: String,
    a: f64,
    b: f64,
    mode: ToleranceMode,
    diff: f64,
) -> FailureInfo {
    binary(code, message, &a, &b)
        .with_context("mode", mode.to_string())
        .with_context("difference", format!("{diff:?}"))
}
