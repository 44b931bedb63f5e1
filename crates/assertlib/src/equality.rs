//! Value equality and boolean coercion checks.

use std::fmt::Debug;

use assertlib_core::{AssertResult, FailureInfo, Truthy};

use crate::report::{binary, failure, render};

/// Asserts that `x == y`.
///
/// ```
/// use assertlib::assert_equal;
///
/// assert_equal(&1, &1).unwrap();
/// assert_equal(&String::from("1"), "1").unwrap();
/// ```
pub fn assert_equal<T, U>(x: &T, y: &U) -> AssertResult
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if x == y {
        return Ok(());
    }
    let message = format!("{} is not equal to {}", render(x), render(y));
    Err(failure(binary("equal", message, x, y)))
}

/// Asserts that `x != y`.
pub fn assert_not_equal<T, U>(x: &T, y: &U) -> AssertResult
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    if x != y {
        return Ok(());
    }
    let message = format!("{} is equal to {}", render(x), render(y));
    Err(failure(binary("not_equal", message, x, y)))
}

/// Asserts that `x` coerces to `true` (see [`Truthy`]).
pub fn assert_true<T: Truthy + Debug + ?Sized>(x: &T) -> AssertResult {
    if x.is_truthy() {
        return Ok(());
    }
    let rendered = render(x);
    Err(failure(
        FailureInfo::new("true", format!("{rendered} did not evaluate to true"))
            .with_context("value", rendered),
    ))
}

/// Asserts that `x` coerces to `false`.
pub fn assert_false<T: Truthy + Debug + ?Sized>(x: &T) -> AssertResult {
    if !x.is_truthy() {
        return Ok(());
    }
    let rendered = render(x);
    Err(failure(
        FailureInfo::new("false", format!("{rendered} did not evaluate to false"))
            .with_context("value", rendered),
    ))
}
