//! Runtime type membership checks.
//!
//! Rust has no runtime subtyping, so a value is an instance of exactly one
//! concrete type. The plain variants check the static type of a borrowed
//! value; the `_dyn` variants look through `dyn Any` at the concrete type of a
//! type-erased value.

use std::any::{type_name, Any};
use std::fmt::Debug;

use assertlib_core::{AssertResult, FailureInfo};

use crate::report::{failure, render};

/// Asserts that `x` is a value of type `E`.
///
/// ```
/// use assertlib::assert_is_instance;
///
/// assert_is_instance::<String>(&String::from("foo")).unwrap();
/// assert!(assert_is_instance::<i64>(&1u8).is_err());
/// ```
pub fn assert_is_instance<E: Any>(x: &(impl Any + Debug)) -> AssertResult {
    let erased: &dyn Any = x;
    if erased.is::<E>() {
        return Ok(());
    }
    Err(failure(instance_info(
        "is_instance",
        format!("{} is not an instance of {}", render(x), type_name::<E>()),
        render(x),
        type_name::<E>(),
        type_name_of(x),
    )))
}

/// Asserts that `x` is not a value of type `E`.
pub fn assert_is_not_instance<E: Any>(x: &(impl Any + Debug)) -> AssertResult {
    let erased: &dyn Any = x;
    if !erased.is::<E>() {
        return Ok(());
    }
    Err(failure(instance_info(
        "is_not_instance",
        format!("{} is an instance of {}", render(x), type_name::<E>()),
        render(x),
        type_name::<E>(),
        type_name_of(x),
    )))
}

/// Asserts that the type-erased `x` holds a value of type `E`.
///
/// An erased value cannot be rendered or named, so failures show it as
/// `Any { .. }` and report its type as `dyn Any`. Use
/// [`assert_is_instance`] when the value's type is known to the caller.
///
/// ```
/// use std::any::Any;
/// use assertlib::assert_is_instance_dyn;
///
/// let boxed: Box<dyn Any> = Box::new(7u32);
/// assert_is_instance_dyn::<u32>(boxed.as_ref()).unwrap();
/// ```
pub fn assert_is_instance_dyn<E: Any>(x: &dyn Any) -> AssertResult {
    if x.is::<E>() {
        return Ok(());
    }
    Err(failure(instance_info(
        "is_instance",
        format!("{} is not an instance of {}", render(x), type_name::<E>()),
        render(x),
        type_name::<E>(),
        "dyn Any",
    )))
}

/// Asserts that the type-erased `x` does not hold a value of type `E`.
///
/// As with [`assert_is_instance_dyn`], the value appears as `Any { .. }` in
/// the failure.
pub fn assert_is_not_instance_dyn<E: Any>(x: &dyn Any) -> AssertResult {
    if !x.is::<E>() {
        return Ok(());
    }
    Err(failure(instance_info(
        "is_not_instance",
        format!("{} is an instance of {}", render(x), type_name::<E>()),
        render(x),
        type_name::<E>(),
        type_name::<E>(),
    )))
}

fn type_name_of<T: ?Sized>(_: &T) -> &'static str {
    type_name::<T>()
}

fn instance_info(
    code: &str,
    message: String,
    value: String,
    expected: &str,
    actual: &str,
) -> FailureInfo {
    FailureInfo::new(code, message)
        .with_context("value", value)
        .with_context("expected", expected)
        .with_context("actual", actual)
}
