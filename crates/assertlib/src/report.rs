//! Failure constructors shared by the assertion families.

use std::fmt::Debug;

use assertlib_core::{AssertError, FailureInfo};

/// Renders an operand the way it appears in failure messages.
pub(crate) fn render<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// Wraps a failed check, emitting a debug event for it.
pub(crate) fn failure(info: FailureInfo) -> AssertError {
    tracing::debug!(code = %info.code, message = %info.message, "assertion failed");
    AssertError::Assertion(info)
}

pub(crate) fn type_mismatch(info: FailureInfo) -> AssertError {
    tracing::warn!(code = %info.code, message = %info.message, "container type check failed");
    AssertError::TypeMismatch(info)
}

/// Logs a configuration error produced elsewhere and passes it through.
pub(crate) fn configuration(err: AssertError) -> AssertError {
    tracing::warn!(code = %err.code(), family = err.family(), "rejected assertion configuration");
    err
}

/// Builds the common two-operand payload.
pub(crate) fn binary(
    code: &str,
    message: String,
    left: &(impl Debug + ?Sized),
    right: &(impl Debug + ?Sized),
) -> FailureInfo {
    FailureInfo::new(code, message)
        .with_context("left", render(left))
        .with_context("right", render(right))
}
