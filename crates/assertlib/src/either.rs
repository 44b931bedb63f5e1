//! Either/or checks against two candidates.

use std::fmt::Debug;

use assertlib_core::{AssertResult, Candidate, FailureInfo};

use crate::report::{failure, render};

/// Asserts that `value` equals, or is a member of, `a` or `b`.
///
/// The four disjuncts are tried in order: `a` equals `value`, `b` equals
/// `value`, `value` is in `a`, `value` is in `b`. Collections are candidates
/// by membership; wrap them in [`Exactly`](crate::Exactly) to compare them as a whole.
///
/// ```
/// use assertlib::{assert_either, Exactly};
///
/// assert_either(&11, &10, &11).unwrap();
/// assert_either(&"11", &["foo"], &["11"]).unwrap();
/// assert_either("a", "xyz", "cat").unwrap();
/// assert!(assert_either(&"z", &["a", "b"], &["c", "d"]).is_err());
/// assert_either(&vec!["foo"], &Exactly(vec!["bar"]), &Exactly(vec!["foo"])).unwrap();
/// ```
pub fn assert_either<V, A, B>(value: &V, a: &A, b: &B) -> AssertResult
where
    V: Debug + ?Sized,
    A: Candidate<V> + Debug + ?Sized,
    B: Candidate<V> + Debug + ?Sized,
{
    if matches_either(value, a, b) {
        return Ok(());
    }
    let message = format!(
        "{} is neither {} nor {}",
        render(value),
        render(a),
        render(b)
    );
    Err(failure(either_info("either", message, value, a, b)))
}

/// Asserts that `value` neither equals nor is a member of `a` or `b`.
pub fn assert_not_either<V, A, B>(value: &V, a: &A, b: &B) -> AssertResult
where
    V: Debug + ?Sized,
    A: Candidate<V> + Debug + ?Sized,
    B: Candidate<V> + Debug + ?Sized,
{
    if !matches_either(value, a, b) {
        return Ok(());
    }
    let message = format!("{} is {} or {}", render(value), render(a), render(b));
    Err(failure(either_info("not_either", message, value, a, b)))
}

fn matches_either<V, A, B>(value: &V, a: &A, b: &B) -> bool
where
    V: ?Sized,
    A: Candidate<V> + ?Sized,
    B: Candidate<V> + ?Sized,
{
    a.equals(value) || b.equals(value) || a.holds(value) || b.holds(value)
}

fn either_info<V, A, B>(code: &str, message: String, value: &V, a: &A, b: &B) -> FailureInfo
where
    V: Debug + ?Sized,
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    FailureInfo::new(code, message)
        .with_context("value", render(value))
        .with_context("first", render(a))
        .with_context("second", render(b))
}
