//! Element-wise sequence comparisons.
//!
//! Any container viewable as a slice is accepted. With `check_types` set, the
//! two containers must also have the same concrete type (`Vec<i32>` and
//! `[i32; 3]` do not), otherwise a [`AssertError::TypeMismatch`] is returned
//! before any element is compared.
//!
//! [`AssertError::TypeMismatch`]: assertlib_core::AssertError::TypeMismatch

use std::any::type_name;
use std::fmt::Debug;

use assertlib_core::{AssertResult, FailureInfo};

use crate::report::{binary, failure, render, type_mismatch};

/// Asserts that two sequences have the same length and pairwise equal elements.
///
/// ```
/// use assertlib::assert_sequence_equal;
///
/// assert_sequence_equal(&vec![1, 2, 3], &[1, 2, 3], false).unwrap();
/// assert!(assert_sequence_equal(&vec![1, 2, 3], &vec![1, 2], false).is_err());
/// ```
pub fn assert_sequence_equal<S1, S2, T, U>(seq1: &S1, seq2: &S2, check_types: bool) -> AssertResult
where
    S1: AsRef<[T]> + Debug + ?Sized,
    S2: AsRef<[U]> + Debug + ?Sized,
    T: PartialEq<U>,
{
    if check_types {
        check_container_types::<S1, S2>()?;
    }
    let (left, right) = (seq1.as_ref(), seq2.as_ref());
    if left.len() != right.len() {
        return Err(failure(
            binary(
                "sequence_equal.len",
                format!("len({}) of seq1 != len({}) of seq2", left.len(), right.len()),
                seq1,
                seq2,
            )
            .with_context("left_len", left.len().to_string())
            .with_context("right_len", right.len().to_string()),
        ));
    }
    match left.iter().zip(right).position(|(x, y)| x != y) {
        None => Ok(()),
        Some(index) => Err(failure(
            binary(
                "sequence_equal",
                format!("{} is not equal to {}", render(seq1), render(seq2)),
                seq1,
                seq2,
            )
            .with_context("first_mismatch", index.to_string()),
        )),
    }
}

/// Asserts that the sequences differ at every aligned position.
///
/// Elements are paired up to the length of the shorter sequence. A single
/// equal pair anywhere fails the check, so `[1, 2, 3]` and `[1, 2, 4]` are
/// rejected even though the sequences are not equal.
pub fn assert_sequence_not_equal<S1, S2, T, U>(
    seq1: &S1,
    seq2: &S2,
    check_types: bool,
) -> AssertResult
where
    S1: AsRef<[T]> + Debug + ?Sized,
    S2: AsRef<[U]> + Debug + ?Sized,
    T: PartialEq<U>,
{
    if check_types {
        check_container_types::<S1, S2>()?;
    }
    let (left, right) = (seq1.as_ref(), seq2.as_ref());
    match left.iter().zip(right).position(|(x, y)| x == y) {
        None => Ok(()),
        Some(index) => Err(failure(
            binary(
                "sequence_not_equal",
                format!(
                    "{} is equal to {} at index {index}",
                    render(seq1),
                    render(seq2)
                ),
                seq1,
                seq2,
            )
            .with_context("first_match", index.to_string()),
        )),
    }
}

fn check_container_types<S1: ?Sized, S2: ?Sized>() -> AssertResult {
    let (left, right) = (type_name::<S1>(), type_name::<S2>());
    if left == right {
        return Ok(());
    }
    Err(type_mismatch(
        FailureInfo::new("sequence.types", format!("type {left} != type {right}"))
            .with_context("left_type", left)
            .with_context("right_type", right)
            .with_hint("pass check_types = false to compare elements only"),
    ))
}
