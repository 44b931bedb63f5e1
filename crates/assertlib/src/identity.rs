//! Object identity checks.
//!
//! Identity is the address of the referenced storage, not its contents: two
//! separately built vectors holding the same elements are equal but never the
//! same object. Zero-sized values occupy no storage, so distinct zero-sized
//! values may share an address.

use std::fmt::Debug;

use assertlib_core::AssertResult;

use crate::report::{binary, failure, render};

/// Asserts that `x` and `y` refer to the same object.
///
/// ```
/// use assertlib::assert_is;
///
/// let items = vec![1, 2];
/// let alias = &items;
/// assert_is(&items, alias).unwrap();
/// assert!(assert_is(&items, &vec![1, 2]).is_err());
/// ```
pub fn assert_is<T: Debug + ?Sized>(x: &T, y: &T) -> AssertResult {
    if std::ptr::eq(x, y) {
        return Ok(());
    }
    let message = format!("{} is not {}", render(x), render(y));
    Err(failure(binary("is", message, x, y)))
}

/// Asserts that `x` and `y` are distinct objects, whatever their contents.
pub fn assert_is_not<T: Debug + ?Sized>(x: &T, y: &T) -> AssertResult {
    if !std::ptr::eq(x, y) {
        return Ok(());
    }
    let message = format!("{} is {}", render(x), render(y));
    Err(failure(binary("is_not", message, x, y)))
}
