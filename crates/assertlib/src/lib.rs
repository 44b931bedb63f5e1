#![deny(missing_docs)]

//! Standalone assertion functions for test suites.
//!
//! Every assertion is a pure check over borrowed operands. It returns `Ok(())`
//! when the condition holds and an [`AssertError`] describing the operands
//! otherwise, so a test can propagate failures with `?`:
//!
//! ```
//! use assertlib::{assert_either, assert_equal, assert_sequence_equal, AssertResult};
//!
//! fn check() -> AssertResult {
//!     assert_equal(&(2 + 2), &4)?;
//!     assert_sequence_equal(&vec!["a", "b"], &["a", "b"], false)?;
//!     assert_either(&"b", &["a", "b"], &["c"])?;
//!     Ok(())
//! }
//!
//! check().unwrap();
//! ```
//!
//! Failures are also emitted as `debug` level `tracing` events, and rejected
//! configurations as `warn` events.

pub mod approx;
pub mod either;
pub mod equality;
pub mod identity;
pub mod instance;
pub mod precision;
pub mod sequence;

mod report;

pub use assertlib_core::{
    AssertError, AssertResult, Candidate, Exactly, FailureInfo, ToleranceMode, Truthy,
};

pub use approx::{
    assert_almost_equal, assert_almost_equal_with, assert_not_almost_equal,
    assert_not_almost_equal_with,
};
pub use either::{assert_either, assert_not_either};
pub use equality::{assert_equal, assert_false, assert_not_equal, assert_true};
pub use identity::{assert_is, assert_is_not};
pub use instance::{
    assert_is_instance, assert_is_instance_dyn, assert_is_not_instance,
    assert_is_not_instance_dyn,
};
pub use precision::assert_precision;
pub use sequence::{assert_sequence_equal, assert_sequence_not_equal};

/// Alias of [`assert_equal`].
pub use equality::assert_equal as assert_equals;
/// Alias of [`assert_not_equal`].
pub use equality::assert_not_equal as assert_not_equals;
/// Alias of [`assert_is`].
pub use identity::assert_is as assert_is_same;
/// Alias of [`assert_is_not`].
pub use identity::assert_is_not as assert_is_not_same;
