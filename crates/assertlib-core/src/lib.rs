#![deny(missing_docs)]
#![doc = "Core failure taxonomy, tolerance configuration and coercion traits for assertlib."]

pub mod candidate;
pub mod errors;
pub mod tolerance;
pub mod truthy;

pub use candidate::{Candidate, Exactly};
pub use errors::{AssertError, AssertResult, FailureInfo};
pub use tolerance::{rounds_to_zero, ToleranceMode};
pub use truthy::Truthy;
