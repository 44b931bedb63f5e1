//! Failure reports returned by every assertion.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Report of a single failed check.
///
/// `message` is the sentence a test runner shows, with the operands already
/// rendered into it. `code` names the check (`equal`, `sequence_equal.len`,
/// `tolerance.conflict`, ...) so harnesses can group failures without parsing
/// text. `context` keeps each rendered operand and setting under its role
/// (`left`, `right`, `mode`, `first_mismatch`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureInfo {
    /// Name of the check that failed.
    pub code: String,
    /// Failure sentence shown to the test author.
    pub message: String,
    /// Rendered operands and settings of the check, keyed by role.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to fix the call, for failures caused by the caller's arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl FailureInfo {
    /// Starts a report for the check `code`.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records a rendered operand or setting under `role`.
    pub fn with_context(mut self, role: impl Into<String>, rendered: impl Into<String>) -> Self {
        self.context.insert(role.into(), rendered.into());
        self
    }

    /// Attaches advice on how to correct the call.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical failure type returned by every assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AssertError {
    /// The checked condition did not hold.
    #[error("assertion failed: {0}")]
    Assertion(FailureInfo),
    /// Mutually exclusive options were supplied to a check.
    #[error("invalid configuration: {0}")]
    Configuration(FailureInfo),
    /// Operand container types differ while type checking was requested.
    #[error("type mismatch: {0}")]
    TypeMismatch(FailureInfo),
}

/// Result alias returned by every assertion: `Ok(())` when the check holds.
pub type AssertResult = Result<(), AssertError>;

impl Display for FailureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)?;
        let mut roles = self.context.iter();
        if let Some((role, rendered)) = roles.next() {
            write!(f, " ({role}: {rendered}")?;
            for (role, rendered) in roles {
                write!(f, ", {role}: {rendered}")?;
            }
            write!(f, ")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; {hint}"),
            None => Ok(()),
        }
    }
}

impl AssertError {
    /// Returns a reference to the payload describing the failure.
    pub fn info(&self) -> &FailureInfo {
        match self {
            AssertError::Assertion(info)
            | AssertError::Configuration(info)
            | AssertError::TypeMismatch(info) => info,
        }
    }

    /// Returns the human readable message of the failure.
    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Returns the stable code of the failure.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Short lowercase name of the failure family, used in log fields.
    pub fn family(&self) -> &'static str {
        match self {
            AssertError::Assertion(_) => "assertion",
            AssertError::Configuration(_) => "configuration",
            AssertError::TypeMismatch(_) => "type_mismatch",
        }
    }

    /// Whether the checked condition itself failed.
    pub fn is_assertion(&self) -> bool {
        matches!(self, AssertError::Assertion(_))
    }

    /// Whether the caller supplied an invalid combination of options.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AssertError::Configuration(_))
    }

    /// Whether a requested container type check failed.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, AssertError::TypeMismatch(_))
    }
}
