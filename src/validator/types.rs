//! Core types for the stack file validator.
//!
//! - `Severity` - whether a violation fails the file or is advisory
//! - `RuleCode` - check identifiers (e.g., "SWM004")
//! - `Violation` - a single rule violation

use std::fmt;

/// Severity of a rule violation.
///
/// An `Error` fails the file's verdict; a `Warning` is reported but never
/// affects validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Hard error: the file is not deployable to Swarm as written.
    Error,
    /// Soft warning: the directive is ignored or discouraged in Swarm mode.
    Warning,
}

impl Severity {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A check code identifier (e.g., "SWM004").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleCode(pub String);

impl RuleCode {
    /// Create a new rule code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single rule violation collected while checking a stack file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The code of the check that was violated.
    pub code: RuleCode,
    /// The human-readable check name (e.g., "no-build").
    pub rule_name: String,
    /// The severity of the violation.
    pub severity: Severity,
    /// Complete message text. Service-scoped messages carry the
    /// `Service '<name>': ` prefix.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        code: impl Into<RuleCode>,
        rule_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule_name: rule_name.into(),
            severity,
            message: message.into(),
        }
    }

    /// Whether this violation fails the file's verdict.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether this violation is advisory only.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
