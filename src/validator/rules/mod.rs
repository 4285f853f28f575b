//! Rule system for the per-service Swarm compatibility checks.
//!
//! Document-level checks (required `version`, required `services`) live in
//! the orchestration layer because they gate the walk itself; everything
//! checked per service is a [`ServiceRule`] here, run in checklist order for
//! each service in document order.

use crate::validator::parser::Service;
use crate::validator::types::{RuleCode, Severity, Violation};

// Rule modules
pub mod swm004;
pub mod swm005;
pub mod swm006;
pub mod swm007;
pub mod swm008;

/// A per-service compatibility rule.
pub trait ServiceRule: Send + Sync {
    /// Get the rule code (e.g., "SWM004").
    fn code(&self) -> &RuleCode;

    /// Get the human-readable rule name (e.g., "no-build").
    fn name(&self) -> &str;

    /// Get the severity of violations this rule produces.
    fn severity(&self) -> Severity;

    /// Get a short description of the rule.
    fn description(&self) -> &str;

    /// Check one service and return any violations.
    fn check(&self, service: &Service) -> Vec<Violation>;
}

/// Closure-backed [`ServiceRule`] implementation.
pub struct SimpleRule<F>
where
    F: Fn(&Service) -> Vec<Violation> + Send + Sync,
{
    code: RuleCode,
    name: String,
    severity: Severity,
    description: String,
    check_fn: F,
}

impl<F> SimpleRule<F>
where
    F: Fn(&Service) -> Vec<Violation> + Send + Sync,
{
    pub fn new(
        code: impl Into<RuleCode>,
        name: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        check_fn: F,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            severity,
            description: description.into(),
            check_fn,
        }
    }
}

impl<F> ServiceRule for SimpleRule<F>
where
    F: Fn(&Service) -> Vec<Violation> + Send + Sync,
{
    fn code(&self) -> &RuleCode {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, service: &Service) -> Vec<Violation> {
        (self.check_fn)(service)
    }
}

/// Helper to build a violation scoped to a service.
pub fn service_violation(
    code: &RuleCode,
    name: &str,
    severity: Severity,
    service: &Service,
    message: impl AsRef<str>,
) -> Violation {
    Violation::new(
        code.clone(),
        name,
        severity,
        format!("Service '{}': {}", service.name, message.as_ref()),
    )
}

/// All service rules in checklist order.
pub fn all_rules() -> Vec<Box<dyn ServiceRule>> {
    vec![
        Box::new(swm004::rule()),
        Box::new(swm005::rule()),
        Box::new(swm006::rule()),
        Box::new(swm007::rule()),
        Box::new(swm008::rule()),
    ]
}
