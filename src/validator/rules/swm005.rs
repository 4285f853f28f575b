//! SWM005: depends-on-ignored
//!
//! Swarm schedules services independently; startup ordering from
//! `depends_on` is not honored.

use crate::validator::parser::Service;
use crate::validator::rules::{ServiceRule, SimpleRule, service_violation};
use crate::validator::types::{Severity, Violation};

const CODE: &str = "SWM005";
const NAME: &str = "depends-on-ignored";
const DESCRIPTION: &str = "`depends_on` has no effect under Swarm scheduling.";

pub fn rule() -> impl ServiceRule {
    SimpleRule::new(CODE, NAME, Severity::Warning, DESCRIPTION, check)
}

fn check(service: &Service) -> Vec<Violation> {
    if service.has_key("depends_on") {
        vec![service_violation(
            &CODE.into(),
            NAME,
            Severity::Warning,
            service,
            "'depends_on' is ignored in Swarm mode",
        )]
    } else {
        Vec::new()
    }
}
