//! SWM006: container-name-ignored
//!
//! Swarm names task containers itself; a fixed `container_name` cannot be
//! applied to replicated tasks.

use crate::validator::parser::Service;
use crate::validator::rules::{ServiceRule, SimpleRule, service_violation};
use crate::validator::types::{Severity, Violation};

const CODE: &str = "SWM006";
const NAME: &str = "container-name-ignored";
const DESCRIPTION: &str = "`container_name` has no effect on Swarm task containers.";

pub fn rule() -> impl ServiceRule {
    SimpleRule::new(CODE, NAME, Severity::Warning, DESCRIPTION, check)
}

fn check(service: &Service) -> Vec<Violation> {
    if service.has_key("container_name") {
        vec![service_violation(
            &CODE.into(),
            NAME,
            Severity::Warning,
            service,
            "'container_name' is ignored in Swarm mode",
        )]
    } else {
        Vec::new()
    }
}
