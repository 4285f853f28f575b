//! SWM007: links-ignored
//!
//! `links` is a legacy single-host networking directive; overlay networks
//! replace it under Swarm.

use crate::validator::parser::Service;
use crate::validator::rules::{ServiceRule, SimpleRule, service_violation};
use crate::validator::types::{Severity, Violation};

const CODE: &str = "SWM007";
const NAME: &str = "links-ignored";
const DESCRIPTION: &str = "`links` is deprecated; use networks for service discovery.";

pub fn rule() -> impl ServiceRule {
    SimpleRule::new(CODE, NAME, Severity::Warning, DESCRIPTION, check)
}

fn check(service: &Service) -> Vec<Violation> {
    if service.has_key("links") {
        vec![service_violation(
            &CODE.into(),
            NAME,
            Severity::Warning,
            service,
            "'links' is deprecated and ignored in Swarm mode",
        )]
    } else {
        Vec::new()
    }
}
