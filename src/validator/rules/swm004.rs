//! SWM004: no-build
//!
//! `docker stack deploy` does not build images; services must reference a
//! prebuilt image.

use crate::validator::parser::Service;
use crate::validator::rules::{ServiceRule, SimpleRule, service_violation};
use crate::validator::types::{Severity, Violation};

const CODE: &str = "SWM004";
const NAME: &str = "no-build";
const DESCRIPTION: &str = "Services must reference prebuilt images; `build` is rejected by `docker stack deploy`.";

pub fn rule() -> impl ServiceRule {
    SimpleRule::new(CODE, NAME, Severity::Error, DESCRIPTION, check)
}

fn check(service: &Service) -> Vec<Violation> {
    if service.has_key("build") {
        vec![service_violation(
            &CODE.into(),
            NAME,
            Severity::Error,
            service,
            "'build' is not supported in Swarm mode",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::parser::parse_stack;

    fn check_first(yaml: &str) -> Vec<Violation> {
        let stack = parse_stack(yaml).unwrap();
        let services = stack.services.unwrap();
        check(&services[0])
    }

    #[test]
    fn test_no_violation_image_only() {
        let yaml = r#"
services:
  web:
    image: nginx:1.25
"#;
        assert!(check_first(yaml).is_empty());
    }

    #[test]
    fn test_violation_simple_build() {
        let yaml = r#"
services:
  web:
    build: .
"#;
        let violations = check_first(yaml);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].is_error());
        assert_eq!(
            violations[0].message,
            "Service 'web': 'build' is not supported in Swarm mode"
        );
    }

    #[test]
    fn test_violation_extended_build() {
        let yaml = r#"
services:
  api:
    image: myapi:v1
    build:
      context: ./api
      dockerfile: Dockerfile
"#;
        let violations = check_first(yaml);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("api"));
    }
}
