//! SWM008: require-restart-policy
//!
//! Without a `deploy` section Swarm falls back to scheduler defaults; with
//! one, an explicit `restart_policy` keeps task restarts predictable. The
//! two messages are mutually exclusive per service.

use crate::validator::parser::Service;
use crate::validator::rules::{ServiceRule, SimpleRule, service_violation};
use crate::validator::types::{Severity, Violation};

const CODE: &str = "SWM008";
const NAME: &str = "require-restart-policy";
const DESCRIPTION: &str = "Services should declare `deploy.restart_policy` instead of relying on scheduler defaults.";

pub fn rule() -> impl ServiceRule {
    SimpleRule::new(CODE, NAME, Severity::Warning, DESCRIPTION, check)
}

fn check(service: &Service) -> Vec<Violation> {
    let message = match &service.deploy {
        None => "No deploy section - will use defaults",
        Some(deploy) if !deploy.has_restart_policy() => "No restart_policy specified",
        Some(_) => return Vec::new(),
    };

    vec![service_violation(
        &CODE.into(),
        NAME,
        Severity::Warning,
        service,
        message,
    )]
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
    fn test_no_violation_with_restart_policy() {
        let yaml = r#"
services:
  web:
    image: nginx
    deploy:
      restart_policy:
        condition: on-failure
"#;
        assert!(check_first(yaml).is_empty());
    }

    #[test]
    fn test_missing_deploy_section() {
        let yaml = r#"
services:
  web:
    image: nginx
"#;
        let violations = check_first(yaml);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Service 'web': No deploy section - will use defaults"
        );
    }

    #[test]
    fn test_deploy_without_restart_policy() {
        let yaml = r#"
services:
  web:
    image: nginx
    deploy:
      replicas: 3
"#;
        let violations = check_first(yaml);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Service 'web': No restart_policy specified"
        );
    }

    #[test]
    fn test_messages_are_mutually_exclusive() {
        let yaml = r#"
services:
  web:
    image: nginx
    deploy:
      replicas: 3
"#;
        let violations = check_first(yaml);
        assert_eq!(violations.len(), 1);
        assert!(!violations[0].message.contains("deploy section"));
    }
}
