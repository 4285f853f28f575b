//! Swarm compatibility validation for Docker Stack files.
//!
//! A stack file is parsed once, checked against a fixed rule set, and
//! reported on. Hard errors fail the file; soft warnings are advisory.
//!
//! # Checks
//!
//! | Code   | Name                        | Severity | Description                                      |
//! |--------|-----------------------------|----------|--------------------------------------------------|
//! | SWM001 | require-version             | error    | The top-level `version` field must be present    |
//! | SWM002 | swarm-version-compatibility | warning  | Versions outside 3.x may not deploy to Swarm     |
//! | SWM003 | require-services            | error    | Non-template files must define services          |
//! | SWM004 | no-build                    | error    | `build` is rejected by `docker stack deploy`     |
//! | SWM005 | depends-on-ignored          | warning  | `depends_on` is ignored under Swarm scheduling   |
//! | SWM006 | container-name-ignored      | warning  | `container_name` is ignored for Swarm tasks      |
//! | SWM007 | links-ignored               | warning  | `links` is deprecated single-host networking     |
//! | SWM008 | require-restart-policy      | warning  | `deploy.restart_policy` should be explicit       |
//!
//! Files whose name ends in `.template` may omit the `services` section.

pub mod check;
pub mod parser;
pub mod report;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use check::{FileReport, TEMPLATE_SUFFIX, validate_content, validate_file};
pub use parser::{Deploy, ParseError, Service, StackFile, parse_stack};
pub use types::{RuleCode, Severity, Violation};
