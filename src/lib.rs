//! # stacklint
//!
//! Validates Docker Stack YAML files for Docker Swarm compatibility. It
//! checks for the common issues that prevent a successful `docker stack
//! deploy`:
//!
//! - YAML syntax errors
//! - Swarm-incompatible service keys (`build`, `depends_on`, `links`, ...)
//! - Missing required sections (`version`, `services`)
//! - Deployment configuration best practices (`deploy.restart_policy`)
//!
//! The binary walks the well-known stack files in the working directory
//! (`docker-stack.yml`, `docker-stack-internal.yml`,
//! `docker-stack-nfs.yml.template`), prints a human-readable report per
//! file, and exits 0 only when every file is valid.
//!
//! ## Example
//!
//! ```rust
//! use stacklint::validator::validate_content;
//!
//! let stack = r#"
//! version: "3.8"
//! services:
//!   web:
//!     image: nginx:1.25
//! "#;
//!
//! let report = validate_content(stack, "docker-stack.yml").unwrap();
//! assert!(report.is_valid());
//! for warning in report.warnings() {
//!     println!("{}", warning.message);
//! }
//! ```

pub mod cli;
pub mod error;
pub mod runner;
pub mod validator;

// Re-export commonly used types and functions
pub use error::{Error, Result};
pub use validator::{FileReport, validate_content, validate_file};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
