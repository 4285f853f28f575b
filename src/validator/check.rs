//! Validation orchestration.
//!
//! Ties together parsing, the document-level checks, and the per-service
//! rule walk to produce a [`FileReport`] per stack file.

use std::path::Path;

use crate::error::Error;
use crate::validator::parser::{self, ParseError, StackFile};
use crate::validator::rules::all_rules;
use crate::validator::types::{Severity, Violation};

/// File name suffix that marks a stack file as a template. Template files
/// are exempt from the required `services` section.
pub const TEMPLATE_SUFFIX: &str = ".template";

const REQUIRE_VERSION_CODE: &str = "SWM001";
const REQUIRE_VERSION_NAME: &str = "require-version";
const VERSION_COMPAT_CODE: &str = "SWM002";
const VERSION_COMPAT_NAME: &str = "swarm-version-compatibility";
const REQUIRE_SERVICES_CODE: &str = "SWM003";
const REQUIRE_SERVICES_NAME: &str = "require-services";

/// Result of validating one stack file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The file that was validated.
    pub file_path: String,
    /// YAML syntax failure; when set, no checks ran.
    pub parse_error: Option<String>,
    /// Set for template files without a `services` section.
    pub template_note: bool,
    /// Violations in collection order.
    pub violations: Vec<Violation>,
    /// Number of hard errors.
    pub error_count: usize,
    /// Number of soft warnings.
    pub warning_count: usize,
}

impl FileReport {
    /// Create a new empty report.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            parse_error: None,
            template_note: false,
            violations: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    fn update_counts(&mut self) {
        self.error_count = self.violations.iter().filter(|v| v.is_error()).count();
        self.warning_count = self.violations.iter().filter(|v| v.is_warning()).count();
    }

    /// Hard errors in collection order.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    /// Soft warnings in collection order.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_warning())
    }

    /// Check if any hard errors were collected.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if any soft warnings were collected.
    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }

    /// The file's verdict. Warnings never affect it.
    pub fn is_valid(&self) -> bool {
        self.parse_error.is_none() && self.error_count == 0
    }
}

/// Validate stack file content against the Swarm compatibility checks.
///
/// `file_name` is used for diagnostics and for the template-file exemption.
/// YAML syntax failures are recorded on the report; structural errors (a
/// non-mapping root or service entry) are returned as [`Error::Structure`]
/// for the caller's catch-all.
pub fn validate_content(content: &str, file_name: &str) -> Result<FileReport, Error> {
    let mut report = FileReport::new(file_name);

    let stack = match parser::parse_stack(content) {
        Ok(stack) => stack,
        Err(ParseError::Syntax(message)) => {
            report.parse_error = Some(message);
            return Ok(report);
        }
        Err(err) => return Err(Error::Structure(err.to_string())),
    };

    log::debug!("{}: top-level keys {:?}", file_name, stack.top_level_keys);

    check_version(&stack, &mut report);

    match &stack.services {
        None if file_name.ends_with(TEMPLATE_SUFFIX) => {
            log::info!("{}: template file without a services section", file_name);
            report.template_note = true;
        }
        None => {
            // Short-circuit: any warnings collected so far are dropped, not
            // reported.
            report.violations.retain(|v| v.is_error());
            report.violations.push(Violation::new(
                REQUIRE_SERVICES_CODE,
                REQUIRE_SERVICES_NAME,
                Severity::Error,
                "No services defined",
            ));
            report.update_counts();
            return Ok(report);
        }
        Some(services) => {
            let rules = all_rules();
            for service in services {
                for rule in &rules {
                    report.violations.extend(rule.check(service));
                }
            }
        }
    }

    report.update_counts();
    Ok(report)
}

/// Validate a stack file on disk.
///
/// A missing file maps to [`Error::MissingFile`]; undecodable content is
/// treated like a syntax failure and recorded on the report.
pub fn validate_file(path: &Path) -> Result<FileReport, Error> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| path.display().to_string());

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingFile(file_name));
        }
        Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
            let mut report = FileReport::new(file_name);
            report.parse_error = Some(err.to_string());
            return Ok(report);
        }
        Err(err) => {
            return Err(Error::Io {
                path: file_name,
                source: err,
            });
        }
    };

    validate_content(&content, &file_name)
}

fn check_version(stack: &StackFile, report: &mut FileReport) {
    match &stack.version {
        None => report.violations.push(Violation::new(
            REQUIRE_VERSION_CODE,
            REQUIRE_VERSION_NAME,
            Severity::Error,
            "Missing version field",
        )),
        Some(version) if !version.starts_with("3.") => {
            report.violations.push(Violation::new(
                VERSION_COMPAT_CODE,
                VERSION_COMPAT_NAME,
                Severity::Warning,
                format!("Version {} may not be compatible with Docker Swarm", version),
            ));
        }
        Some(_) => {}
    }
}
