//! Human-readable rendering of validation results.
//!
//! Line-oriented text with fixed status markers, written for humans reading
//! a terminal or a CI log. No machine-readable format is produced.

use crate::validator::check::FileReport;

/// Render the per-file report block (everything after the `Validating ...`
/// line).
///
/// A syntax failure renders only the syntax line. Otherwise the template
/// note (if any) comes first; if hard errors were collected only the error
/// block is rendered, else the warning block (if any) followed by the
/// success line.
pub fn render(report: &FileReport) -> String {
    let mut output = String::new();

    if let Some(err) = &report.parse_error {
        output.push_str(&format!(
            "❌ YAML syntax error in {}: {}\n",
            report.file_path, err
        ));
        return output;
    }

    if report.template_note {
        output.push_str(&format!(
            "ℹ️  {} is a template file with no services section\n",
            report.file_path
        ));
    }

    if report.has_errors() {
        output.push_str(&format!("❌ {} has errors:\n", report.file_path));
        for violation in report.errors() {
            output.push_str(&format!("   - {}\n", violation.message));
        }
        return output;
    }

    if report.has_warnings() {
        output.push_str(&format!("⚠️  {} has warnings:\n", report.file_path));
        for violation in report.warnings() {
            output.push_str(&format!("   - {}\n", violation.message));
        }
    }

    output.push_str(&format!(
        "✅ {} is valid for Docker Swarm\n",
        report.file_path
    ));
    output
}

/// Final aggregate banner.
pub fn render_summary(all_valid: bool) -> &'static str {
    if all_valid {
        "🎉 All stack files are valid for Docker Swarm!"
    } else {
        "💥 Some stack files have issues"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::types::{Severity, Violation};

    fn report_with(violations: Vec<Violation>) -> FileReport {
        let mut report = FileReport::new("docker-stack.yml");
        report.error_count = violations.iter().filter(|v| v.is_error()).count();
        report.warning_count = violations.iter().filter(|v| v.is_warning()).count();
        report.violations = violations;
        report
    }

    #[test]
    fn test_render_valid() {
        let report = report_with(Vec::new());
        assert_eq!(
            render(&report),
            "✅ docker-stack.yml is valid for Docker Swarm\n"
        );
    }

    #[test]
    fn test_render_errors_suppress_warnings() {
        let report = report_with(vec![
            Violation::new(
                "SWM004",
                "no-build",
                Severity::Error,
                "Service 'web': 'build' is not supported in Swarm mode",
            ),
            Violation::new(
                "SWM008",
                "require-restart-policy",
                Severity::Warning,
                "Service 'web': No deploy section - will use defaults",
            ),
        ]);

        let output = render(&report);
        assert_eq!(
            output,
            "❌ docker-stack.yml has errors:\n   - Service 'web': 'build' is not supported in Swarm mode\n"
        );
        assert!(!output.contains("warnings"));
        assert!(!output.contains("valid for Docker Swarm"));
    }

    #[test]
    fn test_render_warnings_then_success() {
        let report = report_with(vec![Violation::new(
            "SWM002",
            "swarm-version-compatibility",
            Severity::Warning,
            "Version 2.4 may not be compatible with Docker Swarm",
        )]);

        let output = render(&report);
        assert_eq!(
            output,
            "⚠️  docker-stack.yml has warnings:\n   - Version 2.4 may not be compatible with Docker Swarm\n✅ docker-stack.yml is valid for Docker Swarm\n"
        );
    }

    #[test]
    fn test_render_parse_error_only() {
        let mut report = FileReport::new("docker-stack.yml");
        report.parse_error = Some("mapping values are not allowed in this context".to_string());

        let output = render(&report);
        assert_eq!(
            output,
            "❌ YAML syntax error in docker-stack.yml: mapping values are not allowed in this context\n"
        );
    }

    #[test]
    fn test_render_template_note_precedes_blocks() {
        let mut report = FileReport::new("docker-stack-nfs.yml.template");
        report.template_note = true;
        report.violations = vec![Violation::new(
            "SWM001",
            "require-version",
            Severity::Error,
            "Missing version field",
        )];
        report.error_count = 1;

        let output = render(&report);
        let info_at = output
            .find("ℹ️  docker-stack-nfs.yml.template is a template file with no services section")
            .unwrap();
        let errors_at = output.find("has errors:").unwrap();
        assert!(info_at < errors_at);
    }

    #[test]
    fn test_summary_banners() {
        assert_eq!(
            render_summary(true),
            "🎉 All stack files are valid for Docker Swarm!"
        );
        assert_eq!(render_summary(false), "💥 Some stack files have issues");
    }
}
