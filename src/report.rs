//! Report target resolution

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TraceError;
use crate::settings::FORMAT_HTML;

/// Base name of the persisted report file.
pub const REPORT_BASE_NAME: &str = "tracing-report";

/// Resolves the report target file under `output_dir` and makes sure the
/// directory exists.
///
/// The `.html` extension is used iff the format tag is exactly `"html"`;
/// every other tag — including unrecognized ones — falls back to `.txt`.
/// Directory creation is idempotent, and "already exists" (possibly from
/// a concurrent sibling run) counts as success. An actual I/O failure is
/// a fatal configuration error.
pub fn resolve_report_target(output_dir: &Path, output_format: &str) -> Result<PathBuf, TraceError> {
    fs::create_dir_all(output_dir).map_err(|source| TraceError::ReportDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let extension = if output_format == FORMAT_HTML {
        "html"
    } else {
        "txt"
    };
    Ok(output_dir.join(format!("{REPORT_BASE_NAME}.{extension}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use yare::parameterized;

    #[parameterized(
        html = { "html", "tracing-report.html" },
        plain = { "plain", "tracing-report.txt" },
        uppercase_html = { "HTML", "tracing-report.txt" },
        unknown = { "asciidoc", "tracing-report.txt" },
        empty = { "", "tracing-report.txt" },
    )]
    fn test_extension_selection(format: &str, expected_name: &str) {
        let dir = TempDir::new().unwrap();
        let target = resolve_report_target(dir.path(), format).unwrap();
        assert_eq!(target, dir.path().join(expected_name));
    }

    #[test]
    fn test_creates_missing_ancestors() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("build/reports/tracing");

        let target = resolve_report_target(&nested, "html").unwrap();
        assert!(nested.is_dir());
        assert_eq!(target, nested.join("tracing-report.html"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("reports");

        let first = resolve_report_target(&output, "html").unwrap();
        let second = resolve_report_target(&output, "html").unwrap();

        assert_eq!(first, second);
        assert!(output.is_dir());
    }

    #[test]
    fn test_unwritable_location_is_fatal() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, "not a directory").unwrap();

        let result = resolve_report_target(&file.join("reports"), "html");
        assert!(matches!(result, Err(TraceError::ReportDir { .. })));
    }
}
