//! Run configuration
//!
//! [`TraceConfig`] is the whole external option surface of a tracing run.
//! The host build tool binds its own parameter mechanism (CLI flags,
//! build-file properties, environment) onto this struct and hands it to
//! [`TraceRunner`](crate::runner::TraceRunner).

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::TraceError;
use crate::project::DESCRIPTOR_FILE;
use crate::settings::{DetailsDisplay, Newline, ReportSettings, Verbosity, FORMAT_HTML};

/// Build-output subdirectory used as the default report location.
const DEFAULT_OUTPUT_SUBDIR: &str = "target";

/// Configuration for one tracing run over one project tree.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Root project directory; the module descriptor is expected at
    /// `<project_root>/pom.xml`.
    pub project_root: PathBuf,

    /// Directory the report is written into. Defaults to the build
    /// output directory under the project root.
    pub output_directory: PathBuf,

    /// Whether a defect verdict fails the build. Defaults to `true`.
    pub fail_build: bool,

    /// Report output format tag, e.g. `html` or `plain`. Defaults to
    /// `html`; the tag also selects the report file extension.
    pub report_format: String,

    /// Report verbosity, passed through to the renderer.
    pub report_verbosity: Verbosity,

    /// Whether the report shows each item's origin.
    pub report_show_origin: bool,

    /// Detail-section display mode for the HTML renderer.
    pub details_display: DetailsDisplay,

    /// Line-ending convention for the rendered report.
    pub report_newline: Newline,

    /// Artifact types to trace; `None` or empty means no type filtering.
    pub artifact_types: Option<BTreeSet<String>>,

    /// Tags to trace; `None` or empty means no tag filtering. May contain
    /// the wildcard marker `_` to include untagged items.
    pub tags: Option<BTreeSet<String>>,

    /// Skip the run entirely. Defaults to `false`.
    pub skip: bool,
}

impl TraceConfig {
    /// Creates a configuration with the default option values for the
    /// given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let output_directory = project_root.join(DEFAULT_OUTPUT_SUBDIR);
        Self {
            project_root,
            output_directory,
            fail_build: true,
            report_format: FORMAT_HTML.to_string(),
            report_verbosity: Verbosity::default(),
            report_show_origin: false,
            details_display: DetailsDisplay::default(),
            report_newline: Newline::default(),
            artifact_types: None,
            tags: None,
            skip: false,
        }
    }

    /// Path of the root module descriptor.
    pub fn descriptor_path(&self) -> PathBuf {
        self.project_root.join(DESCRIPTOR_FILE)
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.report_format.trim().is_empty() {
            return Err(TraceError::InvalidConfig(
                "report format must not be empty".to_string(),
            ));
        }
        if !self.project_root.is_dir() {
            return Err(TraceError::InvalidConfig(format!(
                "project root {} is not a directory",
                self.project_root.display()
            )));
        }
        Ok(())
    }

    /// Report settings for the persisted report.
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            output_format: self.report_format.clone(),
            verbosity: self.report_verbosity,
            show_origin: self.report_show_origin,
            details_display: self.details_display,
            newline: self.report_newline,
        }
    }
}
