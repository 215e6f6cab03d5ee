//! Run orchestration
//!
//! [`TraceRunner`] wires the pieces together: resolve the project tree,
//! collect source sets, assemble settings, drive the engine through
//! import → link → trace, persist the report, and decide whether the
//! build passes. One runner handles one project tree; the surrounding
//! build tool may execute runners for independent modules concurrently.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::TraceConfig;
use crate::engine::{TraceEngine, Verdict};
use crate::error::TraceError;
use crate::project::{collect_source_roots, ProjectNode, ProjectReader};
use crate::report::resolve_report_target;
use crate::settings::{FilterSettings, ImportSettings, ReportSettings, FORMAT_PLAIN};

/// Documentation directory included in the import when it exists under
/// the project root.
const DOC_DIR: &str = "doc";

/// Counts and report location of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSummary {
    /// Total number of traced items.
    pub total: usize,

    /// Number of items with defects.
    pub defect_count: usize,

    /// Where the report was written.
    pub report_path: PathBuf,
}

/// Terminal state of a tracing run.
///
/// Defect verdicts are always handled locally — report written, counts
/// recorded — and communicated through this value; they never travel the
/// error path. Only [`Failed`](TraceOutcome::Failed) should fail the
/// host build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The skip flag was set; nothing was read, traced, or written.
    Skipped,

    /// Tracing completed and the build passes. The summary may still
    /// contain defects when fail-on-defect is disabled.
    Done(TraceSummary),

    /// Tracing completed, defects exist, and fail-on-defect is enabled.
    Failed(TraceSummary),
}

impl TraceOutcome {
    /// `true` unless the run asks the host to fail the build.
    pub fn is_success(&self) -> bool {
        !matches!(self, TraceOutcome::Failed(_))
    }

    /// The build-failure message for a [`Failed`](TraceOutcome::Failed)
    /// outcome.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            TraceOutcome::Failed(summary) => Some(format!(
                "tracing found {} defects out of {} items",
                summary.defect_count, summary.total
            )),
            _ => None,
        }
    }
}

/// Drives one tracing run over one project tree.
pub struct TraceRunner<'a, E> {
    config: &'a TraceConfig,
    engine: &'a E,
}

impl<'a, E: TraceEngine> TraceRunner<'a, E> {
    pub fn new(config: &'a TraceConfig, engine: &'a E) -> Self {
        Self { config, engine }
    }

    /// Executes the run.
    ///
    /// Flow: skip check, project tree resolution, source-set collection,
    /// import, link, trace, report emission, outcome decision. The report
    /// is written only once a verdict exists, so aborted runs leave no
    /// partial report behind.
    pub fn run(&self) -> Result<TraceOutcome, TraceError> {
        if self.config.skip {
            info!("skipping requirement tracing");
            return Ok(TraceOutcome::Skipped);
        }
        self.config.validate()?;

        let descriptor = self.config.descriptor_path();
        let tree = ProjectReader::new().read_tree(&descriptor)?;
        let import_settings = self.import_settings(&tree);

        info!(
            modules = tree.node_count(),
            inputs = import_settings.inputs().len(),
            "importing specification items"
        );
        let items = self
            .engine
            .import(&import_settings)
            .map_err(TraceError::Engine)?;
        info!(count = items.len(), "imported specification items");

        let linked = self.engine.link(items);
        let trace = self.engine.trace(linked);
        let summary = self.write_report(&trace)?;

        if summary.defect_count == 0 {
            info!(total = summary.total, "tracing found no defects");
            return Ok(TraceOutcome::Done(summary));
        }

        warn!(
            defects = summary.defect_count,
            total = summary.total,
            "tracing found defects"
        );
        if self.config.fail_build {
            Ok(TraceOutcome::Failed(summary))
        } else {
            Ok(TraceOutcome::Done(summary))
        }
    }

    fn import_settings(&self, tree: &ProjectNode) -> ImportSettings {
        let mut inputs = collect_source_roots(tree);

        let doc_dir = tree.base_dir.join(DOC_DIR);
        if doc_dir.exists() {
            inputs.push(doc_dir);
        }

        let filter = FilterSettings::from_raw(
            self.config.artifact_types.clone(),
            self.config.tags.clone(),
        );
        ImportSettings::new(inputs, filter)
    }

    fn write_report(&self, trace: &E::Trace) -> Result<TraceSummary, TraceError> {
        let report_path =
            resolve_report_target(&self.config.output_directory, &self.config.report_format)?;
        let settings = self.config.report_settings();
        info!(
            report = %report_path.display(),
            settings = %settings,
            "writing tracing report"
        );

        // Render into a buffer first: a renderer failure must not leave a
        // partial report file behind.
        let mut rendered = Vec::new();
        self.engine
            .render(trace, &settings, &mut rendered)
            .map_err(TraceError::Engine)?;
        fs::write(&report_path, &rendered).map_err(|source| TraceError::ReportWrite {
            path: report_path.clone(),
            source,
        })?;

        if trace.has_defects() {
            self.render_defects_to_stdout(trace, &settings);
        }

        Ok(TraceSummary {
            total: trace.count(),
            defect_count: trace.defect_count(),
            report_path,
        })
    }

    /// Secondary plain-text rendering so failures are visible without
    /// opening the persisted report. Best effort: the report is already
    /// on disk, so a console problem must not abort the run.
    fn render_defects_to_stdout(&self, trace: &E::Trace, settings: &ReportSettings) {
        let plain = ReportSettings {
            output_format: FORMAT_PLAIN.to_string(),
            ..settings.clone()
        };
        let mut rendered = Vec::new();
        if let Err(error) = self.engine.render(trace, &plain, &mut rendered) {
            warn!(error = %error, "could not render defect summary");
            return;
        }
        if let Err(error) = io::stdout().write_all(&rendered) {
            warn!(error = %error, "could not write defect summary to stdout");
        }
    }
}

/// Convenience wrapper: runs one trace with the given configuration and
/// engine.
pub fn run_trace<E: TraceEngine>(
    config: &TraceConfig,
    engine: &E,
) -> Result<TraceOutcome, TraceError> {
    TraceRunner::new(config, engine).run()
}
