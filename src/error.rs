//! Error taxonomy for tracing runs
//!
//! Everything in here aborts a run before a verdict is acted on. A defect
//! verdict is *not* an error: it is reported through
//! [`TraceOutcome`](crate::runner::TraceOutcome) so the host build tool can
//! decide what to do with it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration and I/O errors raised during a tracing run.
///
/// Each variant carries the offending path so the host can point the user
/// at the broken descriptor or directory. None of these are retried or
/// recovered locally; partial results (trees, reports) are never produced
/// on these paths.
#[derive(Debug, Error)]
pub enum TraceError {
    /// A module descriptor could not be read from disk.
    #[error("failed to read module descriptor {}: {source}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A module descriptor is not well-formed XML.
    #[error("failed to parse module descriptor {}: {source}", .path.display())]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// A submodule reference resolves back onto a directory that is
    /// already on the current module path.
    #[error("module cycle detected: {} is already on the current module path", .path.display())]
    ModuleCycle { path: PathBuf },

    /// The report output directory could not be created.
    #[error("failed to create report directory {}: {source}", .path.display())]
    ReportDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered report could not be written to its target file.
    #[error("failed to write tracing report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tracing engine failed to import or render.
    #[error("tracing engine error: {0}")]
    Engine(anyhow::Error),

    /// The run configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
