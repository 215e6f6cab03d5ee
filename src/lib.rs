//! tracegate - requirement tracing as a build gate
//!
//! This library integrates an external requirement-tracing engine into a
//! build: it discovers the source sets of a (possibly multi-module)
//! project tree, assembles import and filter settings from user options,
//! drives the engine through its import/link/trace pipeline, persists the
//! rendered report, and turns the verdict into a build decision.
//!
//! # Core Concepts
//!
//! - **Project tree**: per-module `pom.xml` descriptors declaring source
//!   roots, resource directories, and submodules, resolved recursively
//!   into a [`ProjectNode`] tree
//! - **Source sets**: the ordered, existence-filtered directories the
//!   engine imports specification items from
//! - **Engine**: the pluggable [`TraceEngine`] service owning the actual
//!   tracing algorithm and report renderers
//! - **Outcome**: a [`TraceOutcome`] the host maps onto build
//!   success/failure; defect verdicts are data, not errors
//!
//! # Example Usage
//!
//! ```ignore
//! use tracegate::{run_trace, TraceConfig, TraceOutcome};
//!
//! fn gate(engine: &impl tracegate::TraceEngine) -> anyhow::Result<()> {
//!     let config = TraceConfig::new("/path/to/project");
//!     match run_trace(&config, engine)? {
//!         TraceOutcome::Failed(_) => anyhow::bail!("requirement tracing failed"),
//!         _ => Ok(()),
//!     }
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod project;
pub mod report;
pub mod runner;
pub mod settings;
pub mod util;

pub use config::TraceConfig;
pub use engine::{TraceEngine, Verdict};
pub use error::TraceError;
pub use project::{collect_source_roots, ProjectNode, ProjectReader, DESCRIPTOR_FILE};
pub use report::{resolve_report_target, REPORT_BASE_NAME};
pub use runner::{run_trace, TraceOutcome, TraceRunner, TraceSummary};
pub use settings::{
    DetailsDisplay, FilterSettings, ImportSettings, Newline, ReportSettings, Verbosity,
    WILDCARD_TAG,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
