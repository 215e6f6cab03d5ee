//! Report rendering settings
//!
//! These are passed through to the engine's renderer unchanged; the only
//! part this crate interprets itself is the output format tag, which
//! selects the report file extension (see [`crate::report`]).

use std::fmt;
use std::str::FromStr;

use crate::error::TraceError;

/// Output format tag selecting the HTML renderer and the `.html` report
/// extension. Any other tag falls back to a plain-text `.txt` report.
pub const FORMAT_HTML: &str = "html";

/// Output format tag for the plain-text renderer, used for the secondary
/// stdout rendering when defects are found.
pub const FORMAT_PLAIN: &str = "plain";

/// How much of the traced result the renderer includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Minimal,
    Summary,
    Failures,
    FailureSummaries,
    FailureDetails,
    All,
}

impl Verbosity {
    fn name(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "QUIET",
            Verbosity::Minimal => "MINIMAL",
            Verbosity::Summary => "SUMMARY",
            Verbosity::Failures => "FAILURES",
            Verbosity::FailureSummaries => "FAILURE_SUMMARIES",
            Verbosity::FailureDetails => "FAILURE_DETAILS",
            Verbosity::All => "ALL",
        }
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::FailureDetails
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verbosity {
    type Err = TraceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "QUIET" => Ok(Verbosity::Quiet),
            "MINIMAL" => Ok(Verbosity::Minimal),
            "SUMMARY" => Ok(Verbosity::Summary),
            "FAILURES" => Ok(Verbosity::Failures),
            "FAILURE_SUMMARIES" => Ok(Verbosity::FailureSummaries),
            "FAILURE_DETAILS" => Ok(Verbosity::FailureDetails),
            "ALL" => Ok(Verbosity::All),
            other => Err(TraceError::InvalidConfig(format!(
                "unknown report verbosity '{other}', expected one of QUIET, MINIMAL, SUMMARY, \
                 FAILURES, FAILURE_SUMMARIES, FAILURE_DETAILS, ALL"
            ))),
        }
    }
}

/// Whether the HTML renderer collapses or expands detail sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsDisplay {
    #[default]
    Collapse,
    Expand,
}

impl fmt::Display for DetailsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DetailsDisplay::Collapse => "COLLAPSE",
            DetailsDisplay::Expand => "EXPAND",
        })
    }
}

impl FromStr for DetailsDisplay {
    type Err = TraceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "COLLAPSE" => Ok(DetailsDisplay::Collapse),
            "EXPAND" => Ok(DetailsDisplay::Expand),
            other => Err(TraceError::InvalidConfig(format!(
                "unknown details display '{other}', expected COLLAPSE or EXPAND"
            ))),
        }
    }
}

/// Line-ending convention for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Unix,
    Windows,
}

impl Newline {
    /// The literal line terminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Newline::Unix => "\n",
            Newline::Windows => "\r\n",
        }
    }
}

impl fmt::Display for Newline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Newline::Unix => "UNIX",
            Newline::Windows => "WINDOWS",
        })
    }
}

impl FromStr for Newline {
    type Err = TraceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "UNIX" => Ok(Newline::Unix),
            "WINDOWS" => Ok(Newline::Windows),
            other => Err(TraceError::InvalidConfig(format!(
                "unknown newline convention '{other}', expected UNIX or WINDOWS"
            ))),
        }
    }
}

/// Settings handed to the engine's renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Output format tag; [`FORMAT_HTML`] selects the HTML renderer,
    /// anything else is rendered as plain text.
    pub output_format: String,
    pub verbosity: Verbosity,
    pub show_origin: bool,
    pub details_display: DetailsDisplay,
    pub newline: Newline,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_format: FORMAT_HTML.to_string(),
            verbosity: Verbosity::default(),
            show_origin: false,
            details_display: DetailsDisplay::default(),
            newline: Newline::default(),
        }
    }
}

impl fmt::Display for ReportSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[output format: {}, verbosity: {}, show origin: {}, details: {}, newline: {}]",
            self.output_format, self.verbosity, self.show_origin, self.details_display, self.newline
        )
    }
}
