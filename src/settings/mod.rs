//! Immutable settings values handed to the tracing engine
//!
//! Three value types cross the engine seam: [`FilterSettings`] (which
//! items to keep), [`ImportSettings`] (where to read them from), and
//! [`ReportSettings`] (how to render the traced result). All of them are
//! plain data with no identity beyond their fields.

mod filter;
mod import;
mod report;

pub use filter::{FilterSettings, WILDCARD_TAG};
pub use import::ImportSettings;
pub use report::{DetailsDisplay, Newline, ReportSettings, Verbosity, FORMAT_HTML, FORMAT_PLAIN};
