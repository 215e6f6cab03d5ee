//! The requirement-tracing engine seam
//!
//! The engine owns the import/link/trace pipeline and the report
//! renderers; this crate only decides what gets imported, where the
//! report goes, and whether the build passes. Hosts plug their engine in
//! by implementing [`TraceEngine`] and handing it to
//! [`TraceRunner`](crate::runner::TraceRunner).

use std::io::Write;

use crate::settings::{ImportSettings, ReportSettings};

/// The counts produced by the tracing step.
///
/// This is all the build decision consumes from a trace: how many items
/// were traced and how many of them carry defects. Everything else about
/// the traced result stays inside the engine's own trace type.
pub trait Verdict {
    /// Total number of traced specification items.
    fn count(&self) -> usize;

    /// Number of items with tracing defects.
    fn defect_count(&self) -> usize;

    /// `true` when at least one defect exists.
    fn has_defects(&self) -> bool {
        self.defect_count() > 0
    }
}

/// A requirement-tracing engine.
///
/// Implementations must hold no mutable state across the four operations:
/// independent runs may invoke the same engine concurrently, and each run
/// calls the operations strictly in import → link → trace → render order.
pub trait TraceEngine {
    /// An imported specification item, opaque to this crate.
    type Item;

    /// An item after the linking step, opaque to this crate.
    type LinkedItem;

    /// The traced result. Must expose its verdict counts.
    type Trace: Verdict;

    /// Imports specification items from the given input paths, applying
    /// the item filter.
    fn import(&self, settings: &ImportSettings) -> anyhow::Result<Vec<Self::Item>>;

    /// Links imported items to each other.
    fn link(&self, items: Vec<Self::Item>) -> Vec<Self::LinkedItem>;

    /// Traces linked items, producing a verdict.
    fn trace(&self, linked: Vec<Self::LinkedItem>) -> Self::Trace;

    /// Renders a traced result into `out` according to the report
    /// settings.
    fn render(
        &self,
        trace: &Self::Trace,
        settings: &ReportSettings,
        out: &mut dyn Write,
    ) -> anyhow::Result<()>;
}
