//! Input selection for the engine's import step

use std::path::{Path, PathBuf};

use super::FilterSettings;

/// Ordered input paths plus the item filter for one import run.
///
/// Insertion order is preserved and duplicates are kept: if two modules
/// contribute the same physical directory it appears twice, because the
/// import step is idempotent per item, not per path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    inputs: Vec<PathBuf>,
    filter: FilterSettings,
}

impl ImportSettings {
    pub fn new(inputs: Vec<PathBuf>, filter: FilterSettings) -> Self {
        Self { inputs, filter }
    }

    /// Input paths in the order they were collected.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn filter(&self) -> &FilterSettings {
        &self.filter
    }

    /// `true` when the given path is among the inputs.
    pub fn contains(&self, path: &Path) -> bool {
        self.inputs.iter().any(|input| input == path)
    }
}
