//! Item filter assembly from raw user options

use std::collections::BTreeSet;

/// Reserved tag token meaning "also include items that carry no tags at
/// all". It is consumed during normalization and never survives into the
/// tag set itself.
pub const WILDCARD_TAG: &str = "_";

/// Normalized item filter handed to the engine's import step.
///
/// Empty sets mean "no filtering" for their dimension. Constructed via
/// [`FilterSettings::from_raw`], which applies the wildcard-tag rules; the
/// fields are not directly settable so the no-wildcard-in-tags invariant
/// holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    artifact_types: BTreeSet<String>,
    tags: BTreeSet<String>,
    without_tags: bool,
}

impl FilterSettings {
    /// Builds a filter from the raw option sets.
    ///
    /// Artifact types are copied verbatim; an absent or empty set disables
    /// type filtering. For tags, an absent or empty set disables tag
    /// filtering and keeps untagged items included. A [`WILDCARD_TAG`]
    /// inside the raw tag set is removed and converted into
    /// `without_tags = true`.
    pub fn from_raw(
        artifact_types: Option<BTreeSet<String>>,
        tags: Option<BTreeSet<String>>,
    ) -> Self {
        let artifact_types = artifact_types.unwrap_or_default();
        let (tags, without_tags) = match tags {
            None => (BTreeSet::new(), true),
            Some(raw) if raw.is_empty() => (BTreeSet::new(), true),
            Some(mut raw) => {
                let wildcard = raw.remove(WILDCARD_TAG);
                (raw, wildcard)
            }
        };
        Self {
            artifact_types,
            tags,
            without_tags,
        }
    }

    /// A filter that keeps everything.
    pub fn none() -> Self {
        Self::from_raw(None, None)
    }

    /// Artifact types to keep; empty means no type filtering.
    pub fn artifact_types(&self) -> &BTreeSet<String> {
        &self.artifact_types
    }

    /// Tags to keep; empty means no tag filtering.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Whether items carrying no tags at all are included.
    pub fn without_tags(&self) -> bool {
        self.without_tags
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self::none()
    }
}
