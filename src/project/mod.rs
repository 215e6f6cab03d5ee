//! Project tree resolution
//!
//! Turns a multi-module project on disk into the ordered set of source
//! directories the tracing engine should import. [`ProjectReader`] builds
//! the module tree from descriptors, [`collect_source_roots`] flattens it
//! into existing directories.

mod model;
mod reader;
mod sources;

pub use model::ProjectNode;
pub use reader::{ProjectReader, DESCRIPTOR_FILE};
pub use sources::collect_source_roots;
