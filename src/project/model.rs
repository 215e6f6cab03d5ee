//! Project tree data model

use std::path::PathBuf;

/// One project/module in the tree.
///
/// Identity is the base directory. Nodes are built once during tree
/// traversal and never mutated afterwards; submodules are owned by their
/// parent, so the structure is a tree, not a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    /// Directory containing this module's descriptor.
    pub base_dir: PathBuf,

    /// Compiled source roots, in descriptor order.
    pub compile_source_roots: Vec<PathBuf>,

    /// Test source roots, in descriptor order.
    pub test_compile_source_roots: Vec<PathBuf>,

    /// Resource directories, in descriptor order.
    pub resource_dirs: Vec<PathBuf>,

    /// Test resource directories, in descriptor order.
    pub test_resource_dirs: Vec<PathBuf>,

    /// Submodule names exactly as declared in the descriptor.
    pub submodule_names: Vec<String>,

    /// Resolved submodules, in declaration order.
    pub submodules: Vec<ProjectNode>,
}

impl ProjectNode {
    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .submodules
            .iter()
            .map(ProjectNode::node_count)
            .sum::<usize>()
    }
}
