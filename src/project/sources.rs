//! Source-set flattening

use std::path::PathBuf;

use tracing::debug;

use crate::project::ProjectNode;

/// Flattens a project tree into the ordered sequence of existing
/// source-set directories.
///
/// Traversal is depth-first: every submodule subtree is flattened (in
/// declaration order) before the node's own path groups, which are
/// appended in the fixed order compile sources, resources, test sources,
/// test resources. Paths that do not exist are dropped silently —
/// projects commonly lack a resources directory — and duplicates are
/// kept. The output order is a pure function of the tree and the
/// filesystem state.
pub fn collect_source_roots(node: &ProjectNode) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    append_node(node, &mut roots);
    roots
}

fn append_node(node: &ProjectNode, roots: &mut Vec<PathBuf>) {
    for submodule in &node.submodules {
        append_node(submodule, roots);
    }

    let groups = [
        &node.compile_source_roots,
        &node.resource_dirs,
        &node.test_compile_source_roots,
        &node.test_resource_dirs,
    ];
    for group in groups {
        for path in group {
            if path.exists() {
                roots.push(path.clone());
            } else {
                debug!(path = %path.display(), "skipping missing source root");
            }
        }
    }
}
