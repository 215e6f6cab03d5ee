//! Recursive module descriptor reading

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::TraceError;
use crate::project::ProjectNode;

/// File name of the per-module descriptor.
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Conventional layout used when the descriptor does not override a
/// directory.
const DEFAULT_SOURCE_DIR: &str = "src/main/java";
const DEFAULT_TEST_SOURCE_DIR: &str = "src/test/java";
const DEFAULT_RESOURCE_DIR: &str = "src/main/resources";
const DEFAULT_TEST_RESOURCE_DIR: &str = "src/test/resources";

/// Reads a module descriptor tree depth-first into a [`ProjectNode`].
///
/// Submodules are resolved in declaration order as
/// `<base>/<name>/pom.xml`. An unreadable or unparsable descriptor
/// anywhere in the tree aborts the whole resolution; partial trees are
/// never returned. The reader holds no state across calls, so
/// independent runs may read overlapping trees concurrently.
#[derive(Debug, Default)]
pub struct ProjectReader;

impl ProjectReader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the tree rooted at the given descriptor path.
    pub fn read_tree(&self, root_descriptor: &Path) -> Result<ProjectNode, TraceError> {
        let mut module_path = Vec::new();
        self.read_node(root_descriptor, &mut module_path)
    }

    fn read_node(
        &self,
        descriptor: &Path,
        module_path: &mut Vec<PathBuf>,
    ) -> Result<ProjectNode, TraceError> {
        let content = fs::read_to_string(descriptor).map_err(|source| TraceError::DescriptorRead {
            path: descriptor.to_path_buf(),
            source,
        })?;
        let raw = parse_descriptor(&content).map_err(|source| TraceError::DescriptorParse {
            path: descriptor.to_path_buf(),
            source,
        })?;

        let base_dir = descriptor
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        // Canonicalize for cycle detection only, so symlinked and
        // `..`-relative module references cannot recurse forever.
        let identity = fs::canonicalize(&base_dir).unwrap_or_else(|_| base_dir.clone());
        if module_path.contains(&identity) {
            return Err(TraceError::ModuleCycle { path: identity });
        }
        module_path.push(identity);

        let mut submodules = Vec::with_capacity(raw.modules.len());
        for name in &raw.modules {
            let child_descriptor = base_dir.join(name).join(DESCRIPTOR_FILE);
            submodules.push(self.read_node(&child_descriptor, module_path)?);
        }
        module_path.pop();

        debug!(
            module = %base_dir.display(),
            submodules = submodules.len(),
            "resolved module descriptor"
        );

        Ok(ProjectNode {
            compile_source_roots: vec![resolve(&base_dir, raw.source_dir, DEFAULT_SOURCE_DIR)],
            test_compile_source_roots: vec![resolve(
                &base_dir,
                raw.test_source_dir,
                DEFAULT_TEST_SOURCE_DIR,
            )],
            resource_dirs: resolve_all(&base_dir, raw.resource_dirs, DEFAULT_RESOURCE_DIR),
            test_resource_dirs: resolve_all(
                &base_dir,
                raw.test_resource_dirs,
                DEFAULT_TEST_RESOURCE_DIR,
            ),
            submodule_names: raw.modules,
            submodules,
            base_dir,
        })
    }
}

/// Descriptor content before path resolution.
#[derive(Debug, Default)]
struct RawDescriptor {
    source_dir: Option<String>,
    test_source_dir: Option<String>,
    resource_dirs: Vec<String>,
    test_resource_dirs: Vec<String>,
    modules: Vec<String>,
}

fn parse_descriptor(content: &str) -> Result<RawDescriptor, roxmltree::Error> {
    let doc = Document::parse(content)?;
    let project = doc.root_element();
    let mut raw = RawDescriptor::default();

    // Only direct children count: a <modules> block inside e.g. a plugin
    // configuration must not be mistaken for the project's own modules.
    for child in project.children() {
        if child.has_tag_name("modules") {
            raw.modules = child_texts(&child, "module");
        } else if child.has_tag_name("build") {
            for build_child in child.children() {
                if build_child.has_tag_name("sourceDirectory") {
                    raw.source_dir = trimmed_text(&build_child);
                } else if build_child.has_tag_name("testSourceDirectory") {
                    raw.test_source_dir = trimmed_text(&build_child);
                } else if build_child.has_tag_name("resources") {
                    raw.resource_dirs = directory_texts(&build_child, "resource");
                } else if build_child.has_tag_name("testResources") {
                    raw.test_resource_dirs = directory_texts(&build_child, "testResource");
                }
            }
        }
    }

    Ok(raw)
}

fn trimmed_text(node: &Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Texts of `<tag>` children, in document order.
fn child_texts(parent: &Node, tag: &str) -> Vec<String> {
    parent
        .children()
        .filter(|child| child.has_tag_name(tag))
        .filter_map(|child| trimmed_text(&child))
        .collect()
}

/// `<directory>` texts of `<tag>` children, in document order.
fn directory_texts(parent: &Node, tag: &str) -> Vec<String> {
    parent
        .children()
        .filter(|child| child.has_tag_name(tag))
        .filter_map(|child| {
            child
                .children()
                .find(|grandchild| grandchild.has_tag_name("directory"))
                .and_then(|directory| trimmed_text(&directory))
        })
        .collect()
}

fn resolve(base_dir: &Path, configured: Option<String>, default: &str) -> PathBuf {
    let dir = configured.unwrap_or_else(|| default.to_string());
    let path = PathBuf::from(dir);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

fn resolve_all(base_dir: &Path, configured: Vec<String>, default: &str) -> Vec<PathBuf> {
    if configured.is_empty() {
        return vec![resolve(base_dir, None, default)];
    }
    configured
        .into_iter()
        .map(|dir| resolve(base_dir, Some(dir), default))
        .collect()
}
