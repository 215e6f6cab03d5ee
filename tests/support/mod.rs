//! Shared test support: on-disk project fixtures and a mock tracing
//! engine.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracegate::{ImportSettings, ReportSettings, TraceEngine, Verdict};

/// Marker line the mock engine imports as a valid item.
pub const OK_MARKER: &str = "item: ok";

/// Marker line the mock engine imports as a defect item.
pub const DEFECT_MARKER: &str = "item: defect";

/// A temporary project tree built from descriptor files.
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create fixture dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a module descriptor; `module` is relative to the fixture
    /// root, empty meaning the root module itself.
    pub fn write_descriptor(&self, module: &str, xml: &str) {
        let dir = if module.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(module)
        };
        fs::create_dir_all(&dir).expect("create module dir");
        fs::write(dir.join("pom.xml"), xml).expect("write descriptor");
    }

    pub fn add_dir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    pub fn add_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write file");
        path
    }
}

/// Minimal descriptor declaring the given submodules.
pub fn pom(modules: &[&str]) -> String {
    if modules.is_empty() {
        return "<project><modelVersion>4.0.0</modelVersion></project>".to_string();
    }
    let entries: String = modules
        .iter()
        .map(|name| format!("<module>{name}</module>"))
        .collect();
    format!("<project><modelVersion>4.0.0</modelVersion><modules>{entries}</modules></project>")
}

#[derive(Debug)]
pub struct MockItem {
    pub defect: bool,
}

pub struct MockTrace {
    total: usize,
    defects: usize,
}

impl Verdict for MockTrace {
    fn count(&self) -> usize {
        self.total
    }

    fn defect_count(&self) -> usize {
        self.defects
    }
}

/// Engine that imports marker lines from the input files and renders the
/// classic plain summary (`ok - N total` / `not ok - N total, D defects`).
#[derive(Default)]
pub struct MockTraceEngine {
    pub import_calls: Cell<usize>,
    pub last_import: RefCell<Option<ImportSettings>>,
}

impl TraceEngine for MockTraceEngine {
    type Item = MockItem;
    type LinkedItem = MockItem;
    type Trace = MockTrace;

    fn import(&self, settings: &ImportSettings) -> anyhow::Result<Vec<MockItem>> {
        self.import_calls.set(self.import_calls.get() + 1);
        *self.last_import.borrow_mut() = Some(settings.clone());

        let mut items = Vec::new();
        for input in settings.inputs() {
            collect_items(input, &mut items)?;
        }
        Ok(items)
    }

    fn link(&self, items: Vec<MockItem>) -> Vec<MockItem> {
        items
    }

    fn trace(&self, linked: Vec<MockItem>) -> MockTrace {
        MockTrace {
            total: linked.len(),
            defects: linked.iter().filter(|item| item.defect).count(),
        }
    }

    fn render(
        &self,
        trace: &MockTrace,
        settings: &ReportSettings,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let newline = settings.newline.as_str();
        if trace.defect_count() == 0 {
            write!(out, "ok - {} total{}", trace.count(), newline)?;
        } else {
            let noun = if trace.defect_count() == 1 {
                "defect"
            } else {
                "defects"
            };
            write!(
                out,
                "not ok - {} total, {} {}{}",
                trace.count(),
                trace.defect_count(),
                noun,
                newline
            )?;
        }
        Ok(())
    }
}

fn collect_items(path: &Path, items: &mut Vec<MockItem>) -> anyhow::Result<()> {
    if path.is_file() {
        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            match line.trim() {
                OK_MARKER => items.push(MockItem { defect: false }),
                DEFECT_MARKER => items.push(MockItem { defect: true }),
                _ => {}
            }
        }
    } else if path.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(path)?.collect::<Result<_, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());
        for entry in entries {
            collect_items(&entry.path(), items)?;
        }
    }
    Ok(())
}
