use std::path::Path;

use tracing::{error, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::classifier::{Classifier, FileAnalysis};

/// Directory names never descended into, at any depth.
const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "__pycache__", "node_modules"];

/// Recursive directory scanner. Walks a tree, scores every regular
/// file through the classifier, and degrades silently on anything
/// unreadable. A scan always returns a value.
pub struct Scanner {
    classifier: Classifier,
    skip_dirs: Vec<String>,
}

impl Scanner {
    pub fn new(classifier: Classifier) -> Self {
        Scanner {
            classifier,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Add configured directory names to the built-in skip list.
    pub fn with_extra_skip_dirs(mut self, extra: &[String]) -> Self {
        self.skip_dirs.extend(extra.iter().cloned());
        self
    }

    /// Analyze every regular file under `root`.
    ///
    /// Unreadable entries are logged and skipped; an unreadable root
    /// is logged and yields an empty result. Neither case is an error
    /// to the caller.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn analyze_directory(&self, root: &Path) -> Vec<FileAnalysis> {
        let mut analyses = Vec::new();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| self.keep(entry));

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    analyses.push(self.classifier.analyze_file(entry.path()));
                }
                Ok(_) => {}
                Err(err) => {
                    // A depth-0 error means the root itself was unreadable.
                    if err.depth() == 0 {
                        error!(root = %root.display(), error = %err, "failed to scan directory");
                        return Vec::new();
                    }
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!(path = %path, error = %err, "skipping unreadable entry");
                }
            }
        }

        analyses
    }

    /// Traversal filter: prune skip-listed directories. The root is
    /// always kept, and the list only applies to directories; a file
    /// that happens to share a skip name is still scored.
    fn keep(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .map(|name| !self.skip_dirs.iter().any(|d| d == name))
            .unwrap_or(true)
    }
}
