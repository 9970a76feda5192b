pub mod heuristics;
pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use heuristics::Heuristics;
pub use types::{CriticalityLevel, FileAnalysis, FileCategory};

use heuristics::format_size;

/// Metadata-only file criticality scorer.
///
/// Scores four independent signals (filename, extension, parent
/// directory, byte size) against fixed tables, sums them, and
/// brackets the sum into a criticality level. No file content is
/// ever read; the only I/O is a best-effort size lookup.
pub struct Classifier {
    heuristics: Heuristics,
}

impl Classifier {
    /// Build a classifier around its scoring tables. Callers pass
    /// `Heuristics::default()` for the built-ins, or substitute
    /// extended/alternate tables.
    pub fn new(heuristics: Heuristics) -> Self {
        Classifier { heuristics }
    }

    /// Score a single file from its path and (when readable) its size.
    ///
    /// Never fails: a missing file or unreadable metadata just drops
    /// the size signal. The criticality bracket is looked up on the
    /// raw signal sum before the final clamp to 100.
    pub fn analyze_file(&self, path: &Path) -> FileAnalysis {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        let parent = path.parent().unwrap_or_else(|| Path::new(""));

        let mut reasons = Vec::new();
        let mut raw_score = 0u32;

        let filename_score = self.heuristics.filename_score(&filename);
        raw_score += filename_score;
        if filename_score > 50 {
            reasons.push(format!("suspicious name: {}", filename));
        }

        let extension_score = self.heuristics.extension_score(&extension);
        raw_score += extension_score;
        if extension_score > 30 {
            reasons.push(format!("critical extension: {}", extension));
        }

        let directory_score = self.heuristics.directory_score(parent);
        raw_score += directory_score;
        if directory_score > 40 {
            let parent_name = parent
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            reasons.push(format!("sensitive directory: {}", parent_name));
        }

        // Size lookup is best-effort; failure contributes nothing.
        if let Ok(metadata) = fs::metadata(path) {
            let size_score = Heuristics::size_score(metadata.len());
            raw_score += size_score;
            if size_score > 20 {
                reasons.push(format!("significant size: {}", format_size(metadata.len())));
            }
        }

        let criticality = CriticalityLevel::from_raw_score(raw_score);
        debug!(path = %path.display(), raw_score, criticality = %criticality, "scored file");

        FileAnalysis {
            path: path.display().to_string(),
            criticality,
            confidence: criticality.confidence(),
            reasons,
            category: FileCategory::from_extension(&extension),
            risk_score: raw_score.min(100),
        }
    }
}
