use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::HeuristicsConfig;

/// Per-signal caps. Each signal is bounded on its own before the
/// global clamp of the summed score.
pub const FILENAME_SIGNAL_CAP: u32 = 60;
pub const EXTENSION_SIGNAL_CAP: u32 = 45;
pub const DIRECTORY_SIGNAL_CAP: u32 = 60;
pub const SIZE_SIGNAL_CAP: u32 = 25;

/// Flat score for extensions absent from the weight table.
const UNKNOWN_EXTENSION_SCORE: u32 = 5;

/// Filename keywords that each add 30 points when present.
const CRITICAL_KEYWORDS: &[&str] = &[
    "contract", "contrato", "password", "senha", "key", "chave",
    "backup", "financial", "financeiro", "confidential", "secret",
    "admin", "root", "master", "private", "legal",
];

/// Extension weights in [0, 1]; the signal is floor(weight * 50).
const EXTENSION_WEIGHTS: &[(&str, f64)] = &[
    // Documents
    (".pdf", 0.7),
    (".docx", 0.6),
    (".xlsx", 0.8),
    // Source code
    (".py", 0.4),
    (".rs", 0.4),
    (".js", 0.3),
    (".sql", 0.9),
    // Configuration
    (".env", 0.9),
    (".config", 0.6),
    (".json", 0.5),
    // Backups
    (".bak", 0.8),
    (".dump", 0.9),
    // Cache/temp
    (".tmp", 0.1),
    (".cache", 0.1),
    (".log", 0.2),
];

/// Directory names that mark a parent path as sensitive.
const CRITICAL_DIRS: &[&str] = &[
    "contracts", "financial", "backup", "keys",
    "passwords", "confidential", "legal",
];

lazy_static! {
    // Date-like filename fragments (e.g. 2024-01-15) often mark backups.
    static ref DATE_PATTERN: Regex = Regex::new(r"\d{4}[-_]\d{2}[-_]\d{2}").unwrap();
    static ref VERSION_PATTERN: Regex = Regex::new(r"v\d+\.\d+").unwrap();
}

/// The fixed scoring tables plus the four signal functions that read
/// them. Immutable after construction; safe to share across threads if
/// a host ever parallelizes a scan.
#[derive(Debug, Clone)]
pub struct Heuristics {
    critical_keywords: Vec<String>,
    extension_weights: HashMap<String, f64>,
    critical_dirs: Vec<String>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics {
            critical_keywords: CRITICAL_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            extension_weights: EXTENSION_WEIGHTS
                .iter()
                .map(|(ext, w)| (ext.to_string(), *w))
                .collect(),
            critical_dirs: CRITICAL_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl Heuristics {
    /// Append user-supplied keywords and directory names from the
    /// config file. The built-in tables are additive-only.
    pub fn with_config(mut self, config: &HeuristicsConfig) -> Self {
        self.critical_keywords
            .extend(config.extra_keywords.iter().map(|k| k.to_lowercase()));
        self.critical_dirs
            .extend(config.extra_critical_dirs.iter().map(|d| d.to_lowercase()));
        self
    }

    /// Score the filename: 30 per matched keyword, 15 for a date-like
    /// fragment, 10 for a version marker. Capped at 60.
    pub fn filename_score(&self, filename: &str) -> u32 {
        let mut score = 0;
        let filename_lower = filename.to_lowercase();

        for keyword in &self.critical_keywords {
            if filename_lower.contains(keyword.as_str()) {
                score += 30;
            }
        }

        if DATE_PATTERN.is_match(filename) {
            score += 15;
        }

        if VERSION_PATTERN.is_match(&filename_lower) {
            score += 10;
        }

        score.min(FILENAME_SIGNAL_CAP)
    }

    /// Score the extension (lower-cased, with leading dot) against the
    /// weight table. Unknown extensions get a flat 5.
    pub fn extension_score(&self, extension: &str) -> u32 {
        match self.extension_weights.get(&extension.to_lowercase()) {
            Some(weight) => ((weight * 50.0) as u32).min(EXTENSION_SIGNAL_CAP),
            None => UNKNOWN_EXTENSION_SCORE,
        }
    }

    /// Score the parent directory: 50 on the first critical-name
    /// substring match, 10 more for paths buried deeper than 5
    /// segments. Capped at 60.
    pub fn directory_score(&self, parent: &Path) -> u32 {
        let mut score = 0;
        let dir_lower = parent.display().to_string().to_lowercase();

        for critical_dir in &self.critical_dirs {
            if dir_lower.contains(critical_dir.as_str()) {
                score += 50;
                break;
            }
        }

        if parent.components().count() > 5 {
            score += 10;
        }

        score.min(DIRECTORY_SIGNAL_CAP)
    }

    /// Score the byte size. Very large files and sub-kilobyte files
    /// (likely configs or keys) score above the baseline.
    pub fn size_score(size_bytes: u64) -> u32 {
        let score = if size_bytes > 100_000_000 {
            25
        } else if size_bytes > 10_000_000 {
            15
        } else if size_bytes > 1_000_000 {
            10
        } else if size_bytes < 1024 {
            15
        } else {
            5
        };
        score.min(SIZE_SIGNAL_CAP)
    }
}

/// Human-readable byte formatting with one decimal (B/KB/MB/GB/TB).
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}TB", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_keyword_adds_30() {
        let h = Heuristics::default();
        assert_eq!(h.filename_score("backup.tar"), 30);
    }

    #[test]
    fn test_filename_each_keyword_counts() {
        let h = Heuristics::default();
        // "secret" and "key" both match
        assert_eq!(h.filename_score("secret_key.pem"), 60);
    }

    #[test]
    fn test_filename_score_capped_at_60() {
        let h = Heuristics::default();
        // admin + root + master + private = 120 raw
        assert_eq!(h.filename_score("admin_root_master_private.txt"), 60);
    }

    #[test]
    fn test_filename_date_pattern() {
        let h = Heuristics::default();
        assert_eq!(h.filename_score("export_2024-01-15.csv"), 15);
        assert_eq!(h.filename_score("export_2024_01_15.csv"), 15);
        assert_eq!(h.filename_score("export_20240115.csv"), 0);
    }

    #[test]
    fn test_filename_version_pattern() {
        let h = Heuristics::default();
        assert_eq!(h.filename_score("release_v2.1.zip"), 10);
        assert_eq!(h.filename_score("release_V2.1.zip"), 10);
        assert_eq!(h.filename_score("release_v2.zip"), 0);
    }

    #[test]
    fn test_filename_case_insensitive_keywords() {
        let h = Heuristics::default();
        assert_eq!(h.filename_score("PASSWORD.TXT"), 30);
    }

    #[test]
    fn test_extension_weight_lookup() {
        let h = Heuristics::default();
        assert_eq!(h.extension_score(".sql"), 45);
        assert_eq!(h.extension_score(".env"), 45);
        assert_eq!(h.extension_score(".pdf"), 35);
        assert_eq!(h.extension_score(".py"), 20);
        assert_eq!(h.extension_score(".log"), 10);
        assert_eq!(h.extension_score(".tmp"), 5);
    }

    #[test]
    fn test_extension_unknown_is_flat_5() {
        let h = Heuristics::default();
        assert_eq!(h.extension_score(".xyz"), 5);
        assert_eq!(h.extension_score(""), 5);
    }

    #[test]
    fn test_extension_case_insensitive() {
        let h = Heuristics::default();
        assert_eq!(h.extension_score(".SQL"), 45);
    }

    #[test]
    fn test_directory_critical_name_match() {
        let h = Heuristics::default();
        assert_eq!(h.directory_score(Path::new("/home/user/contracts")), 50);
    }

    #[test]
    fn test_directory_first_match_only() {
        let h = Heuristics::default();
        // Both "contracts" and "legal" appear; only one counts.
        assert_eq!(h.directory_score(Path::new("/data/contracts/legal")), 50);
    }

    #[test]
    fn test_directory_depth_bonus() {
        let h = Heuristics::default();
        // 7 components incl. the root
        assert_eq!(h.directory_score(Path::new("/a/b/c/d/e/f")), 10);
        assert_eq!(h.directory_score(Path::new("/a/b/c/d")), 0);
    }

    #[test]
    fn test_directory_score_capped_at_60() {
        let h = Heuristics::default();
        assert_eq!(h.directory_score(Path::new("/a/b/c/d/e/passwords")), 60);
    }

    #[test]
    fn test_size_brackets() {
        assert_eq!(Heuristics::size_score(200_000_000), 25);
        assert_eq!(Heuristics::size_score(50_000_000), 15);
        assert_eq!(Heuristics::size_score(2_000_000), 10);
        assert_eq!(Heuristics::size_score(50), 15);
        assert_eq!(Heuristics::size_score(1024), 5);
        assert_eq!(Heuristics::size_score(500_000), 5);
    }

    #[test]
    fn test_signal_caps() {
        let h = Heuristics::default();
        assert!(h.filename_score("admin_root_master_private_secret_2024-01-15_v1.0") <= FILENAME_SIGNAL_CAP);
        assert!(h.extension_score(".dump") <= EXTENSION_SIGNAL_CAP);
        assert!(h.directory_score(Path::new("/a/b/c/d/e/f/backup")) <= DIRECTORY_SIGNAL_CAP);
        assert!(Heuristics::size_score(u64::MAX) <= SIZE_SIGNAL_CAP);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(50), "50.0B");
        assert_eq!(format_size(2048), "2.0KB");
        assert_eq!(format_size(2_097_152), "2.0MB");
        assert_eq!(format_size(3_221_225_472), "3.0GB");
        assert_eq!(format_size(2_199_023_255_552), "2.0TB");
    }

    #[test]
    fn test_with_config_extends_tables() {
        let config = HeuristicsConfig {
            extra_keywords: vec!["Payroll".to_string()],
            extra_critical_dirs: vec!["HR".to_string()],
        };
        let h = Heuristics::default().with_config(&config);
        assert_eq!(h.filename_score("payroll_data.xyz"), 30);
        assert_eq!(h.directory_score(Path::new("/srv/hr")), 50);
    }
}
