use serde::Serialize;

/// Criticality level assigned to a file, from least to most sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CriticalityLevel {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl CriticalityLevel {
    /// Map a raw (pre-clamp) signal sum to a criticality bracket.
    /// Sums above 100 stay in the CRITICAL bracket; the score clamp
    /// happens after this lookup, never before.
    pub fn from_raw_score(raw_score: u32) -> CriticalityLevel {
        if raw_score >= 80 {
            CriticalityLevel::Critical
        } else if raw_score >= 60 {
            CriticalityLevel::High
        } else if raw_score >= 30 {
            CriticalityLevel::Medium
        } else {
            CriticalityLevel::Low
        }
    }

    /// Confidence is a fixed lookup per bracket, not independent data.
    pub fn confidence(self) -> f64 {
        match self {
            CriticalityLevel::Critical => 0.90,
            CriticalityLevel::High => 0.80,
            CriticalityLevel::Medium => 0.70,
            CriticalityLevel::Low => 0.60,
        }
    }
}

impl std::fmt::Display for CriticalityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriticalityLevel::Low => write!(f, "LOW"),
            CriticalityLevel::Medium => write!(f, "MEDIUM"),
            CriticalityLevel::High => write!(f, "HIGH"),
            CriticalityLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Coarse file category derived from the extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FileCategory {
    Document,
    Spreadsheet,
    #[serde(rename = "Source Code")]
    SourceCode,
    Database,
    Configuration,
    Image,
    Video,
    Archive,
    Log,
    Other,
}

impl FileCategory {
    /// Categorize from a lower-cased extension including the leading dot
    /// (e.g. ".pdf"). Extensions outside the fixed sets map to Other.
    pub fn from_extension(extension: &str) -> FileCategory {
        match extension {
            ".pdf" | ".docx" | ".doc" | ".txt" => FileCategory::Document,
            ".xlsx" | ".csv" | ".xls" => FileCategory::Spreadsheet,
            ".py" | ".rs" | ".js" | ".java" | ".cpp" | ".c" => FileCategory::SourceCode,
            ".sql" | ".db" | ".sqlite" => FileCategory::Database,
            ".json" | ".yaml" | ".yml" | ".toml" | ".env" => FileCategory::Configuration,
            ".jpg" | ".png" | ".gif" | ".bmp" => FileCategory::Image,
            ".mp4" | ".avi" | ".mov" => FileCategory::Video,
            ".zip" | ".tar" | ".gz" | ".rar" => FileCategory::Archive,
            ".log" => FileCategory::Log,
            _ => FileCategory::Other,
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileCategory::Document => "Document",
            FileCategory::Spreadsheet => "Spreadsheet",
            FileCategory::SourceCode => "Source Code",
            FileCategory::Database => "Database",
            FileCategory::Configuration => "Configuration",
            FileCategory::Image => "Image",
            FileCategory::Video => "Video",
            FileCategory::Archive => "Archive",
            FileCategory::Log => "Log",
            FileCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Result of scoring a single file. Produced once by the classifier
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    /// Path the file was scored under (not validated to exist)
    pub path: String,
    /// Criticality bracket implied by the raw signal sum
    pub criticality: CriticalityLevel,
    /// Fixed per-bracket confidence in [0, 1]
    pub confidence: f64,
    /// Which heuristics fired, in signal order; may be empty
    pub reasons: Vec<String>,
    /// Category from the extension, independent of the score
    pub category: FileCategory,
    /// Signal sum clamped to [0, 100]
    pub risk_score: u32,
}
