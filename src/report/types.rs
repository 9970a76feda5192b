use std::collections::BTreeMap;

use serde::Serialize;

use crate::classifier::FileCategory;

/// File counts per criticality level. All four levels are always
/// present, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CriticalityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Share of the scanned files rated CRITICAL or HIGH, as percentages
/// rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskPercentage {
    pub critical: f64,
    pub high: f64,
}

/// Reduced view of a high-risk file for the report's top list.
#[derive(Debug, Clone, Serialize)]
pub struct TopFile {
    pub path: String,
    pub risk_score: u32,
    pub reasons: Vec<String>,
}

/// Aggregate risk report over one scan. Recomputed fresh from a set
/// of analyses; never persisted or updated incrementally.
#[derive(Debug, Default, Serialize)]
pub struct RiskReport {
    /// Number of files analyzed
    pub total_files: usize,
    /// Counts per criticality level
    pub criticality_distribution: CriticalityCounts,
    /// Counts per category; only observed categories appear
    pub category_distribution: BTreeMap<FileCategory, usize>,
    /// CRITICAL/HIGH share of the total
    pub risk_percentage: RiskPercentage,
    /// Up to 10 CRITICAL/HIGH files, highest risk_score first
    pub top_critical_files: Vec<TopFile>,
}
