pub mod types;

pub use types::{CriticalityCounts, RiskPercentage, RiskReport, TopFile};

use std::path::Path;

use colored::Colorize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::classifier::{CriticalityLevel, FileAnalysis};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reduce a set of file analyses into a risk report.
///
/// Pure function, no I/O. An empty input produces the default report
/// (all counts zero, empty category map) rather than an error.
pub fn generate(analyses: &[FileAnalysis]) -> RiskReport {
    if analyses.is_empty() {
        return RiskReport::default();
    }

    let total_files = analyses.len();

    let mut counts = CriticalityCounts::default();
    for analysis in analyses {
        match analysis.criticality {
            CriticalityLevel::Critical => counts.critical += 1,
            CriticalityLevel::High => counts.high += 1,
            CriticalityLevel::Medium => counts.medium += 1,
            CriticalityLevel::Low => counts.low += 1,
        }
    }

    let mut category_distribution = std::collections::BTreeMap::new();
    for analysis in analyses {
        *category_distribution.entry(analysis.category).or_insert(0) += 1;
    }

    let risk_percentage = RiskPercentage {
        critical: percentage(counts.critical, total_files),
        high: percentage(counts.high, total_files),
    };

    // Stable sort keeps scan order for equal scores.
    let mut high_risk: Vec<&FileAnalysis> = analyses
        .iter()
        .filter(|a| a.criticality >= CriticalityLevel::High)
        .collect();
    high_risk.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    let top_critical_files = high_risk
        .into_iter()
        .take(10)
        .map(|a| TopFile {
            path: a.path.clone(),
            risk_score: a.risk_score,
            reasons: a.reasons.clone(),
        })
        .collect();

    RiskReport {
        total_files,
        criticality_distribution: counts,
        category_distribution,
        risk_percentage,
        top_critical_files,
    }
}

/// count/total as a percentage, rounded to two decimals.
fn percentage(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
}

/// Output the report: JSON on stdout, markdown to a file, or the
/// colored terminal view by default.
#[instrument(skip(report), fields(total = report.total_files))]
pub fn output(report: &RiskReport, output_path: Option<&Path>, json: bool) -> Result<(), ReportError> {
    if json {
        debug!("writing report as JSON");
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    match output_path {
        None => {
            debug!("writing report to terminal");
            print_terminal_report(report);
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), "writing report to file");
            write_markdown_report(report, path)
        }
    }
}

/// Print a single file's analysis to the terminal.
pub fn print_file_analysis(analysis: &FileAnalysis) {
    println!();
    println!("File: {}", analysis.path);
    println!(
        "Criticality: {} (confidence {:.2})",
        colorize_criticality(analysis.criticality),
        analysis.confidence
    );
    println!("Risk Score: {}/100", analysis.risk_score);
    println!("Category: {}", analysis.category);
    if analysis.reasons.is_empty() {
        println!("Reasons: none");
    } else {
        println!("Reasons:");
        for reason in &analysis.reasons {
            println!("  • {}", reason);
        }
    }
    println!();
}

/// Format and print the report to the terminal with colors.
fn print_terminal_report(report: &RiskReport) {
    println!();
    println!("Analyzed {} files", report.total_files);
    println!();

    println!("═══ Criticality Distribution ═══");
    let counts = &report.criticality_distribution;
    println!("  {}: {}", colorize_criticality(CriticalityLevel::Critical), counts.critical);
    println!("  {}: {}", colorize_criticality(CriticalityLevel::High), counts.high);
    println!("  {}: {}", colorize_criticality(CriticalityLevel::Medium), counts.medium);
    println!("  {}: {}", colorize_criticality(CriticalityLevel::Low), counts.low);
    println!();

    println!("═══ Category Distribution ═══");
    if report.category_distribution.is_empty() {
        println!("  No files.");
    } else {
        for (category, count) in &report.category_distribution {
            println!("  {}: {}", category, count);
        }
    }
    println!();

    println!(
        "═══ At Risk: {:.2}% critical, {:.2}% high ═══",
        report.risk_percentage.critical, report.risk_percentage.high
    );
    println!();

    println!("═══ Top Critical Files ═══");
    if report.top_critical_files.is_empty() {
        println!("  None.");
    } else {
        for file in &report.top_critical_files {
            println!("  • {} (score {})", file.path, file.risk_score);
            for reason in &file.reasons {
                println!("      - {}", reason);
            }
        }
    }
    println!();
}

/// Write the report as a markdown file.
fn write_markdown_report(report: &RiskReport, path: &Path) -> Result<(), ReportError> {
    let mut md = String::new();
    md.push_str("# File Risk Report\n\n");
    md.push_str(&format!("**Total files:** {}\n\n", report.total_files));

    md.push_str("## Criticality Distribution\n\n");
    let counts = &report.criticality_distribution;
    md.push_str(&format!("- **CRITICAL:** {}\n", counts.critical));
    md.push_str(&format!("- **HIGH:** {}\n", counts.high));
    md.push_str(&format!("- **MEDIUM:** {}\n", counts.medium));
    md.push_str(&format!("- **LOW:** {}\n\n", counts.low));

    md.push_str("## Category Distribution\n\n");
    if report.category_distribution.is_empty() {
        md.push_str("No files.\n\n");
    } else {
        for (category, count) in &report.category_distribution {
            md.push_str(&format!("- {}: {}\n", category, count));
        }
        md.push('\n');
    }

    md.push_str("## Risk Percentage\n\n");
    md.push_str(&format!("- CRITICAL: {:.2}%\n", report.risk_percentage.critical));
    md.push_str(&format!("- HIGH: {:.2}%\n\n", report.risk_percentage.high));

    md.push_str("## Top Critical Files\n\n");
    if report.top_critical_files.is_empty() {
        md.push_str("None.\n");
    } else {
        for file in &report.top_critical_files {
            md.push_str(&format!("- `{}` — score {}\n", file.path, file.risk_score));
            for reason in &file.reasons {
                md.push_str(&format!("  - {}\n", reason));
            }
        }
    }

    std::fs::write(path, md)?;
    Ok(())
}

/// Helper to colorize a criticality level for terminal output.
fn colorize_criticality(level: CriticalityLevel) -> colored::ColoredString {
    match level {
        CriticalityLevel::Critical => "CRITICAL".red().bold(),
        CriticalityLevel::High => "HIGH".red(),
        CriticalityLevel::Medium => "MEDIUM".yellow().bold(),
        CriticalityLevel::Low => "LOW".green().bold(),
    }
}
