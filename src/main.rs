mod classifier;
mod config;
mod report;
mod scan;

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

use classifier::{Classifier, Heuristics};

/// file-risk — CLI tool that rates file criticality from filesystem
/// metadata alone (name, extension, location, size) and aggregates a
/// directory tree into a risk report. File contents are never read.
#[derive(Parser, Debug)]
#[command(name = "file-risk", version, about)]
struct Cli {
    /// File or directory to analyze. A file prints its own analysis;
    /// a directory is scanned recursively into a risk report.
    path: PathBuf,

    /// Optional output file path for a markdown report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit JSON on stdout instead of the terminal view
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = config::Config::load()?;
    let classifier =
        Classifier::new(Heuristics::default().with_config(&config.heuristics));

    if cli.path.is_file() {
        let _span = info_span!("analyze_file", path = %cli.path.display()).entered();
        let analysis = classifier.analyze_file(&cli.path);
        info!(risk_score = analysis.risk_score, criticality = %analysis.criticality, "file analyzed");
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            report::print_file_analysis(&analysis);
        }
        return Ok(());
    }

    let _span = info_span!("scan", root = %cli.path.display()).entered();

    info!("scanning directory");
    let scanner = scan::Scanner::new(classifier).with_extra_skip_dirs(&config.scan.skip_dirs);
    let analyses = scanner.analyze_directory(&cli.path);
    info!(files = analyses.len(), "scan complete");

    info!("generating report");
    let risk_report = report::generate(&analyses);
    report::output(&risk_report, cli.output.as_deref(), cli.json)?;
    info!(
        critical = risk_report.criticality_distribution.critical,
        high = risk_report.criticality_distribution.high,
        "done"
    );

    Ok(())
}
