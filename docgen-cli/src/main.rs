//! docgen: one document per spreadsheet row.
//!
//! # Usage
//!
//! ```text
//! docgen --file <path.csv|path.xlsx>
//! ```
//!
//! Documents are written to `~/Desktop/email-output/<name>.html`. Set
//! `RUST_LOG=debug` to trace the pipeline.

mod paths;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use docgen_output::{pipeline, RunSummary, WriteResult};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "docgen",
    version,
    about = "Generate one HTML document per row of a CSV or XLSX file",
    long_about = None,
)]
struct Cli {
    /// Input file (.csv, or .xlsx with a sheet named Sheet1).
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(input) = cli.file else {
        eprintln!("{}", Cli::command().render_help());
        bail!("input file not provided; pass --file <PATH>");
    };

    let home = dirs::home_dir().context("could not determine home directory")?;
    let output_dir = paths::output_dir(&home);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("could not create {}", output_dir.display()))?;

    let summary = pipeline::run(&input, &output_dir)
        .with_context(|| format!("failed to generate documents from {}", input.display()))?;
    print_results(&summary);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_results(summary: &RunSummary) {
    if summary.writes.is_empty() {
        println!("{} no data rows found, nothing to do", "✓".green());
        return;
    }

    for w in &summary.writes {
        match w {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::Replaced { path } => {
                println!("  {}  {} (replaced)", "↻".yellow(), path.display())
            }
        }
    }
    println!(
        "{} {} document(s) generated from {} row(s)",
        "✓".green(),
        summary.writes.len(),
        summary.rows
    );
}
