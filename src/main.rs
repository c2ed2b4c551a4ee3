//! txt2dxf - CLI tool to convert delimited survey point files to DXF.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use txt2dxf::{generate_drawing, map_rows, parse_input, ColumnMapping};

/// Convert delimited survey point files to layered DXF drawings.
#[derive(Parser, Debug)]
#[command(name = "txt2dxf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output DXF file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column mapping: 1 = Point,X,Y,Z,Code; 2 = Point,Y,X,Z,Code
    #[arg(short, long, default_value = "1", value_parser = ["1", "2"])]
    mapping: String,

    /// Output the canonical records as JSON and exit
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    let mapping = ColumnMapping::from_choice(&args.mapping)?;

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let parsed = parse_input(&bytes)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!(
        "Encoding {}, delimiter {}, {} row(s), {} column(s)",
        parsed.encoding,
        parsed.delimiter,
        parsed.rows.len(),
        parsed.column_count()
    );

    // Debug output
    if args.debug {
        let records = map_rows(&parsed.rows, &mapping)?;
        let json = serde_json::to_string_pretty(&records)?;
        println!("{}", json);
        return Ok(());
    }

    // Generate output
    let (dxf, report) = generate_drawing(&parsed.rows, &mapping)?;

    info!(
        "Emitted {} record(s): {} with geometry, {} as comment-only fallback",
        report.total(),
        report.succeeded(),
        report.fallbacks()
    );
    for index in report.skipped_indices() {
        warn!("Record {} was skipped", index);
    }

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("dxf");
        path
    });

    std::fs::write(&output_path, &dxf)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
