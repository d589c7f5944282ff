//! Downgrade an RPE chart file to an older schema version.
//!
//! Usage:
//!   cargo run --example downgrade_chart -- <chart.json> [--target 105] [--minify]
//!
//! The output lands next to the input with the usual `_v<version>`
//! suffix in its name.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use rpe_downgrader::rpe::prelude::*;

#[derive(Debug, Parser)]
#[command(about = "Downgrade an RPE chart file to an older schema version")]
struct Args {
    /// Chart file to downgrade.
    chart: PathBuf,
    /// Version to downgrade to (100, 105 or 113). Defaults to the oldest
    /// one the chart can reach.
    #[arg(long)]
    target: Option<i64>,
    /// Write compact JSON instead of the four-space indented form.
    #[arg(long)]
    minify: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(&args.chart)?;
    let chart = parse_chart(&source)?;

    let version = chart.meta.rpe_version;
    println!("chart version: {version} ({})", version.editor_version());

    let target = match args.target {
        Some(number) => TargetVersion::try_from(number)?,
        None => TargetVersion::default_for(version)
            .ok_or("this chart is older than every downgrade target")?,
    };

    let downgraded = downgrade(&chart, target)?;
    let serialized = write_chart(&downgraded, args.minify)?;

    let input_name = args
        .chart
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("chart path has no usable file name")?;
    let output_name = output_file_name(input_name, target, args.minify);
    let output_path = args.chart.with_file_name(&output_name);
    fs::write(&output_path, serialized)?;

    println!("wrote {}", output_path.display());
    Ok(())
}
