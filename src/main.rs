use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use hyperpi::evaluation::Snapshot;
use hyperpi::logging::init_tracing;
use hyperpi::ui::cli::drivers::InquireDriver;
use hyperpi::ui::cli::wizard::prompt_run_config;
use hyperpi::ui::report::Summary;
use hyperpi::ui::types::build::{build_estimator, reference_for, run_estimation};
use hyperpi::ui::types::choices::RunConfig;
use hyperpi::utils::ExportFormat;

#[derive(Parser)]
#[command(name = "hyperpi", version, about = "Estimate Pi by Monte Carlo sampling in n dimensions")]
struct Cli {
    /// JSON run configuration; prompts interactively when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the sampled points (plot input) to this file
    #[arg(long)]
    points_out: Option<PathBuf>,

    /// Write the per-iteration convergence curve to this file
    #[arg(long)]
    curve_out: Option<PathBuf>,

    /// Export format: csv, tsv or json
    #[arg(long, default_value = "csv")]
    format: ExportFormat,

    /// Log each iteration while sampling
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => RunConfig::from_json_file(path)?,
        None => {
            println!(
                "[ ] Pi can be estimated from a defined number of points or for a given deviation value."
            );
            prompt_run_config(&InquireDriver)?
        }
    };
    debug!(?config, "run configuration");

    let (tx, rx) = mpsc::channel::<Snapshot>();
    let progress = thread::spawn(move || {
        for snapshot in rx {
            debug!(%snapshot, "progress");
        }
    });

    let mut estimator = build_estimator(&config)?.with_progress(tx);
    let report = run_estimation(&mut estimator, &config.run)?;
    let reference = reference_for(&config.run);

    if let Some(path) = &cli.points_out {
        estimator
            .export_points(path, cli.format)
            .with_context(|| format!("failed to write points to {}", path.display()))?;
        info!(path = %path.display(), points = estimator.points_visited().len(), "points exported");
    }
    if let Some(path) = &cli.curve_out {
        report
            .curve
            .export(path, cli.format)
            .with_context(|| format!("failed to write curve to {}", path.display()))?;
        info!(path = %path.display(), "convergence curve exported");
    }

    println!("{}", Summary::new(&estimator, &report, reference));

    drop(estimator);
    if progress.join().is_err() {
        warn!("progress reporter panicked; some iteration logs may be missing");
    }
    Ok(())
}
