//! Hamburger star–disc–envelope model builder.
//!
//! Builds a protostellar envelope with an embedded flared disc on a Cartesian
//! grid, writes it in LIME's input format, prints its integrated properties
//! and renders diagnostic plots.
//!
//! ```text
//! hamburger --output run1 --divisions 100
//! hamburger --config burger.json --no-plots
//! ```

mod config;
mod pipeline;
mod plots;

#[cfg(test)]
mod pipeline_test;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::ModelConfig;

#[derive(Parser)]
#[command(name = "hamburger")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Star–disc–envelope model builder for LIME", long_about = None)]
struct Cli {
    /// JSON configuration; built-in defaults otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for LIME files and plots
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Override the divisions per grid axis
    #[arg(short, long)]
    divisions: Option<usize>,

    /// Skip plotting
    #[arg(long)]
    no_plots: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => ModelConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ModelConfig::default(),
    };
    if let Some(divisions) = cli.divisions {
        config.grid.divisions = divisions;
    }
    if cli.no_plots {
        config.plots.enabled = false;
    }
    config.validate().context("invalid configuration")?;

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let report = pipeline::run(&config, &cli.output)?;
    info!(
        total_mass_msun = report.properties.total_mass.to_solar_masses(),
        occupied_nodes = report.properties.occupied_nodes,
        lime_files = report.lime_files.all().len() + report.extra_files.len(),
        plots = report.plots.len(),
        elapsed_s = report.elapsed.as_secs_f64(),
        "run complete"
    );
    Ok(())
}
