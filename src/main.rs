//! Polyharmonic - plots the harmonic signals of one variant from a data file.

use anyhow::{Context, Result};
use clap::Parser;
use polyharmonic::{ChartSurface, Dashboard, ViewConfig, load_variants, select_variant};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Harmonic and polyharmonic signal modelling
#[derive(Parser)]
#[command(name = "polyharmonic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON file with variant records
    data_path: PathBuf,

    /// Variant to visualize, counting from 1
    variant: usize,
}

fn main() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let variants = load_variants(&cli.data_path).context("loading variant data")?;
    let variant = select_variant(&variants, cli.variant).context("selecting variant")?;
    let config = ViewConfig::default();
    let dashboard = Dashboard::build(variant, &config).context("building views")?;
    info!(variant = cli.variant, "views ready");

    surface(&config)
        .present(dashboard)
        .context("showing charts")?;
    Ok(())
}

#[cfg(feature = "gui")]
fn surface(config: &ViewConfig) -> impl ChartSurface {
    polyharmonic::WindowSurface::new(config.figure_title.as_str())
}

#[cfg(not(feature = "gui"))]
fn surface(_config: &ViewConfig) -> impl ChartSurface {
    polyharmonic::LogSurface
}
