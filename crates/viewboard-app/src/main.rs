//! Viewboard - Main Entry Point
//!
//! Fetches the viewership dataset, builds the dashboard over it and renders
//! every widget to disk. A failed dataset fetch aborts the run before any
//! artifact is written.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use viewboard_common::{
    logging::{init_logging, LoggingConfig},
    DatasetClient, Dimension, ProviderConfig,
};
use viewboard_config::{Config, ConfigLoader};
use viewboard_engine::{Dashboard, DemographicChoice, RecordStore, SelectionState, TabId};
use viewboard_render::{ChartConfig, DashboardRenderer};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level override
    #[arg(short, long)]
    log_level: Option<String>,

    /// Output directory override for rendered charts
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Restrict every tab to one country
    #[arg(long)]
    country: Option<String>,

    /// Restrict the location tab to one sport
    #[arg(long)]
    sport: Option<String>,

    /// Demographic axis ("age" or "gender")
    #[arg(long, default_value = "age")]
    demographic: String,
}

fn build_selection(args: &Args, board: &Dashboard) -> Result<SelectionState> {
    let mut state = SelectionState::new();

    match args.demographic.to_ascii_lowercase().as_str() {
        "age" => state.set_demographic(DemographicChoice::Age),
        "gender" => state.set_demographic(DemographicChoice::Gender),
        other => anyhow::bail!("unknown demographic axis '{}', expected age or gender", other),
    }

    if let Some(country) = &args.country {
        for tab in [
            TabId::Location,
            TabId::Demographic,
            TabId::PeakHour,
            TabId::Referrer,
            TabId::Device,
        ] {
            board.select(&mut state, tab, Dimension::Country, Some(country.clone()));
        }
    }

    if let Some(sport) = &args.sport {
        board.select(
            &mut state,
            TabId::Location,
            Dimension::Sport,
            Some(sport.clone()),
        );
    }

    Ok(state)
}

fn chart_config(config: &Config) -> ChartConfig {
    ChartConfig {
        width: config.render.width,
        height: config.render.height,
        background_color: config.render.background_color.clone(),
        primary_color: config.render.primary_color.clone(),
        font_family: config.render.font_family.clone(),
        font_size: config.render.font_size,
        ..ChartConfig::default()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = ConfigLoader::load_from(args.config.as_deref())
        .context("failed to load configuration")?;

    // Initialize logging, CLI level takes precedence over the config file
    init_logging(LoggingConfig {
        level: args
            .log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone()),
        compact_format: config.logging.compact_format,
        file_path: config.logging.file_path.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Starting Viewboard");

    // Fetch the dataset; nothing is rendered if this fails
    let client = DatasetClient::new(
        ProviderConfig::new(config.provider.url.clone())
            .with_timeout(config.provider.timeout_seconds)
            .with_max_retries(config.provider.max_retries as usize),
    )?;

    let records = match client.fetch_dataset().await {
        Ok(records) => records,
        Err(e) => {
            error!("Dataset fetch failed: {e}");
            return Err(e).context("dataset unavailable, aborting before rendering");
        }
    };
    info!(records = records.len(), "Dataset loaded");

    // Build the dashboard and apply CLI selections
    let board = Dashboard::new(Arc::new(RecordStore::new(records)));
    let state = build_selection(&args, &board)?;

    // Render every widget
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.render.output_dir.clone());
    let renderer = DashboardRenderer::new(&output_dir, chart_config(&config));

    let outputs = renderer.render_all(&board, &state).await?;
    for path in &outputs {
        println!("{}", path.display());
    }

    info!(widgets = outputs.len(), %output_dir, "Viewboard finished");
    Ok(())
}
