// File: crates/demo/src/main.rs
// Summary: Demo encodes the built-in team dataset and writes the chart as SVG, JSON and optionally PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barchart_core::{sample, BarChart, ChartConfig};
use barchart_render_svg::{theme, SvgRenderer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "barchart-demo", version)]
struct Cli {
    /// Directory receiving the rendered files.
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Chart configuration JSON; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Colour theme (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Also rasterize the chart to PNG.
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ChartConfig::default(),
    };

    let data = sample::teams();
    let chart = BarChart::new(config)
        .encode(&data)
        .context("failed to encode team chart")?;
    tracing::info!(
        bars = chart.bars.len(),
        value_ticks = chart.value_axis.ticks.len(),
        "encoded chart"
    );

    let renderer = SvgRenderer::new(theme::find(&cli.theme));

    let svg_path = cli.out_dir.join("bar_chart.svg");
    renderer.render_to_svg(&chart, &svg_path)?;
    tracing::info!(path = %svg_path.display(), "wrote svg");

    let json_path = cli.out_dir.join("bar_chart.json");
    let json = serde_json::to_string_pretty(&chart)?;
    std::fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
    tracing::info!(path = %json_path.display(), "wrote primitives");

    if cli.png {
        let png_path = cli.out_dir.join("bar_chart.png");
        renderer.render_to_png(&chart, &png_path)?;
        tracing::info!(path = %png_path.display(), "wrote png");
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let config: ChartConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
