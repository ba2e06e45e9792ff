// File: crates/demo/src/main.rs
// Summary: Demo loads a graph.json layout plus optional points and renders the frame to SVG (and PNG).

use anyhow::{Context, Result};
use chart_core::config::{load_layout, load_points};
use chart_core::{theme, Chart, DataPoint};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "constellation-demo", about = "Render a Cartesian frame from a graph.json layout.")]
struct Args {
    /// Layout file in graph.json format.
    #[arg(short, long, default_value = "graph.json")]
    layout: PathBuf,

    /// Points to overlay: `.json` ({"DataVals": [...]}) or `.csv` with an `x,y,r` header.
    #[arg(short, long)]
    points: Option<PathBuf>,

    /// Base theme; colors in the layout file still win.
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// SVG output path.
    #[arg(short, long, default_value = "target/out/chart.svg")]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Outline every margin band.
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let base = theme::find(&args.theme);
    let mut config = load_layout(&args.layout, &base)
        .with_context(|| format!("failed to load layout '{}'", args.layout.display()))?;
    config.debug_outline |= args.outline;
    info!(layout = %args.layout.display(), theme = %base.name, "loaded layout");

    let points = match &args.points {
        Some(path) => read_points(path).with_context(|| format!("failed to load points '{}'", path.display()))?,
        None => Vec::new(),
    };
    info!(count = points.len(), "loaded points");

    let chart = Chart::new(config).with_points(points);
    let svg = chart.render_svg().context("failed to render frame")?;
    write_file(&args.out, svg.as_bytes())?;
    info!(path = %args.out.display(), "wrote svg");

    if let Some(png) = &args.png {
        chart_render_skia::render_to_png(&chart, png)?;
        info!(path = %png.display(), "wrote png");
    }
    Ok(())
}

fn read_points(path: &Path) -> Result<Vec<DataPoint>> {
    let is_csv = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_points_csv(path)
    } else {
        Ok(load_points(path)?)
    }
}

#[derive(Debug, Deserialize)]
struct CsvPoint {
    x: f64,
    y: f64,
    #[serde(alias = "radius")]
    r: f64,
}

/// Load points from a CSV with an `x,y,r` header.
fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<CsvPoint>().enumerate() {
        let p = rec.with_context(|| format!("row {} of {}", i + 1, path.display()))?;
        out.push(DataPoint::new(p.x, p.y, p.r));
    }
    Ok(out)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}
