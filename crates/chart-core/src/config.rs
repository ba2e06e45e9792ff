// File: crates/chart-core/src/config.rs
// Summary: JSON loader for layout files and point files (graph.json / datapoints.json format).
// Notes:
// - This is the configuration collaborator, not part of the render path: it
//   only turns file contents into a `ChartConfig` / `Vec<DataPoint>`.
// - Shape errors (missing keys, wrong types, negative sizes) surface as
//   `ConfigError::Malformed`; range errors are left to `compute_layout`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::axis::AxisSpec;
use crate::grid::GridSpec;
use crate::log::debug;
use crate::overlay::DataPoint;
use crate::theme::Theme;
use crate::types::{ChartConfig, MarginSpec, Margins, ScreenSpec};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration in {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LayoutFile {
    #[serde(default, rename = "Testing")]
    debug_outline: bool,
    #[serde(rename = "TestingBackgroundColor")]
    debug_fill: Option<String>,
    #[serde(rename = "TestingStrokeColor")]
    debug_stroke: Option<String>,
    background_color: Option<String>,
    stroke_color: Option<String>,
    font_family: Option<String>,
    screen: ScreenFile,
    graph: GraphFile,
    #[serde(rename = "Margs")]
    margins: MarginsFile,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ScreenFile {
    width: u32,
    #[serde(default)]
    height: u32,
}

#[derive(Deserialize)]
struct GraphFile {
    #[serde(default, rename = "XaxisLabel")]
    x_label: String,
    #[serde(rename = "XaxisUnitmin")]
    x_min: f64,
    #[serde(rename = "XaxisUnitmax")]
    x_max: f64,
    #[serde(default, rename = "YaxisLabel")]
    y_label: String,
    #[serde(rename = "YaxisUnitmin")]
    y_min: f64,
    #[serde(rename = "YaxisUnitmax")]
    y_max: f64,
    #[serde(default, rename = "Grid")]
    grid: bool,
    #[serde(default, rename = "GridUnit")]
    grid_unit: f64,
    #[serde(default, rename = "GridColor")]
    grid_color: Option<String>,
}

#[derive(Deserialize)]
struct MarginsFile {
    #[serde(rename = "Left")]
    left: MarginFile,
    #[serde(rename = "Right")]
    right: MarginFile,
    #[serde(rename = "Top")]
    top: MarginFile,
    #[serde(rename = "Bott", alias = "Bottom")]
    bottom: MarginFile,
}

#[derive(Deserialize)]
struct MarginFile {
    #[serde(rename = "Size")]
    size: u32,
    #[serde(default, rename = "AxisLine")]
    axis_line: bool,
    #[serde(default, rename = "Stroke")]
    stroke: Option<String>,
    #[serde(default, rename = "StrokeWt")]
    stroke_width: Option<f64>,
    #[serde(default, rename = "Ticunit")]
    tick_unit: Option<f64>,
    #[serde(default, rename = "Ticsize")]
    tick_length: Option<f64>,
    #[serde(default, rename = "Ticstroke")]
    tick_stroke_width: Option<f64>,
    #[serde(default, rename = "Ticfontpx")]
    tick_font_size: Option<f64>,
    #[serde(default, rename = "Ticfontoffset")]
    tick_label_offset: Option<f64>,
    #[serde(default, rename = "Labelpx")]
    label_font_size: Option<f64>,
    #[serde(default, rename = "Labeltext")]
    label: String,
}

impl MarginFile {
    fn into_spec(self) -> MarginSpec {
        let base = MarginSpec::new(self.size);
        MarginSpec {
            size: self.size,
            axis_line: self.axis_line,
            stroke: self.stroke.unwrap_or(base.stroke),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            tick_unit: self.tick_unit.unwrap_or(base.tick_unit),
            tick_length: self.tick_length.unwrap_or(base.tick_length),
            tick_stroke_width: self.tick_stroke_width.unwrap_or(base.tick_stroke_width),
            tick_font_size: self.tick_font_size.unwrap_or(base.tick_font_size),
            tick_label_offset: self.tick_label_offset.unwrap_or(base.tick_label_offset),
            label_font_size: self.label_font_size.unwrap_or(base.label_font_size),
            label: self.label,
        }
    }
}

impl LayoutFile {
    fn into_config(self, base: &Theme) -> ChartConfig {
        let mut theme = base.clone();
        if let Some(v) = self.background_color { theme.background = v; }
        if let Some(v) = self.stroke_color { theme.text = v; }
        if let Some(v) = self.font_family { theme.font_family = v; }
        if let Some(v) = self.debug_fill { theme.debug_fill = v; }
        if let Some(v) = self.debug_stroke { theme.debug_stroke = v; }

        let g = self.graph;
        let grid_defaults = GridSpec::default();
        ChartConfig {
            screen: ScreenSpec { width: self.screen.width, height: self.screen.height },
            x_axis: AxisSpec::new(g.x_label, g.x_min, g.x_max),
            y_axis: AxisSpec::new(g.y_label, g.y_min, g.y_max),
            grid: GridSpec {
                enabled: g.grid,
                unit: g.grid_unit,
                color: g.grid_color.unwrap_or(grid_defaults.color),
            },
            margins: Margins::new(
                self.margins.left.into_spec(),
                self.margins.right.into_spec(),
                self.margins.top.into_spec(),
                self.margins.bottom.into_spec(),
            ),
            theme,
            debug_outline: self.debug_outline,
        }
    }
}

#[derive(Deserialize)]
struct PointsFile {
    #[serde(rename = "DataVals", default)]
    points: Vec<DataPoint>,
}

/// Parse a layout document, layering its colors over `theme`.
pub fn parse_layout(json: &str, theme: &Theme) -> Result<ChartConfig, ConfigError> {
    parse_layout_from(json, theme, "<input>")
}

/// Read and parse a layout file.
pub fn load_layout(path: impl AsRef<Path>, theme: &Theme) -> Result<ChartConfig, ConfigError> {
    let path = path.as_ref();
    let json = read(path)?;
    let config = parse_layout_from(&json, theme, &path.display().to_string())?;
    debug!(path = %path.display(), "loaded layout");
    Ok(config)
}

/// Parse a points document (`{"DataVals": [{"x":..,"y":..,"r":..}]}`).
pub fn parse_points(json: &str) -> Result<Vec<DataPoint>, ConfigError> {
    parse_points_from(json, "<input>")
}

/// Read and parse a points file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, ConfigError> {
    let path = path.as_ref();
    let json = read(path)?;
    let points = parse_points_from(&json, &path.display().to_string())?;
    debug!(path = %path.display(), count = points.len(), "loaded points");
    Ok(points)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

fn parse_layout_from(json: &str, theme: &Theme, origin: &str) -> Result<ChartConfig, ConfigError> {
    let file: LayoutFile = serde_json::from_str(json)
        .map_err(|source| ConfigError::Malformed { origin: origin.to_string(), source })?;
    Ok(file.into_config(theme))
}

fn parse_points_from(json: &str, origin: &str) -> Result<Vec<DataPoint>, ConfigError> {
    let file: PointsFile = serde_json::from_str(json)
        .map_err(|source| ConfigError::Malformed { origin: origin.to_string(), source })?;
    Ok(file.points)
}
