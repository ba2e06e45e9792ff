// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for frame layout and rendering.

pub mod log;
pub mod error;
pub mod types;
pub mod axis;
pub mod grid;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod backend;
pub mod overlay;
pub mod chart;
pub mod svg;
pub mod config;

pub use axis::{AxisKind, AxisSpec};
pub use backend::{replay, Baseline, Circle, DrawCmd, DrawingBackend, Line, Rect, Text, TextAnchor};
pub use chart::{Chart, Frame};
pub use config::ConfigError;
pub use error::ChartError;
pub use geometry::PlotArea;
pub use grid::{GridCounts, GridSpec};
pub use overlay::DataPoint;
pub use scale::{compute_layout, Layout, ScaleFactors};
pub use svg::SvgBackend;
pub use theme::Theme;
pub use types::{ChartConfig, MarginSpec, Margins, ScreenSpec, Side};
