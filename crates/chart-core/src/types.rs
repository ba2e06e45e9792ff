// File: crates/chart-core/src/types.rs
// Summary: Layout model value types (screen, margins, chart configuration) and defaults.

use crate::axis::{AxisKind, AxisSpec};
use crate::grid::GridSpec;
use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels (informational; the height is always derived).
pub const HEIGHT: u32 = 600;

/// Requested screen size in pixels.
/// Contract: `width > 0`. Only the width is authoritative, see [`crate::compute_layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSpec {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSpec {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// One side of the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Order in which margins are drawn; later margins paint over earlier ones.
    pub const STACKING: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The data axis whose ticks run along this side.
    pub const fn axis(self) -> AxisKind {
        match self {
            Side::Top | Side::Bottom => AxisKind::X,
            Side::Left | Side::Right => AxisKind::Y,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A value per side of the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Margins<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl<T> Margins<T> {
    pub const fn new(left: T, right: T, top: T, bottom: T) -> Self {
        Self { left, right, top, bottom }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Values in stacking order (top, bottom, left, right).
    pub fn stacked(&self) -> impl Iterator<Item = (Side, &T)> + '_ {
        Side::STACKING.into_iter().map(move |side| (side, self.get(side)))
    }
}

impl Margins<MarginSpec> {
    /// Total horizontal margin (left + right) in pixels.
    pub fn hsum(&self) -> u64 {
        u64::from(self.left.size) + u64::from(self.right.size)
    }

    /// Total vertical margin (top + bottom) in pixels.
    pub fn vsum(&self) -> u64 {
        u64::from(self.top.size) + u64::from(self.bottom.size)
    }
}

/// Styling and tick configuration for one margin band.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginSpec {
    /// Band thickness in pixels.
    pub size: u32,
    /// Draw the axis line, ticks and tick labels along the plot edge.
    pub axis_line: bool,
    pub stroke: String,
    pub stroke_width: f64,
    /// Data units between ticks; `<= 0` follows the grid unit.
    pub tick_unit: f64,
    pub tick_length: f64,
    pub tick_stroke_width: f64,
    pub tick_font_size: f64,
    /// Gap between the tick end and its label.
    pub tick_label_offset: f64,
    pub label_font_size: f64,
    /// Axis label text; empty falls back to the axis label.
    pub label: String,
}

impl MarginSpec {
    /// A blank band of `size` pixels with no axis line.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            axis_line: false,
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            tick_unit: 0.0,
            tick_length: 5.0,
            tick_stroke_width: 1.0,
            tick_font_size: 10.0,
            tick_label_offset: 3.0,
            label_font_size: 14.0,
            label: String::new(),
        }
    }

    /// Same band with an axis line and ticks enabled.
    pub fn with_axis(mut self) -> Self {
        self.axis_line = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self::new(50)
    }
}

/// Everything needed to lay out and draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub screen: ScreenSpec,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub grid: GridSpec,
    pub margins: Margins<MarginSpec>,
    pub theme: Theme,
    /// Outline every margin band, for layout debugging.
    pub debug_outline: bool,
}

impl ChartConfig {
    pub fn axis(&self, kind: AxisKind) -> &AxisSpec {
        match kind {
            AxisKind::X => &self.x_axis,
            AxisKind::Y => &self.y_axis,
        }
    }

    /// Axis label text for `side`, falling back to the axis label.
    pub fn label_for(&self, side: Side) -> &str {
        let margin = self.margins.get(side);
        if margin.label.is_empty() {
            &self.axis(side.axis()).label
        } else {
            &margin.label
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSpec::default(),
            x_axis: AxisSpec::default_x(),
            y_axis: AxisSpec::default_y(),
            grid: GridSpec::default(),
            margins: Margins::new(
                MarginSpec::new(60).with_axis(),
                MarginSpec::new(40),
                MarginSpec::new(40),
                MarginSpec::new(60).with_axis(),
            ),
            theme: Theme::default(),
            debug_outline: false,
        }
    }
}
