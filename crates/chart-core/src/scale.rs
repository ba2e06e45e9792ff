// File: crates/chart-core/src/scale.rs
// Summary: Scale calculator; turns a ChartConfig into plot geometry, scale factors and cell counts.

use crate::axis::AxisKind;
use crate::error::ChartError;
use crate::geometry::PlotArea;
use crate::grid::{cell_count, GridCounts};
use crate::log::{debug, warn};
use crate::types::{ChartConfig, Margins, Side};

/// Pixels per data unit along each axis.
///
/// `y` carries the screen inversion (screen Y grows downward), so data Y
/// always increases upward on screen whichever way round the axis is given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

/// Derived geometry for one render. Computed fresh per call, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub screen_width: u32,
    /// Derived from the plot width and the data aspect ratio.
    pub screen_height: u32,
    pub plot: PlotArea,
    pub scale: ScaleFactors,
    pub grid: GridCounts,
    /// Tick intervals along each margin; exact for margins that draw an axis line.
    pub ticks: Margins<u32>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Layout {
    /// Screen row that `y_min` maps to.
    pub fn origin_row(&self) -> f64 {
        if self.y_max > self.y_min { self.plot.bottom() } else { self.plot.top() }
    }

    /// Data point to absolute screen coordinates. No clipping.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.plot.left() + (x - self.x_min) * self.scale.x,
            self.origin_row() + (y - self.y_min) * self.scale.y,
        )
    }

    /// Data X at `offset` pixels right of the plot's left edge.
    pub fn x_at_offset(&self, offset: f64) -> f64 {
        self.x_min + offset / self.scale.x
    }

    /// Data Y at `offset` pixels below the plot's top edge.
    pub fn y_at_offset(&self, offset: f64) -> f64 {
        self.y_min + (self.plot.top() + offset - self.origin_row()) / self.scale.y
    }

    /// Length in pixels of the plot edge a margin runs along.
    pub fn extent(&self, side: Side) -> f64 {
        match side.axis() {
            AxisKind::X => f64::from(self.plot.width),
            AxisKind::Y => f64::from(self.plot.height),
        }
    }

    /// Data value at `offset` pixels along the edge facing `side`.
    pub fn value_at(&self, side: Side, offset: f64) -> f64 {
        match side.axis() {
            AxisKind::X => self.x_at_offset(offset),
            AxisKind::Y => self.y_at_offset(offset),
        }
    }
}

/// Validate `config` and compute its layout.
///
/// This is the only place a render can fail: every division the renderer
/// performs is guarded here, so rendering a returned `Layout` is total.
pub fn compute_layout(config: &ChartConfig) -> Result<Layout, ChartError> {
    ensure_finite_fields(config)?;

    let x_axis = &config.x_axis;
    let y_axis = &config.y_axis;
    let x_units = x_axis.units();
    let y_units = y_axis.units();
    if !x_units.is_finite() || !y_units.is_finite() {
        return Err(ChartError::MalformedConfig("axis extent overflows".to_string()));
    }
    // Only Y may run backwards.
    if x_units <= 0.0 {
        return Err(ChartError::InvalidRange { axis: AxisKind::X, min: x_axis.min, max: x_axis.max });
    }
    if y_units == 0.0 {
        return Err(ChartError::InvalidRange { axis: AxisKind::Y, min: y_axis.min, max: y_axis.max });
    }

    let margins = &config.margins;
    let screen_width = config.screen.width;
    let hsum = margins.hsum();
    if hsum >= u64::from(screen_width) {
        return Err(ChartError::LayoutOverflow { screen_width, margins: hsum });
    }
    // hsum < screen_width, so this cannot underflow.
    let width = screen_width - hsum as u32;

    // Height keeps the data aspect ratio; its sign follows the Y orientation.
    let signed_height = (f64::from(width) * (y_units / x_units)).round();
    if signed_height == 0.0 {
        return Err(ChartError::CollapsedPlot { width });
    }
    let screen_height = signed_height.abs() + margins.vsum() as f64;
    if screen_height > f64::from(u32::MAX) {
        return Err(ChartError::MalformedConfig(format!(
            "derived screen height {screen_height} exceeds the pixel range"
        )));
    }
    let height = signed_height.abs() as u32;
    let screen_height = screen_height as u32;

    let scale = ScaleFactors { x: f64::from(width) / x_units, y: signed_height / -y_units };

    let pixels = |axis: AxisKind| match axis {
        AxisKind::X => width,
        AxisKind::Y => height,
    };

    let grid_unit = config.grid.unit;
    let grid = GridCounts {
        x_cells: subdivisions(AxisKind::X, x_units, grid_unit, width, config.grid.enabled)?,
        y_cells: subdivisions(AxisKind::Y, y_units, grid_unit, height, config.grid.enabled)?,
    };

    let mut ticks = Margins::new(0, 0, 0, 0);
    for (side, margin) in margins.stacked() {
        let axis = side.axis();
        let units = config.axis(axis).units();
        let unit = if margin.tick_unit > 0.0 { margin.tick_unit } else { grid_unit };
        *ticks.get_mut(side) = subdivisions(axis, units, unit, pixels(axis), margin.axis_line)?;
    }

    let plot = PlotArea::from_ltwh(margins.left.size, margins.top.size, width, height);

    debug!(x_units, y_units, "calculated units");
    debug!(x_scale = scale.x, y_scale = scale.y, aspect = scale.y.abs() / scale.x, "calculated scale");
    debug!(width, height, "calculated plot size");
    debug!(x_cells = grid.x_cells, y_cells = grid.y_cells, "calculated grid size");
    debug!(screen_width, screen_height, "calculated screen size");
    if config.screen.height != 0 && config.screen.height != screen_height {
        warn!(
            requested = config.screen.height,
            derived = screen_height,
            "screen height is derived from the aspect ratio; requested height ignored"
        );
    }

    Ok(Layout {
        screen_width,
        screen_height,
        plot,
        scale,
        grid,
        ticks,
        x_min: x_axis.min,
        x_max: x_axis.max,
        y_min: y_axis.min,
        y_max: y_axis.max,
    })
}

/// Cells of `unit` across `units`, checked against the `pixels` they divide
/// when they will be `drawn`. Undrawn counts are clamped to `pixels`.
fn subdivisions(axis: AxisKind, units: f64, unit: f64, pixels: u32, drawn: bool) -> Result<u32, ChartError> {
    let cells = cell_count(units, unit);
    if drawn {
        if cells == 0 {
            return Err(ChartError::DegenerateGrid { axis, unit, units });
        }
        if cells > u64::from(pixels) {
            return Err(ChartError::DenseGrid { axis, cells, pixels });
        }
    }
    // bounded by pixels, so the cast is lossless
    Ok(cells.min(u64::from(pixels)) as u32)
}

fn ensure_finite(field: &str, value: f64) -> Result<(), ChartError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::MalformedConfig(format!("{field} is not a finite number ({value})")))
    }
}

fn ensure_finite_fields(config: &ChartConfig) -> Result<(), ChartError> {
    ensure_finite("x axis min", config.x_axis.min)?;
    ensure_finite("x axis max", config.x_axis.max)?;
    ensure_finite("y axis min", config.y_axis.min)?;
    ensure_finite("y axis max", config.y_axis.max)?;
    ensure_finite("grid unit", config.grid.unit)?;
    ensure_finite("point stroke width", config.theme.point_stroke_width)?;
    for (side, m) in config.margins.stacked() {
        let fields = [
            ("stroke width", m.stroke_width),
            ("tick unit", m.tick_unit),
            ("tick length", m.tick_length),
            ("tick stroke width", m.tick_stroke_width),
            ("tick font size", m.tick_font_size),
            ("tick label offset", m.tick_label_offset),
            ("label font size", m.label_font_size),
        ];
        for (name, value) in fields {
            ensure_finite(&format!("{} margin {name}", side.name()), value)?;
        }
    }
    Ok(())
}
