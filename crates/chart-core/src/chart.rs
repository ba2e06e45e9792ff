// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the frame renderer producing an ordered drawing command stream.

use crate::backend::{replay, Baseline, DrawCmd, DrawingBackend, Line, Rect, Text, TextAnchor};
use crate::error::ChartError;
use crate::grid::boundaries;
use crate::log::debug;
use crate::overlay::{check_points, point_circles, DataPoint};
use crate::scale::{compute_layout, Layout};
use crate::svg::SvgBackend;
use crate::types::{ChartConfig, MarginSpec, Side};

/// A frame configuration plus the points to overlay on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    pub config: ChartConfig,
    pub points: Vec<DataPoint>,
}

/// The rendered command stream together with the layout it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub layout: Layout,
    pub commands: Vec<DrawCmd>,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, points: Vec::new() }
    }

    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn add_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    /// Build the complete, ordered command stream for this chart.
    ///
    /// Order: document open, background, grid, margins (top, bottom, left,
    /// right), points, document close. Nothing is emitted for an invalid
    /// config or point.
    pub fn frame(&self) -> Result<Frame, ChartError> {
        let layout = compute_layout(&self.config)?;
        check_points(&layout, &self.points)?;
        let config = &self.config;
        let mut out = Vec::new();

        out.push(DrawCmd::BeginDocument { width: layout.screen_width, height: layout.screen_height });
        if config.theme.has_background() {
            out.push(DrawCmd::Rect(Rect {
                fill: config.theme.background.clone(),
                stroke: "none".to_string(),
                x: 0.0,
                y: 0.0,
                width: f64::from(layout.screen_width),
                height: f64::from(layout.screen_height),
            }));
        }
        if config.grid.enabled {
            draw_grid(&mut out, config, &layout);
        }
        for side in Side::STACKING {
            draw_margin(&mut out, config, &layout, side);
        }
        out.extend(point_circles(&layout, &config.theme, &self.points).into_iter().map(DrawCmd::Circle));
        out.push(DrawCmd::EndDocument);

        debug!(commands = out.len(), points = self.points.len(), "built frame");
        Ok(Frame { layout, commands: out })
    }

    /// Render into `backend`, returning the layout used.
    pub fn render(&self, backend: &mut dyn DrawingBackend) -> Result<Layout, ChartError> {
        let frame = self.frame()?;
        replay(&frame.commands, backend);
        Ok(frame.layout)
    }

    /// Render to an SVG document string.
    pub fn render_svg(&self) -> Result<String, ChartError> {
        let mut svg = SvgBackend::new();
        self.render(&mut svg)?;
        Ok(svg.into_string())
    }
}

/// Tick label text for a data value: integers bare, fractions to 6 places.
pub fn format_tick(value: f64) -> String {
    let rounded = if value.abs() < 1e9 { (value * 1e6).round() / 1e6 } else { value.round() };
    if rounded == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    rounded.to_string()
}

// ---- helpers ----------------------------------------------------------------

fn line(stroke: &str, stroke_width: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> DrawCmd {
    DrawCmd::Line(Line { stroke: stroke.to_string(), stroke_width, x1, y1, x2, y2 })
}

#[allow(clippy::too_many_arguments)]
fn text(
    config: &ChartConfig,
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: Baseline,
    rotation: f64,
    content: String,
) -> DrawCmd {
    DrawCmd::Text(Text {
        x,
        y,
        fill: config.theme.text.clone(),
        font_family: config.theme.font_family.clone(),
        font_size,
        anchor,
        baseline,
        rotation,
        content,
    })
}

fn draw_grid(out: &mut Vec<DrawCmd>, config: &ChartConfig, layout: &Layout) {
    let plot = layout.plot;
    let w = f64::from(plot.width);
    let h = f64::from(plot.height);
    let color = &config.grid.color;

    out.push(DrawCmd::BeginGroup { dx: plot.left(), dy: plot.top() });
    // verticals
    for x in boundaries(w, layout.grid.x_cells) {
        out.push(line(color, 1.0, x, 0.0, x, h));
    }
    // horizontals
    for y in boundaries(h, layout.grid.y_cells) {
        out.push(line(color, 1.0, 0.0, y, w, y));
    }
    out.push(DrawCmd::EndGroup);
}

fn draw_margin(out: &mut Vec<DrawCmd>, config: &ChartConfig, layout: &Layout, side: Side) {
    let margin = config.margins.get(side);
    let plot = layout.plot;
    let size = f64::from(margin.size);
    let extent = layout.extent(side);

    // Group origin and the band footprint in group coordinates.
    let (dx, dy, box_w, box_h) = match side {
        Side::Top => (plot.left(), 0.0, extent, size),
        Side::Bottom => (plot.left(), plot.bottom(), extent, size),
        Side::Left => (0.0, plot.top(), size, extent),
        Side::Right => (plot.right(), plot.top(), size, extent),
    };

    out.push(DrawCmd::BeginGroup { dx, dy });
    if config.debug_outline {
        out.push(DrawCmd::Rect(Rect {
            fill: config.theme.debug_fill.clone(),
            stroke: config.theme.debug_stroke.clone(),
            x: 0.0,
            y: 0.0,
            width: box_w,
            height: box_h,
        }));
    }
    if margin.axis_line {
        draw_axis(out, config, layout, side, margin);
    }

    let label = config.label_for(side);
    if !label.is_empty() {
        let (x, y, rotation) = match side {
            Side::Top | Side::Bottom => (extent / 2.0, size / 2.0, 0.0),
            Side::Left => (size / 2.0, extent / 2.0, -90.0),
            Side::Right => (size / 2.0, extent / 2.0, 90.0),
        };
        out.push(text(
            config,
            x,
            y,
            margin.label_font_size,
            TextAnchor::Middle,
            Baseline::Middle,
            rotation,
            label.to_string(),
        ));
    }
    out.push(DrawCmd::EndGroup);
}

/// Axis line along the plot edge, then one tick mark and label per boundary.
fn draw_axis(out: &mut Vec<DrawCmd>, config: &ChartConfig, layout: &Layout, side: Side, margin: &MarginSpec) {
    let size = f64::from(margin.size);
    let extent = layout.extent(side);
    let stroke = &margin.stroke;

    let (x1, y1, x2, y2) = match side {
        Side::Top => (0.0, size, extent, size),
        Side::Bottom => (0.0, 0.0, extent, 0.0),
        Side::Left => (size, 0.0, size, extent),
        Side::Right => (0.0, 0.0, 0.0, extent),
    };
    out.push(line(stroke, margin.stroke_width, x1, y1, x2, y2));

    let len = margin.tick_length;
    let gap = len + margin.tick_label_offset;
    for offset in boundaries(extent, *layout.ticks.get(side)) {
        let value = layout.value_at(side, offset);
        let (tick, (lx, ly), anchor, baseline) = match side {
            Side::Top => ((offset, size - len, offset, size), (offset, size - gap), TextAnchor::Middle, Baseline::Alphabetic),
            Side::Bottom => ((offset, 0.0, offset, len), (offset, gap), TextAnchor::Middle, Baseline::Hanging),
            Side::Left => ((size, offset, size - len, offset), (size - gap, offset), TextAnchor::End, Baseline::Middle),
            Side::Right => ((0.0, offset, len, offset), (gap, offset), TextAnchor::Start, Baseline::Middle),
        };
        out.push(line(stroke, margin.tick_stroke_width, tick.0, tick.1, tick.2, tick.3));
        out.push(text(config, lx, ly, margin.tick_font_size, anchor, baseline, 0.0, format_tick(value)));
    }
}
