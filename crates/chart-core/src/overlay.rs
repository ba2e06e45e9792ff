// File: crates/chart-core/src/overlay.rs
// Summary: Point overlay; maps data-space points through the layout into screen circles.
// Notes:
// - Points are NOT clipped. A point outside the axis ranges is still emitted
//   and may land outside the plot area; filtering is the caller's job.
// - Points must be finite with a non-negative radius; `check_points` rejects
//   the rest before anything is drawn.

use serde::Deserialize;

use crate::backend::Circle;
use crate::error::ChartError;
use crate::scale::Layout;
use crate::theme::Theme;

/// A point in data space with a marker radius in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "r", alias = "radius")]
    pub radius: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }
}

/// Screen circle for one point, styled by the theme.
pub fn point_circle(layout: &Layout, theme: &Theme, point: &DataPoint) -> Circle {
    let (cx, cy) = layout.to_screen(point.x, point.y);
    Circle {
        fill: theme.point_fill.clone(),
        stroke: theme.point_stroke.clone(),
        stroke_width: theme.point_stroke_width,
        cx,
        cy,
        r: point.radius,
    }
}

/// Reject points that would map to non-finite screen geometry or carry a
/// negative radius. Reports the first offending point by index.
pub fn check_points(layout: &Layout, points: &[DataPoint]) -> Result<(), ChartError> {
    for (i, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(ChartError::MalformedConfig(format!(
                "point {i} has a non-finite coordinate ({}, {})",
                p.x, p.y
            )));
        }
        if !p.radius.is_finite() || p.radius < 0.0 {
            return Err(ChartError::MalformedConfig(format!("point {i} has an unusable radius ({})", p.radius)));
        }
        let (cx, cy) = layout.to_screen(p.x, p.y);
        if !(cx.is_finite() && cy.is_finite()) {
            return Err(ChartError::MalformedConfig(format!("point {i} maps outside the representable range")));
        }
    }
    Ok(())
}

/// Screen circles for `points`, in input order.
pub fn point_circles(layout: &Layout, theme: &Theme, points: &[DataPoint]) -> Vec<Circle> {
    points.iter().map(|p| point_circle(layout, theme, p)).collect()
}
