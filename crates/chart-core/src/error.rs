// File: crates/chart-core/src/error.rs
// Summary: Validation errors raised by the scale calculator before any drawing happens.

use thiserror::Error;

use crate::axis::AxisKind;

/// Why a `ChartConfig` cannot be laid out.
///
/// Every variant is detected eagerly by [`crate::compute_layout`]; the frame
/// renderer only runs on a validated layout, so a render either yields a
/// complete command list or one of these errors, never partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The axis spans zero units, or the X axis runs backwards.
    #[error("invalid {axis} axis range: min {min} / max {max}")]
    InvalidRange { axis: AxisKind, min: f64, max: f64 },

    /// Left and right margins leave no horizontal room for the plot.
    #[error("margins of {margins}px consume the whole {screen_width}px screen width")]
    LayoutOverflow { screen_width: u32, margins: u64 },

    /// The aspect ratio squeezes the plot to a zero pixel height.
    #[error("plot height rounds to zero for a {width}px wide plot")]
    CollapsedPlot { width: u32 },

    /// A grid or tick unit yields zero cells along an axis that needs them.
    #[error("{axis} axis spacing of {unit} yields no cells across {units} units")]
    DegenerateGrid { axis: AxisKind, unit: f64, units: f64 },

    /// A grid or tick unit yields more cells than the pixels it divides.
    #[error("{axis} axis spacing yields {cells} cells across only {pixels}px")]
    DenseGrid { axis: AxisKind, cells: u64, pixels: u32 },

    /// A numeric field is not usable (NaN, infinite, or out of pixel range).
    #[error("malformed configuration: {0}")]
    MalformedConfig(String),
}
