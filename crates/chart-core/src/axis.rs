// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and data-space ranges.

use std::fmt;

/// Which data axis a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("X"),
            AxisKind::Y => f.write_str("Y"),
        }
    }
}

/// One data axis: a label and the unit range it spans.
///
/// `max - min` is the axis extent in data units. The Y extent may be negative
/// to flip the vertical orientation; the X extent may not.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl AxisSpec {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Signed extent in data units.
    #[inline]
    pub fn units(&self) -> f64 {
        self.max - self.min
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1000.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1000.0)
    }
}
