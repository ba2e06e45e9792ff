// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// The screen rectangle inside all four margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlotArea {
    pub const fn from_ltwh(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
    pub fn left(&self) -> f64 { f64::from(self.x) }
    pub fn top(&self) -> f64 { f64::from(self.y) }
    pub fn right(&self) -> f64 { f64::from(self.x + self.width) }
    pub fn bottom(&self) -> f64 { f64::from(self.y + self.height) }
}
