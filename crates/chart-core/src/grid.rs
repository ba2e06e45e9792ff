// File: crates/chart-core/src/grid.rs
// Summary: Grid settings, cell counting and tick/grid spacing helpers.

/// Relative distance within which a quotient snaps to the nearest whole count,
/// so that ranges a unit divides "almost" evenly in binary floating point
/// (0.3 / 0.1) count fully.
const CELL_EPSILON: f64 = 1e-9;

/// Background grid settings.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub enabled: bool,
    /// Data units per grid cell, shared by both axes.
    pub unit: f64,
    pub color: String,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { enabled: true, unit: 100.0, color: "#dddddd".to_string() }
    }
}

/// Number of grid subdivisions along each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCounts {
    pub x_cells: u32,
    pub y_cells: u32,
}

/// Whole cells of `unit` that fit in `units` (sign of `units` ignored).
///
/// Returns 0 for a non-positive or non-finite unit. Counts beyond `u64::MAX`
/// saturate; callers bound the result by a pixel extent long before that.
pub fn cell_count(units: f64, unit: f64) -> u64 {
    if !(unit > 0.0) || !unit.is_finite() {
        return 0;
    }
    let q = units.abs() / unit;
    let nearest = q.round();
    let cells = if (q - nearest).abs() <= nearest * CELL_EPSILON { nearest } else { q.floor() };
    cells as u64
}

/// Pixel offsets of the `cells + 1` boundaries splitting `extent` into `cells` parts.
///
/// Each offset is `extent * i / cells`, so whole-pixel boundaries come out exact.
pub fn boundaries(extent: f64, cells: u32) -> Vec<f64> {
    if cells == 0 { return Vec::new(); }
    let n = f64::from(cells);
    (0..=cells).map(|i| extent * f64::from(i) / n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_partial_cells() {
        assert_eq!(cell_count(1000.0, 100.0), 10);
        assert_eq!(cell_count(1000.0, 300.0), 3);
        assert_eq!(cell_count(-1000.0, 100.0), 10);
    }

    #[test]
    fn near_even_division_counts_fully() {
        assert_eq!(cell_count(0.3, 0.1), 3);
    }

    #[test]
    fn unusable_unit_has_no_cells() {
        assert_eq!(cell_count(1000.0, 0.0), 0);
        assert_eq!(cell_count(1000.0, -5.0), 0);
        assert_eq!(cell_count(1000.0, f64::NAN), 0);
    }

    #[test]
    fn tiny_unit_counts_exactly() {
        assert_eq!(cell_count(1000.0, 1e-7), 10_000_000_000);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let b = boundaries(600.0, 10);
        assert_eq!(b.len(), 11);
        assert_eq!(b[0], 0.0);
        assert_eq!(b[5], 300.0);
        assert_eq!(b[10], 600.0);
        assert!(boundaries(600.0, 0).is_empty());
    }
}
