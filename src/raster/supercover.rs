//! Supercover line rasterizer (oversampled approximation).
//!
//! The segment is sampled `max(|dx|, |dy|) * k` times and every cell of the
//! 2x2 floor/ceil neighborhood around each sample is collected, clipped to a
//! bounding rectangle. The result contains the interpolation rasterizer's
//! cells plus the neighbors the true line passes near.
//!
//! This is a heuristic: how close it gets to the geometric supercover depends
//! on the oversampling factor `k` (default [`DEFAULT_OVERSAMPLING`]). No
//! exactness guarantee is made beyond the superset property.

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{GridBounds, GridPoint, Segment};
use crate::raster::cells::CellSequence;
use crate::raster::sample::Fraction;

/// Default oversampling factor `k`.
pub const DEFAULT_OVERSAMPLING: u32 = 10;

/// Rasterize `p0 -> p1` with the default factor, keeping cells inside
/// `bounds`.
///
/// Cells outside `bounds` are dropped, not clamped. A degenerate segment
/// yields its single cell, or nothing if that cell is out of bounds.
#[must_use]
pub fn rasterize_supercover(p0: GridPoint, p1: GridPoint, bounds: GridBounds) -> CellSequence {
    Supercover::new(bounds).rasterize_segment(Segment::new(p0, p1))
}

/// Supercover rasterizer with a fixed clip rectangle and oversampling factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supercover {
    bounds: GridBounds,
    factor: u32,
}

impl Supercover {
    /// Create a rasterizer clipping to `bounds` with the default factor.
    #[must_use]
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            factor: DEFAULT_OVERSAMPLING,
        }
    }

    /// Create a rasterizer with an explicit oversampling factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOversampling`] if `factor` is zero.
    pub fn with_factor(bounds: GridBounds, factor: u32) -> Result<Self> {
        if factor == 0 {
            return Err(Error::InvalidOversampling(factor));
        }
        Ok(Self { bounds, factor })
    }

    /// Clip rectangle.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Oversampling factor.
    #[must_use]
    pub const fn factor(&self) -> u32 {
        self.factor
    }

    /// Rasterize a segment.
    ///
    /// Within one sample the neighborhood is visited from the side trailing
    /// the direction of travel to the leading side, so when `p1` is inside
    /// the bounds it is the last cell of the sequence.
    #[must_use]
    pub fn rasterize_segment(&self, segment: Segment) -> CellSequence {
        let (dx, dy) = (segment.dx(), segment.dy());
        let steps = segment.diagonal_distance().saturating_mul(u64::from(self.factor));
        let mut cells = CellSequence::new();

        for step in 0..=steps {
            let x = Fraction::along(segment.p0.x, dx, step, steps);
            let y = Fraction::along(segment.p0.y, dy, step, steps);
            for px in ordered(x.floor(), x.ceil(), dx) {
                for py in ordered(y.floor(), y.ceil(), dy) {
                    let cell = GridPoint::new(px, py);
                    if self.bounds.contains(cell) {
                        cells.push(cell);
                    }
                }
            }
        }

        debug!(
            "supercover {} -> {} (k={}): {} samples, {} cells",
            segment.p0,
            segment.p1,
            self.factor,
            steps + 1,
            cells.len()
        );
        cells
    }
}

fn ordered(floor: i32, ceil: i32, delta: i64) -> [i32; 2] {
    if delta < 0 {
        [ceil, floor]
    } else {
        [floor, ceil]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::interpolation::rasterize;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn grid(size: u32) -> GridBounds {
        GridBounds::square(size).expect("non-zero grid")
    }

    #[test]
    fn test_axis_aligned_matches_interpolation() {
        let cells = rasterize_supercover(p(1, 3), p(6, 3), grid(9));
        assert_eq!(cells, rasterize(p(1, 3), p(6, 3)));
    }

    #[test]
    fn test_exact_diagonal_adds_corner_neighbors() {
        let cells = rasterize_supercover(p(0, 0), p(2, 2), grid(9));
        assert_eq!(
            cells.as_slice(),
            &[p(0, 0), p(0, 1), p(1, 0), p(1, 1), p(1, 2), p(2, 1), p(2, 2)]
        );
    }

    #[test]
    fn test_superset_of_interpolation() {
        let bounds = grid(9);
        let cover = rasterize_supercover(p(1, 1), p(7, 5), bounds);
        let line = rasterize(p(1, 1), p(7, 5));
        assert!(line.is_subset_of(&cover));
        assert!(cover.len() > line.len());
        assert_eq!(cover.first(), Some(p(1, 1)));
        assert_eq!(cover.last(), Some(p(7, 5)));
    }

    #[test]
    fn test_ends_with_p1_for_negative_direction() {
        let cover = rasterize_supercover(p(7, 5), p(1, 1), grid(9));
        assert_eq!(cover.first(), Some(p(7, 5)));
        assert_eq!(cover.last(), Some(p(1, 1)));
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(rasterize_supercover(p(3, 3), p(3, 3), grid(9)).as_slice(), &[p(3, 3)]);
        assert!(rasterize_supercover(p(9, 3), p(9, 3), grid(9)).is_empty());
    }

    #[test]
    fn test_out_of_bounds_cells_are_dropped() {
        let cells = rasterize_supercover(p(-2, 0), p(3, 1), grid(4));
        assert!(cells.iter().all(|c| c.x >= 0 && c.x <= 3 && c.y >= 0 && c.y <= 3));
        assert!(!cells.contains(p(-2, 0)));
        assert!(cells.contains(p(0, 0)));
        assert_eq!(cells.last(), Some(p(3, 1)));
    }

    #[test]
    fn test_factor_validation() {
        assert!(matches!(
            Supercover::with_factor(grid(9), 0),
            Err(Error::InvalidOversampling(0))
        ));
        let sc = Supercover::with_factor(grid(9), 1).unwrap();
        assert_eq!(sc.factor(), 1);
        assert_eq!(Supercover::new(grid(9)).factor(), DEFAULT_OVERSAMPLING);
    }

    #[test]
    fn test_factor_one_still_contains_interpolation() {
        let sc = Supercover::with_factor(grid(14), 1).unwrap();
        let seg = Segment::from_coords(2, 11, 11, 3);
        assert!(rasterize(seg.p0, seg.p1).is_subset_of(&sc.rasterize_segment(seg)));
    }
}
