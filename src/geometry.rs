//! Geometric primitives for grid rasterization.
//!
//! Provides integer cell addresses, real-valued intermediate points, segments
//! and inclusive grid bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Linear interpolation between two scalars: `a + (b - a) * t`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// An integer grid cell address `(x, y)`.
///
/// Ordering is lexicographic on `x`, then `y`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPoint {
    /// Origin cell (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance to another cell.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).unsigned_abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).unsigned_abs();
        dx + dy
    }

    /// Diagonal (Chebyshev) distance to another cell: `max(|dx|, |dy|)`.
    #[must_use]
    pub fn diagonal_distance(self, other: Self) -> u64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).unsigned_abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).unsigned_abs();
        dx.max(dy)
    }

    /// Whether `other` is one of the 8 neighbors of this cell.
    #[must_use]
    pub fn is_8_adjacent(self, other: Self) -> bool {
        self.diagonal_distance(other) == 1
    }

    /// Whether `other` is one of the 4 edge neighbors of this cell.
    #[must_use]
    pub fn is_4_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y`, with optional surrounding parentheses and whitespace.
impl FromStr for GridPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| Error::InvalidPoint(s.to_string()))?;
        let x = x.trim().parse().map_err(|_| Error::InvalidPoint(s.to_string()))?;
        let y = y.trim().parse().map_err(|_| Error::InvalidPoint(s.to_string()))?;
        Ok(Self::new(x, y))
    }
}

/// A real-valued point, produced as an intermediate of interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContinuousPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl ContinuousPoint {
    /// Create a new continuous point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points, each axis independently.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Round to the nearest cell (half away from zero).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] for NaN or infinite coordinates and
    /// [`Error::CoordinateOverflow`] when the rounded value does not fit in
    /// an `i32`.
    pub fn to_grid(self) -> Result<GridPoint> {
        if !self.is_finite() {
            return Err(Error::NonFinite { x: self.x, y: self.y });
        }
        let (rx, ry) = (self.x.round(), self.y.round());
        let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
        if !range.contains(&rx) || !range.contains(&ry) {
            return Err(Error::CoordinateOverflow { x: self.x, y: self.y });
        }
        Ok(GridPoint::new(rx as i32, ry as i32))
    }
}

impl From<GridPoint> for ContinuousPoint {
    fn from(p: GridPoint) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// An ordered pair of endpoints to rasterize. `p0 == p1` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Start point.
    pub p0: GridPoint,
    /// End point.
    pub p1: GridPoint,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(p0: GridPoint, p1: GridPoint) -> Self {
        Self { p0, p1 }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(GridPoint::new(x0, y0), GridPoint::new(x1, y1))
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.p1, self.p0)
    }

    /// Signed x delta, widened so extreme inputs cannot overflow.
    #[must_use]
    pub fn dx(&self) -> i64 {
        i64::from(self.p1.x) - i64::from(self.p0.x)
    }

    /// Signed y delta.
    #[must_use]
    pub fn dy(&self) -> i64 {
        i64::from(self.p1.y) - i64::from(self.p0.y)
    }

    /// `max(|dx|, |dy|)`: the sample count that guarantees no skipped cell.
    #[must_use]
    pub fn diagonal_distance(&self) -> u64 {
        self.p0.diagonal_distance(self.p1)
    }

    /// Check both endpoints against `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] naming the first endpoint outside.
    pub fn validate_within(&self, bounds: GridBounds) -> Result<()> {
        for point in [self.p0, self.p1] {
            if !bounds.contains(point) {
                return Err(Error::OutOfBounds { point, bounds });
            }
        }
        Ok(())
    }
}

impl From<(GridPoint, GridPoint)> for Segment {
    fn from((p0, p1): (GridPoint, GridPoint)) -> Self {
        Self::new(p0, p1)
    }
}

/// An inclusive integer rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    min: GridPoint,
    max: GridPoint,
}

impl GridBounds {
    /// Create bounds spanning two corner cells (in any order).
    #[must_use]
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        Self {
            min: GridPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: GridPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square grid `[0, grid_size - 1]²`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] if `grid_size` is zero or too large
    /// to address with `i32`.
    pub fn square(grid_size: u32) -> Result<Self> {
        let last = grid_size
            .checked_sub(1)
            .and_then(|last| i32::try_from(last).ok())
            .ok_or(Error::InvalidGridSize(grid_size))?;
        Ok(Self::new(GridPoint::ORIGIN, GridPoint::new(last, last)))
    }

    /// Lowest corner.
    #[must_use]
    pub const fn min(&self) -> GridPoint {
        self.min
    }

    /// Highest corner.
    #[must_use]
    pub const fn max(&self) -> GridPoint {
        self.max
    }

    /// Check if a cell lies inside the bounds.
    #[must_use]
    pub fn contains(&self, p: GridPoint) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Clamp a cell componentwise into the bounds.
    #[must_use]
    pub fn clamp(&self, p: GridPoint) -> GridPoint {
        GridPoint::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}
