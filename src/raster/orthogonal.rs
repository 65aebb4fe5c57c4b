//! Orthogonal-stepper line rasterizer.
//!
//! A Bresenham-derived integer walk that moves one axis per appended cell, so
//! consecutive cells always share an edge (4-connected, no diagonal steps).
//! Both axis tests may fire in one iteration, appending two cells; the path
//! has exactly `|dx| + |dy| + 1` cells.

use log::debug;

use crate::geometry::{GridPoint, Segment};
use crate::raster::cells::CellSequence;

/// Rasterize `p0 -> p1` as a 4-connected path.
///
/// The walk runs from the lexicographically smaller endpoint and is reversed
/// when `p0` is the larger one, so swapping the endpoints yields the exact
/// reverse sequence.
#[must_use]
pub fn rasterize_orthogonal(p0: GridPoint, p1: GridPoint) -> CellSequence {
    let cells = if p1 < p0 {
        walk(p1, p0).reversed()
    } else {
        walk(p0, p1)
    };
    debug!("orthogonal {p0} -> {p1}: {} cells", cells.len());
    cells
}

fn walk(from: GridPoint, to: GridPoint) -> CellSequence {
    let segment = Segment::new(from, to);
    let (dx, dy) = (segment.dx(), segment.dy());
    let sx: i32 = if dx > 0 { 1 } else { -1 };
    let sy: i32 = if dy > 0 { 1 } else { -1 };
    let (adx, ady) = (dx.abs(), dy.abs());
    let mut err = adx - ady;

    let mut cells = CellSequence::with_capacity((adx + ady + 1).min(1 << 16) as usize);
    let (mut x, mut y) = (from.x, from.y);
    cells.push(from);

    while x != to.x || y != to.y {
        let e2 = 2 * err;
        if e2 > -ady && x != to.x {
            err -= ady;
            x += sx;
            cells.push(GridPoint::new(x, y));
        }
        if e2 < adx && y != to.y {
            err += adx;
            y += sy;
            cells.push(GridPoint::new(x, y));
        }
    }
    cells
}
