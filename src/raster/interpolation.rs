//! Interpolation (lerp-and-round) line rasterizer.
//!
//! Samples the segment at `N + 1` evenly spaced parameters, `N = max(|dx|,
//! |dy|)`, and rounds each sample to the nearest cell. Choosing the diagonal
//! distance for `N` bounds every per-step coordinate change to at most one
//! cell, so the result is 8-connected.
//!
//! # Rounding
//!
//! Samples are rounded half away from zero, computed exactly on the rational
//! value `p0 + d * step / N`. Ties therefore resolve the same way on every
//! platform and for either traversal direction.

use log::{debug, trace};

use crate::geometry::{ContinuousPoint, GridPoint, Segment};
use crate::raster::cells::CellSequence;
use crate::raster::sample::{parameter, Fraction};

/// One sampled step of an interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Parameter in `[0, 1]`.
    pub t: f64,
    /// Exact (unrounded) position on the segment.
    pub continuous: ContinuousPoint,
    /// Cell the position rounds to.
    pub rounded: GridPoint,
}

/// Every sample of an interpolation, duplicates included.
pub type SampleTrace = Vec<Sample>;

/// Rasterized cells together with the sample trace that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedLine {
    /// Distinct cells in first-seen order.
    pub cells: CellSequence,
    /// One entry per sample.
    pub trace: SampleTrace,
}

/// Rasterize `p0 -> p1` with `N = max(|dx|, |dy|)` samples.
///
/// Never fails. The output starts with `p0`, ends with `p1` and is
/// 8-connected; `rasterize(p, p)` is `[p]`.
#[must_use]
pub fn rasterize(p0: GridPoint, p1: GridPoint) -> CellSequence {
    let segment = Segment::new(p0, p1);
    walk(segment, segment.diagonal_distance(), None)
}

/// Like [`rasterize`], also returning the full sample trace.
#[must_use]
pub fn rasterize_traced(p0: GridPoint, p1: GridPoint) -> TracedLine {
    let segment = Segment::new(p0, p1);
    rasterize_steps(p0, p1, segment.diagonal_distance())
}

/// Rasterize with a caller-chosen step count instead of the diagonal distance.
///
/// Produces `steps + 1` samples. Fewer steps than `max(|dx|, |dy|)` leaves
/// gaps between cells; more steps only adds duplicate samples to the trace.
/// With `steps == 0` only `t = 0` is sampled.
#[must_use]
pub fn rasterize_steps(p0: GridPoint, p1: GridPoint, steps: u64) -> TracedLine {
    let mut trace = SampleTrace::with_capacity(capacity_hint(steps));
    let cells = walk(Segment::new(p0, p1), steps, Some(&mut trace));
    TracedLine { cells, trace }
}

fn walk(segment: Segment, steps: u64, mut trace: Option<&mut SampleTrace>) -> CellSequence {
    let (dx, dy) = (segment.dx(), segment.dy());
    let mut cells = CellSequence::with_capacity(capacity_hint(steps));

    for step in 0..=steps {
        let x = Fraction::along(segment.p0.x, dx, step, steps);
        let y = Fraction::along(segment.p0.y, dy, step, steps);
        let rounded = GridPoint::new(x.round(), y.round());
        cells.push(rounded);

        if let Some(trace) = trace.as_deref_mut() {
            let sample = Sample {
                t: parameter(step, steps),
                continuous: ContinuousPoint::new(x.to_f64(), y.to_f64()),
                rounded,
            };
            trace!("sample {step}/{steps}: t={:.3} -> {rounded}", sample.t);
            trace.push(sample);
        }
    }

    debug!(
        "interpolation {} -> {}: {} samples, {} cells",
        segment.p0,
        segment.p1,
        steps + 1,
        cells.len()
    );
    cells
}

fn capacity_hint(steps: u64) -> usize {
    usize::try_from(steps).map_or(usize::MAX, |s| s.saturating_add(1)).min(1 << 16)
}
