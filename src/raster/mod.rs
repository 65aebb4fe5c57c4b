//! Line rasterization algorithms.
//!
//! Every algorithm turns a segment between two integer cells into an ordered,
//! duplicate-free [`CellSequence`].
//!
//! # Algorithms
//!
//! - **Interpolation**: lerp at `max(|dx|, |dy|) + 1` parameters and round;
//!   8-connected
//! - **Supercover**: oversampled floor/ceil neighborhoods; superset of the
//!   interpolation cells
//! - **Orthogonal**: Bresenham-style walk, one axis per step; 4-connected
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod algorithm;
mod cells;
mod interpolation;
mod orthogonal;
mod sample;
mod supercover;

pub use algorithm::{Algorithm, Interpolation, LineRasterizer, Orthogonal};
pub use cells::CellSequence;
pub use interpolation::{rasterize, rasterize_steps, rasterize_traced, Sample, SampleTrace, TracedLine};
pub use orthogonal::rasterize_orthogonal;
pub use supercover::{rasterize_supercover, Supercover, DEFAULT_OVERSAMPLING};
