//! # Gridline
//!
//! Grid line rasterization: turning the segment between two integer cells
//! into a discrete, gap-free sequence of cells.
//!
//! Three algorithms share one contract (two [`GridPoint`]s in, an ordered,
//! duplicate-free [`CellSequence`] out), and an interaction controller owns
//! the two draggable endpoints that feed them in interactive demos.
//!
//! ## Features
//!
//! - **Interpolation**: lerp at `max(|dx|, |dy|) + 1` parameters and round,
//!   with an optional per-sample trace
//! - **Supercover**: oversampled floor/ceil neighborhoods, clipped to a grid
//! - **Orthogonal**: 4-connected Bresenham-style walk
//! - **Interaction**: pointer-driven drag state machine with clamping
//!
//! ## Quick Start
//!
//! ```rust
//! use gridline::prelude::*;
//!
//! let cells = rasterize(GridPoint::new(1, 1), GridPoint::new(8, 6));
//! assert_eq!(cells.first(), Some(GridPoint::new(1, 1)));
//! assert_eq!(cells.last(), Some(GridPoint::new(8, 6)));
//! assert!(cells.is_8_connected());
//!
//! let mut state = InteractionState::default();
//! state.apply(PointerEvent::Down(GridPoint::new(9, 8)));
//! state.apply(PointerEvent::Move(GridPoint::new(-5, 20)));
//! assert_eq!(state.b(), GridPoint::new(0, 11));
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `gridline` command line driver
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in grid/geometry code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Grid points, segments and bounds.
pub mod geometry;

/// Line rasterization algorithms.
pub mod raster;

// ============================================================================
// Interaction & Configuration
// ============================================================================

/// Endpoint drag controller.
pub mod interaction;

/// Demonstration presets.
pub mod presets;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for gridline operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use gridline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigOverrides, GridlineConfig};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{lerp, ContinuousPoint, GridBounds, GridPoint, Segment};
    pub use crate::interaction::{DragState, InteractionState, PointLabel, PointerEvent};
    pub use crate::presets::Preset;
    pub use crate::raster::{
        rasterize, rasterize_orthogonal, rasterize_steps, rasterize_supercover, rasterize_traced,
        Algorithm, CellSequence, Interpolation, LineRasterizer, Orthogonal, Sample, SampleTrace,
        Supercover, TracedLine,
    };
}

pub use geometry::GridPoint;
pub use raster::CellSequence;
