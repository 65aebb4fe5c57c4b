//! Error types for gridline operations.
//!
//! Rasterizers themselves never fail; these errors come from validating input
//! at the crate boundary and from loading configuration.

use std::io;
use thiserror::Error;

use crate::geometry::{GridBounds, GridPoint};

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Grid size must be at least one cell.
    #[error("Invalid grid size: {0}")]
    InvalidGridSize(u32),

    /// A point lies outside the declared grid bounds.
    #[error("Point {point} is outside bounds {bounds}")]
    OutOfBounds {
        /// Offending point.
        point: GridPoint,
        /// Declared bounds.
        bounds: GridBounds,
    },

    /// Continuous coordinate is NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFinite {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },

    /// Continuous coordinate does not fit in a grid cell address.
    #[error("Coordinate out of range: ({x}, {y})")]
    CoordinateOverflow {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },

    /// Supercover oversampling factor must be at least 1.
    #[error("Invalid oversampling factor: {0}")]
    InvalidOversampling(u32),

    /// Interpolation step override is too large to sample.
    #[error("Invalid step count: {0}")]
    InvalidStepCount(u64),

    /// Unrecognized rasterization algorithm name.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Unrecognized demonstration preset name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Point text could not be parsed as `x,y`.
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}
