//! Common rasterizer interface and algorithm selection.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{GridBounds, Segment};
use crate::raster::cells::CellSequence;
use crate::raster::interpolation::{rasterize, rasterize_steps};
use crate::raster::orthogonal::rasterize_orthogonal;
use crate::raster::supercover::Supercover;

/// Trait shared by all line rasterizers.
pub trait LineRasterizer {
    /// Short algorithm name.
    fn name(&self) -> &'static str;

    /// Rasterize a segment. Never fails.
    fn rasterize(&self, segment: Segment) -> CellSequence;

    /// Rasterize after checking both endpoints lie inside `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for an endpoint outside `bounds`.
    fn rasterize_within(&self, segment: Segment, bounds: GridBounds) -> Result<CellSequence> {
        if let Err(e) = segment.validate_within(bounds) {
            debug!("{} rejected segment: {e}", self.name());
            return Err(e);
        }
        Ok(self.rasterize(segment))
    }
}

/// Lerp-and-round rasterizer, optionally with a fixed step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interpolation {
    /// Step count override; `None` uses the diagonal distance.
    pub steps: Option<u64>,
}

impl Interpolation {
    /// Rasterizer using the diagonal distance as step count.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: None }
    }

    /// Rasterizer sampling exactly `steps + 1` points.
    #[must_use]
    pub const fn with_steps(steps: u64) -> Self {
        Self { steps: Some(steps) }
    }
}

impl LineRasterizer for Interpolation {
    fn name(&self) -> &'static str {
        "interpolation"
    }

    fn rasterize(&self, segment: Segment) -> CellSequence {
        match self.steps {
            Some(steps) => rasterize_steps(segment.p0, segment.p1, steps).cells,
            None => rasterize(segment.p0, segment.p1),
        }
    }
}

impl LineRasterizer for Supercover {
    fn name(&self) -> &'static str {
        "supercover"
    }

    fn rasterize(&self, segment: Segment) -> CellSequence {
        self.rasterize_segment(segment)
    }
}

/// 4-connected orthogonal stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orthogonal;

impl LineRasterizer for Orthogonal {
    fn name(&self) -> &'static str {
        "orthogonal"
    }

    fn rasterize(&self, segment: Segment) -> CellSequence {
        rasterize_orthogonal(segment.p0, segment.p1)
    }
}

/// Selectable rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Lerp-and-round, 8-connected.
    #[default]
    Interpolation,
    /// Oversampled floor/ceil neighborhood union.
    Supercover,
    /// Bresenham-derived 4-connected walk.
    Orthogonal,
}

impl Algorithm {
    /// All algorithms in display order.
    pub const ALL: [Self; 3] = [Self::Interpolation, Self::Supercover, Self::Orthogonal];

    /// Name as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interpolation => "interpolation",
            Self::Supercover => "supercover",
            Self::Orthogonal => "orthogonal",
        }
    }

    /// Build a rasterizer for this algorithm.
    ///
    /// `bounds` and `factor` apply to supercover only; `steps` to
    /// interpolation only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOversampling`] for a zero supercover factor.
    pub fn rasterizer(
        self,
        bounds: GridBounds,
        factor: u32,
        steps: Option<u64>,
    ) -> Result<Box<dyn LineRasterizer>> {
        Ok(match self {
            Self::Interpolation => Box::new(Interpolation { steps }),
            Self::Supercover => Box::new(Supercover::with_factor(bounds, factor)?),
            Self::Orthogonal => Box::new(Orthogonal),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interpolation" | "lerp" => Ok(Self::Interpolation),
            "supercover" => Ok(Self::Supercover),
            "orthogonal" | "ortho" => Ok(Self::Orthogonal),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPoint;

    fn grid(size: u32) -> GridBounds {
        GridBounds::square(size).expect("non-zero grid")
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("interpolation".parse::<Algorithm>().unwrap(), Algorithm::Interpolation);
        assert_eq!("Lerp".parse::<Algorithm>().unwrap(), Algorithm::Interpolation);
        assert_eq!(" supercover ".parse::<Algorithm>().unwrap(), Algorithm::Supercover);
        assert_eq!("ortho".parse::<Algorithm>().unwrap(), Algorithm::Orthogonal);
        assert!(matches!("wu".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_display_round_trips_names() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn test_rasterizer_names() {
        for algo in Algorithm::ALL {
            let r = algo.rasterizer(grid(9), 10, None).unwrap();
            assert_eq!(r.name(), algo.name());
        }
    }

    #[test]
    fn test_zero_factor_rejected() {
        assert!(matches!(
            Algorithm::Supercover.rasterizer(grid(9), 0, None),
            Err(Error::InvalidOversampling(0))
        ));
        // Factor is irrelevant for the other algorithms
        assert!(Algorithm::Orthogonal.rasterizer(grid(9), 0, None).is_ok());
    }

    #[test]
    fn test_rasterize_within_rejects_out_of_bounds() {
        let seg = Segment::from_coords(1, 1, 12, 3);
        let err = Orthogonal.rasterize_within(seg, grid(12)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { point, .. } if point == GridPoint::new(12, 3)));
        let ok = Interpolation::new().rasterize_within(Segment::from_coords(1, 1, 11, 3), grid(12));
        assert_eq!(ok.unwrap().last(), Some(GridPoint::new(11, 3)));
    }

    #[test]
    fn test_interpolation_step_override() {
        let seg = Segment::from_coords(1, 1, 8, 6);
        assert_eq!(Interpolation::with_steps(5).rasterize(seg).len(), 6);
        assert_eq!(Interpolation::new().rasterize(seg).len(), 8);
    }

    #[test]
    fn test_serde_names() {
        let algo: Algorithm = serde_yaml_ng::from_str("orthogonal").unwrap();
        assert_eq!(algo, Algorithm::Orthogonal);
    }
}
