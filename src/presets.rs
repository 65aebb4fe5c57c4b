//! Demonstration presets.
//!
//! The fixed grids and endpoints used by the line drawing walkthrough. Select
//! one by name with [`Preset::by_name`] or `"intro".parse::<Preset>()`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{GridBounds, GridPoint, Segment};
use crate::interaction::InteractionState;

/// A named demonstration grid with its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Lookup name.
    pub name: &'static str,
    /// Cells per side.
    pub grid_size: u32,
    /// First endpoint (point `A` in interactive demos).
    pub p0: GridPoint,
    /// Second endpoint (point `B`).
    pub p1: GridPoint,
    /// Interpolation step override, if the demo fixes one.
    pub steps: Option<u64>,
}

/// Opening interactive grid.
///
/// ```text
/// 12x12, A = (2, 2), B = (9, 8)
/// ```
pub const INTRO: Preset = Preset {
    name: "intro",
    grid_size: 12,
    p0: GridPoint::new(2, 2),
    p1: GridPoint::new(9, 8),
    steps: None,
};

/// Full algorithm demo with trace overlay.
///
/// ```text
/// 14x14, A = (2, 11), B = (11, 3)
/// ```
pub const ALGORITHM: Preset = Preset {
    name: "algorithm",
    grid_size: 14,
    p0: GridPoint::new(2, 11),
    p1: GridPoint::new(11, 3),
    steps: None,
};

/// "N steps" sampling demo: five steps over a segment needing seven.
///
/// ```text
/// 10x10, (1, 1) -> (8, 6), N = 5
/// ```
pub const SAMPLING: Preset = Preset {
    name: "sampling",
    grid_size: 10,
    p0: GridPoint::new(1, 1),
    p1: GridPoint::new(8, 6),
    steps: Some(5),
};

/// Side-by-side algorithm comparison.
///
/// ```text
/// 9x9, (1, 1) -> (7, 5)
/// ```
pub const VARIATIONS: Preset = Preset {
    name: "variations",
    grid_size: 9,
    p0: GridPoint::new(1, 1),
    p1: GridPoint::new(7, 5),
    steps: None,
};

impl Preset {
    /// All presets in walkthrough order.
    pub const ALL: [Self; 4] = [INTRO, ALGORITHM, SAMPLING, VARIATIONS];

    /// Look up a preset by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] if no preset has that name.
    pub fn by_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// The preset's grid as bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] for a zero-sized grid.
    pub fn bounds(&self) -> Result<GridBounds> {
        GridBounds::square(self.grid_size)
    }

    /// The preset's segment `p0 -> p1`.
    #[must_use]
    pub const fn segment(&self) -> Segment {
        Segment::new(self.p0, self.p1)
    }

    /// Interaction state seeded with this preset's grid and points.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`InteractionState::new`].
    pub fn interaction_state(&self) -> Result<InteractionState> {
        InteractionState::new(self.grid_size, self.p0, self.p1)
    }
}

impl Default for Preset {
    fn default() -> Self {
        INTRO
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s)
    }
}
