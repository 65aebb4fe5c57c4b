//! Configuration for demos and the command line driver.
//!
//! YAML file with per-field defaults. A `preset` entry seeds the grid,
//! points and step override; explicit `grid_size`, `point_a`, `point_b` and
//! `steps` entries override it. [`ConfigOverrides`] sits on top of the file:
//! choosing a preset there discards everything the file said about the
//! segment.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{GridBounds, GridPoint, Segment};
use crate::interaction::{InteractionState, DEFAULT_HIT_RADIUS};
use crate::presets::Preset;
use crate::raster::{Algorithm, LineRasterizer, DEFAULT_OVERSAMPLING};

/// Largest accepted interpolation step override.
pub const MAX_STEPS: u64 = 1 << 20;

/// Largest accepted supercover oversampling factor.
pub const MAX_SUPERCOVER_FACTOR: u32 = 1_000;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridlineConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Preset supplying grid size and points not given explicitly.
    #[serde(default)]
    pub preset: Option<String>,

    /// Cells per side.
    #[serde(default)]
    pub grid_size: Option<u32>,

    /// First endpoint.
    #[serde(default)]
    pub point_a: Option<GridPoint>,

    /// Second endpoint.
    #[serde(default)]
    pub point_b: Option<GridPoint>,

    /// Pointer-down grab radius in Manhattan cells.
    #[serde(default = "default_hit_radius")]
    pub hit_radius: u32,

    /// Rasterization algorithm.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Supercover oversampling factor.
    #[serde(default = "default_supercover_factor")]
    pub supercover_factor: u32,

    /// Interpolation step override.
    #[serde(default)]
    pub steps: Option<u64>,
}

/// Values layered over a loaded configuration, typically command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces the file's preset and clears its grid size, points and steps.
    pub preset: Option<Preset>,
    /// Cells per side.
    pub grid_size: Option<u32>,
    /// First endpoint.
    pub point_a: Option<GridPoint>,
    /// Second endpoint.
    pub point_b: Option<GridPoint>,
    /// Rasterization algorithm.
    pub algorithm: Option<Algorithm>,
    /// Supercover oversampling factor.
    pub supercover_factor: Option<u32>,
    /// Interpolation step override.
    pub steps: Option<u64>,
}

fn default_version() -> u32 {
    1
}
fn default_hit_radius() -> u32 {
    DEFAULT_HIT_RADIUS
}
fn default_supercover_factor() -> u32 {
    DEFAULT_OVERSAMPLING
}

impl Default for GridlineConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            preset: None,
            grid_size: None,
            point_a: None,
            point_b: None,
            hit_radius: default_hit_radius(),
            algorithm: Algorithm::default(),
            supercover_factor: default_supercover_factor(),
            steps: None,
        }
    }
}

impl GridlineConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/gridline/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gridline").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        debug!("loading configuration from {}", path.display());
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing or validation fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            debug!("using default configuration: {e}");
            Self::default()
        })
    }

    /// Apply `overrides` on top of this configuration and validate the result.
    ///
    /// # Errors
    ///
    /// Returns the first validation error of the layered configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(preset) = overrides.preset {
            debug!("preset {} replaces configured segment", preset.name);
            self.preset = Some(preset.name.to_string());
            self.grid_size = None;
            self.point_a = None;
            self.point_b = None;
            self.steps = None;
        }
        self.grid_size = overrides.grid_size.or(self.grid_size);
        self.point_a = overrides.point_a.or(self.point_a);
        self.point_b = overrides.point_b.or(self.point_b);
        self.algorithm = overrides.algorithm.unwrap_or(self.algorithm);
        self.supercover_factor = overrides.supercover_factor.unwrap_or(self.supercover_factor);
        self.steps = overrides.steps.or(self.steps);
        self.validate()?;
        Ok(self)
    }

    /// Check that the configuration describes a usable grid.
    ///
    /// # Errors
    ///
    /// Returns the first validation error: unknown preset, bad grid size,
    /// endpoint outside the grid, supercover factor outside
    /// `1..=MAX_SUPERCOVER_FACTOR` or step override above [`MAX_STEPS`].
    pub fn validate(&self) -> Result<()> {
        self.interaction_state()?;
        if !(1..=MAX_SUPERCOVER_FACTOR).contains(&self.supercover_factor) {
            return Err(Error::InvalidOversampling(self.supercover_factor));
        }
        match self.steps {
            Some(steps) if steps > MAX_STEPS => Err(Error::InvalidStepCount(steps)),
            _ => Ok(()),
        }
    }

    /// Preset named by the config, or the default preset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] for an unrecognized name.
    pub fn base_preset(&self) -> Result<Preset> {
        self.preset
            .as_deref()
            .map_or_else(|| Ok(Preset::default()), Preset::by_name)
    }

    /// Effective grid size.
    pub fn effective_grid_size(&self) -> Result<u32> {
        Ok(self.grid_size.unwrap_or(self.base_preset()?.grid_size))
    }

    /// Effective grid bounds.
    pub fn bounds(&self) -> Result<GridBounds> {
        GridBounds::square(self.effective_grid_size()?)
    }

    /// Effective segment `A -> B`.
    pub fn segment(&self) -> Result<Segment> {
        let preset = self.base_preset()?;
        Ok(Segment::new(
            self.point_a.unwrap_or(preset.p0),
            self.point_b.unwrap_or(preset.p1),
        ))
    }

    /// Effective interpolation step override.
    pub fn effective_steps(&self) -> Result<Option<u64>> {
        Ok(self.steps.or(self.base_preset()?.steps))
    }

    /// Interaction state for the configured grid and points.
    pub fn interaction_state(&self) -> Result<InteractionState> {
        let segment = self.segment()?;
        Ok(InteractionState::new(self.effective_grid_size()?, segment.p0, segment.p1)?
            .with_hit_radius(self.hit_radius))
    }

    /// Rasterizer for the configured algorithm.
    pub fn rasterizer(&self) -> Result<Box<dyn LineRasterizer>> {
        self.algorithm
            .rasterizer(self.bounds()?, self.supercover_factor, self.effective_steps()?)
    }
}
