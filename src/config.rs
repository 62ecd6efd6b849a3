//! YAML configuration for the visualizer host.
//!
//! Precedence: CLI > file > defaults. Every field is optional; a missing
//! field takes the default scene's value, an explicit `null` point leaves
//! that geometry unplaced.

use crate::error::{Error, Result};
use crate::geometry::{
    Circle, GridConfig, GridPoint, DEFAULT_CELL_SIZE_PX, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE,
};
use crate::raster::AlgorithmId;
use crate::scene::Scene;
use crate::surface::DEFAULT_CANVAS_PX;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid and canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Side of one cell in logical pixels.
    #[serde(default = "default_cell_size_px")]
    pub cell_size_px: f64,

    /// Display scale, within `[0.5, 2.0]`.
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Canvas width in logical pixels.
    #[serde(default = "default_canvas_px")]
    pub width_px: u32,

    /// Canvas height in logical pixels.
    #[serde(default = "default_canvas_px")]
    pub height_px: u32,
}

fn default_cell_size_px() -> f64 {
    DEFAULT_CELL_SIZE_PX
}
fn default_scale() -> f64 {
    DEFAULT_SCALE
}
fn default_canvas_px() -> u32 {
    DEFAULT_CANVAS_PX
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            cell_size_px: default_cell_size_px(),
            scale: default_scale(),
            width_px: default_canvas_px(),
            height_px: default_canvas_px(),
        }
    }
}

impl GridSection {
    /// The cell mapping part of this section.
    #[must_use]
    pub const fn grid_config(&self) -> GridConfig {
        GridConfig { cell_size_px: self.cell_size_px, scale: self.scale }
    }
}

/// Initial scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSection {
    /// Selected algorithm.
    #[serde(default)]
    pub algorithm: AlgorithmId,

    /// Line start.
    #[serde(default = "default_line_start")]
    pub line_start: Option<GridPoint>,

    /// Line end.
    #[serde(default = "default_line_end")]
    pub line_end: Option<GridPoint>,

    /// Circle center.
    #[serde(default = "default_circle_center")]
    pub circle_center: Option<GridPoint>,

    /// Circle radius; negative values are rejected by [`Config::to_scene`].
    #[serde(default = "default_circle_radius")]
    pub circle_radius: Option<i64>,
}

fn default_line_start() -> Option<GridPoint> {
    Scene::default().line_start
}
fn default_line_end() -> Option<GridPoint> {
    Scene::default().line_end
}
fn default_circle_center() -> Option<GridPoint> {
    Scene::default().circle_center
}
fn default_circle_radius() -> Option<i64> {
    Scene::default().circle_radius.map(i64::from)
}

impl Default for SceneSection {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmId::default(),
            line_start: default_line_start(),
            line_end: default_line_end(),
            circle_center: default_circle_center(),
            circle_radius: default_circle_radius(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Grid settings.
    #[serde(default)]
    pub grid: GridSection,

    /// Initial scene.
    #[serde(default)]
    pub scene: SceneSection,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self { version: default_version(), grid: GridSection::default(), scene: SceneSection::default() }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config_dir>/grid-raster/config.yaml`.
    #[cfg(feature = "cli")]
    #[must_use]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("grid-raster").join("config.yaml"))
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

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "using default config");
            Self::default()
        })
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse { line: 0, message: e.to_string() })
    }

    /// Check the grid section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridConfig`] for a non-positive or non-finite
    /// cell size or a scale outside `[0.5, 2.0]`, and
    /// [`Error::InvalidDimensions`] for an empty canvas.
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid.grid_config();
        grid.validate()?;
        if !(MIN_SCALE..=MAX_SCALE).contains(&grid.scale) {
            return Err(Error::InvalidGridConfig { cell_size_px: grid.cell_size_px, scale: grid.scale });
        }
        if self.grid.width_px == 0 || self.grid.height_px == 0 {
            return Err(Error::InvalidDimensions { width: self.grid.width_px, height: self.grid.height_px });
        }
        Ok(())
    }

    /// Build the initial scene.
    ///
    /// # Errors
    ///
    /// Returns any [`Self::validate`] error, or
    /// [`Error::NegativeRadius`] for a negative radius.
    pub fn to_scene(&self) -> Result<Scene> {
        self.validate()?;
        let circle_radius = match self.scene.circle_radius {
            Some(r) => Some(Circle::from_signed(GridPoint::ORIGIN, r)?.radius),
            None => None,
        };

        Ok(Scene {
            algorithm: self.scene.algorithm,
            line_start: self.scene.line_start,
            line_end: self.scene.line_end,
            circle_center: self.scene.circle_center,
            circle_radius,
            grid: self.grid.grid_config(),
        })
    }
}
