//! Configuration file support for drom.
//!
//! Settings are read from `~/.config/drom/config.toml` (or a path given on the
//! command line) and cover the exported TikZ document, the external renderer
//! and a few geometry knobs.
//!
//! If no config file exists, defaults are used.

pub mod types;

pub use types::{ExportConfig, GeometryConfig, RenderConfig};

use crate::hex::Point;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [export]
/// scale = 1.9
/// boundary_line_width = "1mm"
/// interior_line_width = "0.3mm"
///
/// [render]
/// binary = "pdflatex"
/// timeout_secs = 60
///
/// [geometry]
/// neighbor_tolerance = 1e-6
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Document generation settings
    #[serde(default)]
    pub export: ExportConfig,

    /// External renderer settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Geometry settings
    #[serde(default)]
    pub geometry: GeometryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced by the nearest valid value (or the default)
    /// and a warning is logged.
    ///
    /// Validated ranges:
    /// - `export.scale`: 0.1 - 10.0
    /// - `render.timeout_secs`: 1 - 600
    /// - `geometry.neighbor_tolerance`: 1e-12 - 1e-2
    pub fn validate_and_clamp(&mut self) {
        if !(0.1..=10.0).contains(&self.export.scale) {
            log::warn!(
                "Invalid export scale {:.3}, clamping to 0.1-10.0 range",
                self.export.scale
            );
            self.export.scale = if self.export.scale.is_nan() {
                ExportConfig::default().scale
            } else {
                self.export.scale.clamp(0.1, 10.0)
            };
        }

        if self.export.boundary_line_width.trim().is_empty() {
            log::warn!("Empty boundary_line_width, falling back to default");
            self.export.boundary_line_width = ExportConfig::default().boundary_line_width;
        }

        if self.export.interior_line_width.trim().is_empty() {
            log::warn!("Empty interior_line_width, falling back to default");
            self.export.interior_line_width = ExportConfig::default().interior_line_width;
        }

        let working_name = self.export.working_name.trim();
        if working_name.is_empty() || working_name.contains(['/', '\\']) {
            log::warn!(
                "Invalid working_name '{}', falling back to 'Drom'",
                self.export.working_name
            );
            self.export.working_name = ExportConfig::default().working_name;
        }

        if !(1..=600).contains(&self.render.timeout_secs) {
            log::warn!(
                "Invalid render timeout_secs {}, clamping to 1-600 range",
                self.render.timeout_secs
            );
            self.render.timeout_secs = self.render.timeout_secs.clamp(1, 600);
        }

        if self.render.binary.trim().is_empty() {
            log::warn!("Empty render binary, disabling rendering");
            self.render.enabled = false;
        }

        if !(1e-12..=1e-2).contains(&self.geometry.neighbor_tolerance) {
            log::warn!(
                "Invalid neighbor_tolerance {:e}, clamping to 1e-12-1e-2 range",
                self.geometry.neighbor_tolerance
            );
            self.geometry.neighbor_tolerance = if self.geometry.neighbor_tolerance.is_nan() {
                GeometryConfig::default().neighbor_tolerance
            } else {
                self.geometry.neighbor_tolerance.clamp(1e-12, 1e-2)
            };
        }

        if !self.geometry.seed.iter().all(|c| c.is_finite()) {
            log::warn!(
                "Invalid seed {:?}, falling back to the origin",
                self.geometry.seed
            );
            self.geometry.seed = [0.0, 0.0];
        }
    }

    /// Seed position as a point.
    pub fn seed(&self) -> Point {
        Point::new(self.geometry.seed[0], self.geometry.seed[1])
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/drom/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("drom");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does
    /// not exist. Loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// Writes the documented example config to `config_path`.
    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
