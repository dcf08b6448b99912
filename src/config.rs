//! User configuration.
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/gazeplay/config.toml` on Linux). Every field has a default,
//! so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::{Controls, PlayOptions, DEFAULT_POINT_RADIUS};
use crate::scheme::{parse_color, PointStyle};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub render: RenderConfig,
}

/// `[playback]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Render loop frames per second
    pub fps: f64,
    /// Initial playback speed
    pub speed: f64,
    /// Multiplier per speed up/down key press
    pub speed_step: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Timeline percent moved per arrow key press
    pub seek_step_percent: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        let controls = Controls::default();
        Self {
            fps: 30.0,
            speed: 1.0,
            speed_step: controls.speed_step,
            min_speed: controls.min_speed,
            max_speed: controls.max_speed,
            seek_step_percent: controls.seek_step_percent,
        }
    }
}

/// `[render]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Gaze point radius, in stimulus units
    pub point_radius: f64,
    /// Stimulus area width; the data's largest x when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stimulus_width: Option<f64>,
    /// Stimulus area height; the data's largest y when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stimulus_height: Option<f64>,
    /// Group styles, assigned to viewer groups in declaration order
    pub palette: Vec<PaletteEntry>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            point_radius: DEFAULT_POINT_RADIUS,
            stimulus_width: None,
            stimulus_height: None,
            palette: Vec::new(),
        }
    }
}

/// One palette entry: color names for the point fill and outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub fill: String,
    pub stroke: String,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("gazeplay").join("config.toml"))
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Resolve the palette color names.
    pub fn palette(&self) -> Result<Vec<PointStyle>> {
        self.render
            .palette
            .iter()
            .map(|entry| {
                let fill = color(&entry.fill)?;
                let stroke = color(&entry.stroke)?;
                Ok(PointStyle::new(fill, stroke))
            })
            .collect()
    }

    pub fn controls(&self) -> Controls {
        Controls {
            speed_step: self.playback.speed_step,
            min_speed: self.playback.min_speed,
            max_speed: self.playback.max_speed,
            seek_step_percent: self.playback.seek_step_percent,
        }
    }

    /// Playback options from this config; CLI flags are applied on top.
    pub fn play_options(&self) -> Result<PlayOptions> {
        let extent = match (self.render.stimulus_width, self.render.stimulus_height) {
            (Some(w), Some(h)) => Some((w, h)),
            (None, None) => None,
            _ => bail!("render.stimulus_width and render.stimulus_height must be set together"),
        };
        Ok(PlayOptions {
            fps: self.playback.fps,
            speed: self.playback.speed,
            point_radius: self.render.point_radius,
            palette: self.palette()?,
            controls: self.controls(),
            extent,
            ..PlayOptions::default()
        })
    }
}

fn color(name: &str) -> Result<ratatui::style::Color> {
    match parse_color(name) {
        Some(color) => Ok(color),
        None => bail!("Unknown color in palette: {}", name),
    }
}
