//! Viewer configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults (`Default` impls, filled in per field by serde)
//! 2. `orrery.ron` in the working directory, or the file passed on the
//!    command line
//! 3. Environment variables prefixed with `ORRERY_`
//!
//! Example environment variable: `ORRERY_CAMERA__TRANSITION_MS=1500`
//!
//! The web build has no file system or environment and runs on the
//! compiled defaults.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};
#[cfg(not(target_arch = "wasm32"))]
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use orrery_core::{CameraSettings, SceneSettings};

/// Main viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrreryConfig {
    #[serde(default)]
    pub camera: CameraSettings,

    #[serde(default)]
    pub time: TimeConfig,

    #[serde(default)]
    pub scene: BeltConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Simulated time settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Time scale at startup
    pub initial_scale: f32,
    /// Upper end of the time slider
    pub max_scale: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            max_scale: 10.0,
        }
    }
}

/// Belt population settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltConfig {
    /// Seed for asteroid, Kuiper belt and comet placement
    pub seed: u64,
    pub asteroid_count: usize,
    pub kuiper_count: usize,
    pub comet_count: usize,
    /// Background point stars
    pub star_count: usize,
}

impl Default for BeltConfig {
    fn default() -> Self {
        let scene = SceneSettings::default();
        Self {
            seed: scene.seed,
            asteroid_count: scene.asteroid_count,
            kuiper_count: scene.kuiper_count,
            comet_count: scene.comet_count,
            star_count: scene.star_count,
        }
    }
}

/// UI and window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: u32,
    /// Initial window height
    pub window_height: u32,
    /// Show the FPS / time / camera overlay on startup
    pub show_hud: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            show_hud: true,
        }
    }
}

impl OrreryConfig {
    /// Load configuration from `orrery.ron` (if present) and the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `orrery.ron` when given.
    ///
    /// An explicitly named file must exist; the default one is optional.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::load_layers(path, environment())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_layers(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("orrery")
                .format(FileFormat::Ron)
                .required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to build configuration")?;

        let loaded: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        log::debug!("Configuration: {loaded:?}");
        Ok(loaded)
    }

    /// Settings handed to the simulation core.
    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            seed: self.scene.seed,
            asteroid_count: self.scene.asteroid_count,
            kuiper_count: self.scene.kuiper_count,
            comet_count: self.scene.comet_count,
            star_count: self.scene.star_count,
            initial_time_scale: self.time.initial_scale,
            max_time_scale: self.time.max_scale,
        }
    }
}

/// Environment layer: ORRERY_CAMERA__TRANSITION_MS, ORRERY_UI__SHOW_HUD, ...
///
/// Without an explicit prefix separator `config` expects `ORRERY__CAMERA__...`.
#[cfg(not(target_arch = "wasm32"))]
fn environment() -> Environment {
    Environment::with_prefix("ORRERY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
