//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FLATLAND_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Collision tolerances
    #[serde(default)]
    pub physics: PhysicsSettings,
    /// Scene to load and how long to run it
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FLATLAND_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // FLATLAND_SCENE__STEPS=10 -> scene.steps = 10
        figment = figment.merge(Env::prefixed("FLATLAND_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Collision tolerances
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Width of the contact band: closer than this counts as touching
    pub contact_epsilon: f32,
    /// Slack for selecting candidate pairs before classification
    pub proximity_margin: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        let defaults = flatland_physics::PhysicsConfig::default();
        Self {
            contact_epsilon: defaults.contact_epsilon,
            proximity_margin: defaults.proximity_margin,
        }
    }
}

impl PhysicsSettings {
    /// Convert to the physics crate's config
    pub fn to_physics_config(&self) -> flatland_physics::PhysicsConfig {
        flatland_physics::PhysicsConfig::new(self.contact_epsilon, self.proximity_margin)
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Path to the RON scene file
    pub path: String,
    /// Number of simulation steps to run
    pub steps: u32,
    /// Seconds per step
    pub time_step: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: "scenes/demo.ron".to_string(),
            steps: 120,
            time_step: 1.0 / 60.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log every contact, not just the per-step summary
    pub log_contacts: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_contacts: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
