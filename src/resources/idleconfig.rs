//! Idle animation configuration resource.
//!
//! Process-wide defaults for idle timing, loaded once at startup from an INI
//! file and read-only afterwards. Per-character notes may override the times
//! when building an [`IdleProfile`](crate::components::idleanimation::IdleProfile).
//!
//! # Configuration File Format
//!
//! ```ini
//! [idle]
//! min_time = 5.0
//! max_time = 10.0
//! probability = 80
//! tick_rate = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default values used when the file or a key is missing
const DEFAULT_MIN_IDLE_TIME: f32 = 5.0;
const DEFAULT_MAX_IDLE_TIME: f32 = 10.0;
const DEFAULT_IDLE_PROBABILITY: f32 = 80.0;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./idle.ini";

/// Idle configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct IdleConfig {
    /// Seconds standing still before idles may start.
    pub min_idle_time: f32,
    /// Seconds standing still after which an idle is forced.
    pub max_idle_time: f32,
    /// Chance in percent (0-100) to start an idle on each eligible tick.
    pub idle_probability: f32,
    /// Simulation ticks per second of the host. Idle time is counted in ticks.
    pub tick_rate: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl IdleConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            min_idle_time: DEFAULT_MIN_IDLE_TIME,
            max_idle_time: DEFAULT_MAX_IDLE_TIME,
            idle_probability: DEFAULT_IDLE_PROBABILITY,
            tick_rate: DEFAULT_TICK_RATE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Set the idle probability, clamped to 0-100.
    pub fn set_idle_probability(&mut self, probability: f32) {
        self.idle_probability = probability.clamp(0.0, 100.0);
    }

    /// Set the host tick rate. Zero is raised to one.
    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.tick_rate = tick_rate.max(1);
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(min) = finite_float(&config, "min_time") {
            self.min_idle_time = min as f32;
        }
        if let Some(max) = finite_float(&config, "max_time") {
            self.max_idle_time = max as f32;
        }
        if let Some(probability) = finite_float(&config, "probability") {
            self.set_idle_probability(probability as f32);
        }
        if let Some(tick_rate) = config.getuint("idle", "tick_rate").ok().flatten() {
            self.set_tick_rate(u32::try_from(tick_rate).unwrap_or(u32::MAX));
        }

        info!(
            "Loaded idle config: min={}s max={}s probability={}% tick_rate={}",
            self.min_idle_time, self.max_idle_time, self.idle_probability, self.tick_rate
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("idle", "min_time", Some(self.min_idle_time.to_string()));
        config.set("idle", "max_time", Some(self.max_idle_time.to_string()));
        config.set("idle", "probability", Some(self.idle_probability.to_string()));
        config.set("idle", "tick_rate", Some(self.tick_rate.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved idle config to {:?}", self.config_path);

        Ok(())
    }
}

/// Read a float from the `[idle]` section, ignoring NaN and infinities.
fn finite_float(config: &Ini, key: &str) -> Option<f64> {
    config
        .getfloat("idle", key)
        .ok()
        .flatten()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("idleanim_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = IdleConfig::new();
        assert_eq!(config.min_idle_time, 5.0);
        assert_eq!(config.max_idle_time, 10.0);
        assert_eq!(config.idle_probability, 80.0);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = IdleConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config, IdleConfig::with_path(temp_path("missing")));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[idle]\nmin_time = 1.5\nprobability = 250\n").unwrap();

        let mut config = IdleConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.min_idle_time, 1.5);
        assert_eq!(config.max_idle_time, 10.0);
        assert_eq!(config.idle_probability, 100.0);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_non_finite_values_keep_defaults() {
        let path = temp_path("nonfinite");
        std::fs::write(&path, "[idle]\nmin_time = nan\nmax_time = inf\nprobability = NaN\n").unwrap();

        let mut config = IdleConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.min_idle_time, 5.0);
        assert_eq!(config.max_idle_time, 10.0);
        assert_eq!(config.idle_probability, 80.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut config = IdleConfig::with_path(&path);
        config.min_idle_time = 2.0;
        config.max_idle_time = 4.0;
        config.set_idle_probability(35.0);
        config.set_tick_rate(30);
        config.save_to_file().unwrap();

        let mut loaded = IdleConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
