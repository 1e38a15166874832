//! Immutable game configuration.
//!
//! Board dimensions and physics constants live here instead of in ambient
//! state. A `GameConfig` is built once at startup (defaults, optionally
//! overridden by a JSON file) and then shared read-only by the update step,
//! the spawner and the session drivers.

use super::constants::*;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunable parameters for one game. All lengths are logical pixels, all
/// speeds pixels per second.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: f64,
    pub board_height: f64,

    pub bird_width: f64,
    pub bird_height: f64,

    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Vertical reference the random pipe offset is measured from.
    pub pipe_origin_y: f64,

    pub gravity: f64,
    pub pipe_speed: f64,
    /// Velocity set (not added) on jump. Negative is upward.
    pub jump_velocity: f64,

    /// Tick driver sleep between ticks.
    pub frame_ms: u64,
    /// Spawner period, independent of the tick rate.
    pub spawn_interval_ms: u64,
    /// Upper bound applied to Δt before integrating.
    pub max_delta: f64,

    /// Fixed RNG seed for the spawner. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_origin_y: PIPE_ORIGIN_Y,
            gravity: GRAVITY,
            pipe_speed: PIPE_SPEED,
            jump_velocity: JUMP_VELOCITY,
            frame_ms: FRAME_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            max_delta: MAX_DELTA_SECONDS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Bird's fixed column: one eighth of the board width.
    pub fn bird_start_x(&self) -> f64 {
        self.board_width / 8.0
    }

    /// Bird's starting row: board mid-height.
    pub fn bird_start_y(&self) -> f64 {
        self.board_height / 2.0
    }

    /// Height of the gap between a top and bottom pipe.
    pub fn opening_space(&self) -> f64 {
        self.board_height / 4.0
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_speed", self.pipe_speed),
            ("max_delta", self.max_delta),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(format!("gravity must be a positive number, got {}", self.gravity));
        }
        if !self.jump_velocity.is_finite() || self.jump_velocity >= 0.0 {
            return Err(format!(
                "jump_velocity must be negative (upward), got {}",
                self.jump_velocity
            ));
        }
        if !self.pipe_origin_y.is_finite() {
            return Err("pipe_origin_y must be finite".to_string());
        }
        if self.frame_ms == 0 {
            return Err("frame_ms must be at least 1".to_string());
        }
        if self.spawn_interval_ms == 0 {
            return Err("spawn_interval_ms must be at least 1".to_string());
        }
        Ok(())
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Platform config location, e.g. `~/.config/flappy/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, falling back to defaults when the file is absent or
    /// unusable. A broken file is reported but never stops the game.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Ignoring config at {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 360.0);
        assert_eq!(config.board_height, 640.0);
        assert_eq!(config.bird_start_x(), 45.0);
        assert_eq!(config.bird_start_y(), 320.0);
        assert_eq!(config.opening_space(), 160.0);
        assert_eq!(config.spawn_interval(), Duration::from_millis(1200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "gravity": 900.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.gravity, 900.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pipe_speed, PIPE_SPEED);
        assert_eq!(config.board_height, BOARD_HEIGHT);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json_str(r#"{ "board_width": 0.0 }"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err = GameConfig::from_json_str(r#"{ "spawn_interval_ms": 0 }"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_gravity_must_pull_down() {
        for json in [r#"{ "gravity": -50.0 }"#, r#"{ "gravity": 0.0 }"#] {
            let err = GameConfig::from_json_str(json).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{}", json);
        }
        assert!(GameConfig::from_json_str(r#"{ "gravity": 1.0 }"#).is_ok());
    }

    #[test]
    fn test_jump_velocity_must_point_up() {
        for json in [r#"{ "jump_velocity": 170.0 }"#, r#"{ "jump_velocity": 0.0 }"#] {
            let err = GameConfig::from_json_str(json).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{}", json);
        }
        assert!(GameConfig::from_json_str(r#"{ "jump_velocity": -1.0 }"#).is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("flappy-config-does-not-exist.json");
        let config = GameConfig::load_or_default(Some(&path));
        assert_eq!(config, GameConfig::default());
        assert_eq!(GameConfig::load_or_default(None), GameConfig::default());
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "flappy-config-broken-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "gravity": "heavy" }"#).unwrap();
        let config = GameConfig::load_or_default(Some(&path));
        let _ = fs::remove_file(&path);
        assert_eq!(config, GameConfig::default());
    }
}
