// game/config.rs

use serde::Deserialize;
use std::fmt;

const CONFIG_JSON: &str = include_str!("../../assets/game_config.json");

/// Tunables for pacing and presentation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds a level transition lasts
    pub transition_duration: f32,
    /// Nominal seconds accumulated per update tick
    pub frame_delta: f32,
    /// Camera height before the first transition
    pub camera_start_y: f32,
    /// Camera height once a transition completes
    pub camera_end_y: f32,
    /// Eye distance from the origin along +Z
    pub camera_distance: f32,
    /// Node sphere radius, shared by drawing and picking
    pub node_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            transition_duration: 2.0,
            frame_delta: 1.0 / 60.0,
            camera_start_y: 0.0,
            camera_end_y: -1.5,
            camera_distance: 3.0,
            node_radius: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Could not parse game config: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid game config: {}", msg),
        }
    }
}

impl GameConfig {
    /// Load the config embedded at build time
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(CONFIG_JSON)
    }

    /// Parse and validate; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("transition_duration", self.transition_duration),
            ("frame_delta", self.frame_delta),
            ("camera_distance", self.camera_distance),
            ("node_radius", self.node_radius),
        ];

        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = GameConfig::load().unwrap();

        assert_eq!(config.transition_duration, 2.0);
        assert_eq!(config.camera_end_y, -1.5);
        assert!((config.frame_delta - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GameConfig::from_json(r#"{ "transition_duration": 3.5 }"#).unwrap();

        assert_eq!(config.transition_duration, 3.5);
        assert_eq!(config.node_radius, GameConfig::default().node_radius);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let err = GameConfig::from_json(r#"{ "transition_duration": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("transition_duration"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
