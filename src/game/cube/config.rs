// Roll configuration - loadable from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::animator::{Easing, ROLL_ANGLE};
use super::cues::CueConfig;
use crate::engine::physics::CollisionLayer;

/// Errors raised while building or loading a [`RollConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Roll duration must be positive and finite, got {0}")]
    InvalidDuration(f32),

    #[error("Angular rate must be positive and finite, got {0}")]
    InvalidAngularRate(f32),

    #[error("Half extent must be positive and finite, got {0}")]
    InvalidHalfExtent(f32),

    #[error("Easing strength must be within [0, 1], got {0}")]
    InvalidEasingStrength(f32),

    #[error("Probe half extent must be positive and finite, got {0}")]
    InvalidProbeExtent(f32),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Pre-move obstruction test settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Whether the destination cell is checked before a roll from Idle
    pub enabled: bool,
    /// Layers that count as obstacles
    pub obstacle_layers: u32,
    /// Half extent of the box tested at the destination cell.
    /// Keep it below the cube half extent so neighbouring cells don't register.
    pub probe_half_extent: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            obstacle_layers: CollisionLayer::Obstacle.bits(),
            probe_half_extent: 0.45,
        }
    }
}

/// Everything that tunes the rolling cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// Seconds per 90° roll
    pub roll_duration: f32,
    /// Half the cube edge; one cell is `2 * half_extent`
    pub half_extent: f32,
    pub easing: Easing,
    pub collision: CollisionConfig,
    pub cues: CueConfig,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            roll_duration: 0.8,
            half_extent: 0.5,
            easing: Easing::default(),
            collision: CollisionConfig::default(),
            cues: CueConfig::default(),
        }
    }
}

impl RollConfig {
    /// Default config with the roll duration derived from a rate in degrees per second
    pub fn with_angular_rate(degrees_per_second: f32) -> Result<Self, ConfigError> {
        if !degrees_per_second.is_finite() || degrees_per_second <= 0.0 {
            return Err(ConfigError::InvalidAngularRate(degrees_per_second));
        }
        Ok(Self {
            roll_duration: ROLL_ANGLE / degrees_per_second,
            ..Self::default()
        })
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Edge length of the cube, which is also the grid cell size
    pub fn cell_size(&self) -> f32 {
        2.0 * self.half_extent
    }

    pub fn angular_rate(&self) -> f32 {
        ROLL_ANGLE / self.roll_duration
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.roll_duration.is_finite() || self.roll_duration <= 0.0 {
            return Err(ConfigError::InvalidDuration(self.roll_duration));
        }
        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return Err(ConfigError::InvalidHalfExtent(self.half_extent));
        }
        if let Easing::Smooth { strength } = self.easing {
            if !(0.0..=1.0).contains(&strength) {
                return Err(ConfigError::InvalidEasingStrength(strength));
            }
        }
        let probe = self.collision.probe_half_extent;
        if !probe.is_finite() || probe <= 0.0 {
            return Err(ConfigError::InvalidProbeExtent(probe));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RollConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_size(), 1.0);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_angular_rate_round_trip() {
        let config = RollConfig::with_angular_rate(180.0).unwrap();
        assert_eq!(config.roll_duration, 0.5);
        assert_eq!(config.angular_rate(), 180.0);
    }

    #[test]
    fn test_zero_angular_rate_rejected() {
        assert!(matches!(
            RollConfig::with_angular_rate(0.0),
            Err(ConfigError::InvalidAngularRate(_))
        ));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = RollConfig::from_toml_str("").unwrap();
        assert_eq!(config, RollConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            roll_duration = 0.25
            half_extent = 1.0

            [easing]
            kind = "smooth"
            strength = 0.3

            [collision]
            enabled = false
            obstacle_layers = 24

            [cues]
            roll_volume = 0.2
        "#;
        let config = RollConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.roll_duration, 0.25);
        assert_eq!(config.cell_size(), 2.0);
        assert_eq!(config.easing, Easing::Smooth { strength: 0.3 });
        assert!(!config.collision.enabled);
        assert_eq!(config.collision.obstacle_layers, 24);
        assert_eq!(config.collision.probe_half_extent, 0.45);
        assert_eq!(config.cues.roll_volume, 0.2);
        assert_eq!(config.cues.land_volume, 0.7);
    }

    #[test]
    fn test_parse_smooth_easing() {
        let toml = r#"
            [easing]
            kind = "smooth"
            strength = 0.8
        "#;
        let config = RollConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.easing, Easing::Smooth { strength: 0.8 });
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = RollConfig::from_toml_str("roll_duration = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration(_)));

        let err = RollConfig::from_toml_str("half_extent = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHalfExtent(_)));

        let err = RollConfig::from_toml_str("[easing]\nkind = \"smooth\"\nstrength = 2.0")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEasingStrength(_)));

        let err = RollConfig::from_toml_str("[collision]\nprobe_half_extent = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProbeExtent(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = RollConfig::from_toml_str("roll_duration = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RollConfig::from_file(Path::new("/nonexistent/cube-roller.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/cube-roller.toml"));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidHalfExtent(-2.0);
        assert_eq!(err.to_string(), "Half extent must be positive and finite, got -2");
    }
}
