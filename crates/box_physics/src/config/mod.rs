//! Configuration system
//!
//! Settings files are TOML or RON, chosen by extension.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;
use crate::physics::world::{
    DEFAULT_AIR_RESISTANCE, DEFAULT_FRICTION, DEFAULT_GROUNDED_STABILITY, DEFAULT_RESTITUTION,
    DEFAULT_VELOCITY_THRESHOLD,
};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tunable physics parameters, as edited by a host's tuning panel
///
/// Missing fields fall back to their defaults, so partial files are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Strength of gravity
    pub gravity_magnitude: f32,
    /// Direction of gravity; normalized when applied
    pub gravity_direction: [f32; 3],
    /// Restitution for body-to-body impulses (0..1)
    pub restitution: f32,
    /// Horizontal friction multiplier on resting contacts (0..1)
    pub friction: f32,
    /// Per-step velocity damping (0.8..1)
    pub air_resistance: f32,
    /// Contact-free frames before a body stops being grounded
    pub grounded_stability: u32,
    /// Vertical rest threshold for grounded bodies
    pub velocity_threshold: f32,
    /// Speed used for projectile launches
    pub launch_speed: f32,
    /// Launch angle above the horizontal, in degrees
    pub launch_angle_degrees: f32,
    /// Whether grounded bodies are re-checked for support every frame
    pub verify_support: bool,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity_magnitude: 9.81,
            gravity_direction: [0.0, -1.0, 0.0],
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
            air_resistance: DEFAULT_AIR_RESISTANCE,
            grounded_stability: DEFAULT_GROUNDED_STABILITY,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            launch_speed: 10.0,
            launch_angle_degrees: 45.0,
            verify_support: true,
        }
    }
}

impl Config for PhysicsSettings {}

impl PhysicsSettings {
    /// Gravity vector: normalized direction scaled by magnitude
    ///
    /// A zero direction yields zero gravity.
    pub fn gravity(&self) -> Vec3 {
        let [x, y, z] = self.gravity_direction;
        Vec3::new(x, y, z)
            .try_normalize(f32::EPSILON)
            .map_or_else(Vec3::zeros, |direction| direction * self.gravity_magnitude)
    }
}
