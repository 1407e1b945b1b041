//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Wheel physics and item bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Velocity multiplier applied after every tick
    pub friction: f64,

    /// Velocity at or below which the wheel stops (degrees/tick)
    pub stop_threshold: f64,

    /// Lower bound of the initial velocity draw (degrees/tick)
    pub min_velocity: f64,

    /// Upper bound of the initial velocity draw (degrees/tick)
    pub max_velocity: f64,

    /// Fewest items a wheel accepts
    pub min_items: usize,

    /// Items past this count are dropped on reset
    pub max_items: usize,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            friction: 0.97,
            stop_threshold: 0.2,
            min_velocity: 25.0,
            max_velocity: 35.0,
            min_items: 2,
            max_items: 20,
        }
    }
}

impl WheelConfig {
    /// Short spins for demos and tests
    pub fn quick() -> Self {
        Self {
            friction: 0.85,
            stop_threshold: 1.0,
            ..Default::default()
        }
    }

    /// Builder: set friction
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Builder: set stopping threshold
    pub fn with_stop_threshold(mut self, threshold: f64) -> Self {
        self.stop_threshold = threshold;
        self
    }

    /// Builder: set initial velocity range
    pub fn with_velocity_range(mut self, min: f64, max: f64) -> Self {
        self.min_velocity = min;
        self.max_velocity = max;
        self
    }

    /// Builder: set maximum item count
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Reject values that would make a spin never stop or never start
    pub fn validate(&self) -> GenResult<()> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(GenError::Config(format!(
                "friction must be in (0, 1), got {}",
                self.friction
            )));
        }
        if !(self.stop_threshold > 0.0) {
            return Err(GenError::Config(format!(
                "stop_threshold must be positive, got {}",
                self.stop_threshold
            )));
        }
        if !(self.min_velocity > 0.0) || !(self.max_velocity >= self.min_velocity) {
            return Err(GenError::Config(format!(
                "velocity range [{}, {}] is invalid",
                self.min_velocity, self.max_velocity
            )));
        }
        if self.min_items < 2 || self.max_items < self.min_items {
            return Err(GenError::Config(format!(
                "item bounds [{}, {}] are invalid",
                self.min_items, self.max_items
            )));
        }
        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Largest integer domain materialized before sampling
    pub max_integer_domain: u64,

    /// Wheel settings
    pub wheel: WheelConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_integer_domain: 10_000_000,
            wheel: WheelConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Deterministic config for reproducible runs
    pub fn deterministic(seed: u64) -> Self {
        Self::default().with_seed(seed)
    }

    /// Builder: set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set integer domain limit
    pub fn with_max_integer_domain(mut self, limit: u64) -> Self {
        self.max_integer_domain = limit;
        self
    }

    /// Builder: set wheel config
    pub fn with_wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.max_integer_domain == 0 {
            return Err(GenError::Config("max_integer_domain must be positive".into()));
        }
        self.wheel.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.wheel.friction, 0.97);
        assert_eq!(config.wheel.stop_threshold, 0.2);
        assert_eq!(config.wheel.max_items, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_seed(42)
            .with_max_integer_domain(500)
            .with_wheel(WheelConfig::default().with_friction(0.9));

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_integer_domain, 500);
        assert_eq!(config.wheel.friction, 0.9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{"seed": 5, "wheel": {"friction": 0.9}}"#)
            .unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.wheel.friction, 0.9);
        assert_eq!(config.wheel.stop_threshold, 0.2);
        assert_eq!(config.max_integer_domain, 10_000_000);
    }

    #[test]
    fn test_invalid_wheel_rejected() {
        assert!(WheelConfig::default().with_friction(1.0).validate().is_err());
        assert!(WheelConfig::default().with_stop_threshold(0.0).validate().is_err());
        assert!(WheelConfig::default().with_velocity_range(30.0, 20.0).validate().is_err());
        assert!(WheelConfig::default().with_max_items(1).validate().is_err());
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"wheel": {"friction": 2.0}}"#),
            Err(GenError::Config(_))
        ));
    }

    #[test]
    fn test_load_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        let config = EngineConfig::deterministic(9).with_wheel(WheelConfig::quick());
        std::fs::write(&path, config.to_json().unwrap()).unwrap();

        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            EngineConfig::load("/nonexistent/engine.json"),
            Err(GenError::Io(_))
        ));
    }
}
