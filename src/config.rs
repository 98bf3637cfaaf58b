//! Configuration module

use crate::defaults::{
    DEFAULT_ATTRIBUTE_RANGE, DEFAULT_DIMENSIONS, DEFAULT_MUTATION_STD_DEV, DEFAULT_ROUNDS,
    DEFAULT_WARRIORS,
};
use crate::error::{ArenaError, Result};

/// Main configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub arena: ArenaConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Load config from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let arena = ArenaConfig {
            seed: parse_env("ARENA_SEED")?,
            worker_threads: parse_env("ARENA_WORKERS")?,
            mutation_std_dev: parse_env("ARENA_MUTATION_STD_DEV")?
                .unwrap_or(DEFAULT_MUTATION_STD_DEV),
            fixed_draw: None,
        };
        arena.validate()?;

        let simulation = SimulationConfig {
            warriors: parse_env("ARENA_WARRIORS")?.unwrap_or(DEFAULT_WARRIORS),
            rounds: parse_env("ARENA_ROUNDS")?.unwrap_or(DEFAULT_ROUNDS),
            dimensions: parse_env("ARENA_DIMENSIONS")?.unwrap_or(DEFAULT_DIMENSIONS),
            attribute_range: DEFAULT_ATTRIBUTE_RANGE,
        };

        Ok(Self { arena, simulation })
    }
}

/// Read an optional variable, failing on values that do not parse
fn parse_env<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {:?} ({})", key, raw, e)),
        Err(_) => Ok(None),
    }
}

/// Tournament engine configuration
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Base seed for every per-pair generator; drawn at random when absent
    pub seed: Option<u64>,
    /// Size of a dedicated battle worker pool; the global rayon pool when absent
    pub worker_threads: Option<usize>,
    /// Standard deviation of the loser mutation
    pub mutation_std_dev: f32,
    /// Pin the outcome draw `r` for every battle
    pub fixed_draw: Option<f32>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            worker_threads: None,
            mutation_std_dev: DEFAULT_MUTATION_STD_DEV,
            fixed_draw: None,
        }
    }
}

impl ArenaConfig {
    /// Default config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.worker_threads == Some(0) {
            return Err(ArenaError::config("worker_threads must be positive"));
        }
        if !self.mutation_std_dev.is_finite() || self.mutation_std_dev < 0.0 {
            return Err(ArenaError::config(format!(
                "mutation_std_dev must be finite and non-negative, got {}",
                self.mutation_std_dev
            )));
        }
        if let Some(draw) = self.fixed_draw {
            if !(0.0..=1.0).contains(&draw) {
                return Err(ArenaError::config(format!(
                    "fixed_draw must lie in [0, 1], got {}",
                    draw
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for the demo simulation
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of generated warriors
    pub warriors: usize,
    /// Tournament rounds to run
    pub rounds: usize,
    /// Vector dimensions
    pub dimensions: usize,
    /// Values, strength and agility are drawn from `[0, attribute_range)`
    pub attribute_range: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            warriors: DEFAULT_WARRIORS,
            rounds: DEFAULT_ROUNDS,
            dimensions: DEFAULT_DIMENSIONS,
            attribute_range: DEFAULT_ATTRIBUTE_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ArenaConfig::default().validate().is_ok());
        assert_eq!(ArenaConfig::seeded(5).seed, Some(5));

        let sim = SimulationConfig::default();
        assert_eq!(sim.warriors, 16);
        assert_eq!(sim.rounds, 4);
        assert_eq!(sim.dimensions, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ArenaConfig {
            worker_threads: Some(0),
            ..ArenaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ArenaConfig {
            mutation_std_dev: -0.5,
            ..ArenaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ArenaConfig {
            fixed_draw: Some(1.5),
            ..ArenaConfig::default()
        };
        assert!(matches!(config.validate(), Err(ArenaError::Config(_))));
    }
}
