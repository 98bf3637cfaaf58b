//! Centralized default values and constants
//!
//! This module consolidates the weights, distribution parameters and demo
//! sizes used throughout the codebase, making them easy to find and modify.

// ============================================================================
// Battle Entity Parameters
// ============================================================================

/// Weight of strength in a warrior's power
pub const POWER_STRENGTH_WEIGHT: f32 = 0.6;

/// Weight of agility in a warrior's power
pub const POWER_AGILITY_WEIGHT: f32 = 0.4;

// ============================================================================
// Evolution Parameters
// ============================================================================

/// Mean of the Gaussian perturbation applied to a round's loser
pub const MUTATION_MEAN: f32 = 0.0;

/// Standard deviation of the Gaussian perturbation applied to a round's loser
pub const DEFAULT_MUTATION_STD_DEV: f32 = 0.1;

// ============================================================================
// Simulation Defaults
// ============================================================================

/// Number of warriors generated by the battle simulation
pub const DEFAULT_WARRIORS: usize = 16;

/// Number of tournament rounds run by the battle simulation
pub const DEFAULT_ROUNDS: usize = 4;

/// Vector dimensionality of generated warriors
pub const DEFAULT_DIMENSIONS: usize = 3;

/// Upper bound (exclusive) for generated values, strength and agility
pub const DEFAULT_ATTRIBUTE_RANGE: f32 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_weights_sum_to_one() {
        assert!((POWER_STRENGTH_WEIGHT + POWER_AGILITY_WEIGHT - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_constants_are_valid() {
        assert!(DEFAULT_MUTATION_STD_DEV > 0.0);
        assert_eq!(MUTATION_MEAN, 0.0);
        assert!(DEFAULT_WARRIORS > 1);
        assert!(DEFAULT_DIMENSIONS > 0);
        assert!(DEFAULT_ATTRIBUTE_RANGE > 0.0);
    }
}
