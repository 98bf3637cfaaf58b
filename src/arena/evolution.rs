//! Evolution rule applied to each round's loser
//!
//! Every coordinate, then strength, then agility receive an independent
//! sample from `Normal(0, std_dev)`. The sampling order is fixed so a seeded
//! generator always produces the same displacement.

use super::entity::BattleEntity;
use crate::defaults::MUTATION_MEAN;
use crate::error::{ArenaError, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Gaussian mutation
#[derive(Debug, Clone, Copy)]
pub struct Mutation {
    normal: Normal<f32>,
}

impl Mutation {
    /// Create a mutation with the given standard deviation
    pub fn new(std_dev: f32) -> Result<Self> {
        let normal = Normal::new(MUTATION_MEAN, std_dev).map_err(|e| {
            ArenaError::config(format!("invalid mutation std_dev {}: {}", std_dev, e))
        })?;
        Ok(Self { normal })
    }

    pub fn std_dev(&self) -> f32 {
        self.normal.std_dev()
    }

    /// Perturb `entity` in place
    pub fn apply<R: Rng>(&self, entity: &mut BattleEntity, rng: &mut R) {
        for value in entity.values_mut() {
            *value += self.normal.sample(rng);
        }
        entity.strength += self.normal.sample(rng);
        entity.agility += self.normal.sample(rng);
    }
}
