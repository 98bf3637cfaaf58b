//! Battle entities: vector records with combat attributes

use crate::defaults::{POWER_AGILITY_WEIGHT, POWER_STRENGTH_WEIGHT};
use crate::vectors::VectorRecord;
use serde::{Deserialize, Serialize};

/// A warrior: a vector record plus strength and agility
///
/// Attributes are never clamped; mutation may drive them arbitrarily far in
/// either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleEntity {
    pub record: VectorRecord,
    pub strength: f32,
    pub agility: f32,
}

impl BattleEntity {
    pub fn new(id: u64, values: Vec<f32>, strength: f32, agility: f32) -> Self {
        Self {
            record: VectorRecord::new(id, values),
            strength,
            agility,
        }
    }

    pub fn id(&self) -> u64 {
        self.record.id
    }

    pub fn values(&self) -> &[f32] {
        &self.record.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.record.values
    }

    pub fn dims(&self) -> usize {
        self.record.dims()
    }

    /// Derived power: `0.6 * strength + 0.4 * agility`
    pub fn power(&self) -> f32 {
        POWER_STRENGTH_WEIGHT * self.strength + POWER_AGILITY_WEIGHT * self.agility
    }
}
