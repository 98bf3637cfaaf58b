//! Pairwise battle outcome rule
//!
//! Both sides are scored as `power * (1 + similarity)`. A single draw `r` in
//! `[0, 1)` decides the battle: the left side wins iff
//! `left_score * r > right_score * (1 - r)`. Exact equality goes to the right.

use super::entity::BattleEntity;
use super::evolution::Mutation;
use crate::error::{ArenaError, Result};
use crate::math;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which side of a pair won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleSide {
    Left,
    Right,
}

/// Similarity-weighted scores for one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattleScores {
    pub similarity: f32,
    pub left: f32,
    pub right: f32,
}

impl BattleScores {
    pub fn compute(left: &BattleEntity, right: &BattleEntity) -> Result<Self> {
        let similarity = math::cosine_similarity(left.values(), right.values())?;
        let scores = Self {
            similarity,
            left: left.power() * (1.0 + similarity),
            right: right.power() * (1.0 + similarity),
        };
        if !scores.left.is_finite() || !scores.right.is_finite() {
            return Err(ArenaError::invalid_input(format!(
                "non-finite battle score between {} and {}",
                left.id(),
                right.id()
            )));
        }
        Ok(scores)
    }

    /// Resolve the battle for a given draw
    pub fn decide(&self, draw: f32) -> BattleSide {
        if self.left * draw > self.right * (1.0 - draw) {
            BattleSide::Left
        } else {
            BattleSide::Right
        }
    }
}

/// What happened in one battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// Position of the pair within its round
    pub pair: usize,
    pub left_id: u64,
    pub right_id: u64,
    pub winner: BattleSide,
    pub similarity: f32,
    pub draw: f32,
    /// The loser after mutation; dropped from the roster
    pub loser: BattleEntity,
}

impl BattleRecord {
    pub fn winner_id(&self) -> u64 {
        match self.winner {
            BattleSide::Left => self.left_id,
            BattleSide::Right => self.right_id,
        }
    }

    pub fn loser_id(&self) -> u64 {
        self.loser.id()
    }
}

/// Winner plus the record of the battle
#[derive(Debug, Clone)]
pub(crate) struct BattleOutcome {
    pub winner: BattleEntity,
    pub record: BattleRecord,
}

/// Run one battle on owned copies of the pair
///
/// The draw is taken from `rng` before any mutation sample, unless
/// `fixed_draw` pins it.
pub(crate) fn fight<R: Rng>(
    pair: usize,
    left: &BattleEntity,
    right: &BattleEntity,
    rng: &mut R,
    fixed_draw: Option<f32>,
    mutation: &Mutation,
) -> Result<BattleOutcome> {
    let scores = BattleScores::compute(left, right)?;
    let draw = match fixed_draw {
        Some(draw) => draw,
        None => rng.gen::<f32>(),
    };
    let side = scores.decide(draw);

    let (winner, loser) = match side {
        BattleSide::Left => (left, right),
        BattleSide::Right => (right, left),
    };
    let mut loser = loser.clone();
    mutation.apply(&mut loser, rng);

    debug!(
        pair,
        winner = winner.id(),
        loser = loser.id(),
        similarity = scores.similarity,
        left_score = scores.left,
        right_score = scores.right,
        draw,
        "Battle resolved"
    );

    Ok(BattleOutcome {
        winner: winner.clone(),
        record: BattleRecord {
            pair,
            left_id: left.id(),
            right_id: right.id(),
            winner: side,
            similarity: scores.similarity,
            draw,
            loser,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_MUTATION_STD_DEV;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_even_draw_reduces_to_score_comparison() {
        let strong = BattleEntity::new(1, vec![1.0, 2.0, 3.0], 9.0, 9.0);
        let weak = BattleEntity::new(2, vec![2.0, 2.0, 2.0], 1.0, 1.0);

        let scores = BattleScores::compute(&strong, &weak).unwrap();
        assert_eq!(scores.decide(0.5), BattleSide::Left);

        let scores = BattleScores::compute(&weak, &strong).unwrap();
        assert_eq!(scores.decide(0.5), BattleSide::Right);
    }

    #[test]
    fn test_exact_tie_goes_right() {
        let a = BattleEntity::new(1, vec![1.0, 1.0], 4.0, 4.0);
        let b = BattleEntity::new(2, vec![1.0, 1.0], 4.0, 4.0);
        let scores = BattleScores::compute(&a, &b).unwrap();
        assert_eq!(scores.decide(0.5), BattleSide::Right);
    }

    #[test]
    fn test_draw_weights_sides_asymmetrically() {
        let scores = BattleScores {
            similarity: 0.0,
            left: 1.0,
            right: 3.0,
        };
        // 1.0 * 0.8 > 3.0 * 0.2
        assert_eq!(scores.decide(0.8), BattleSide::Left);
        // 1.0 * 0.7 < 3.0 * 0.3
        assert_eq!(scores.decide(0.7), BattleSide::Right);
        assert_eq!(scores.decide(0.0), BattleSide::Right);
    }

    #[test]
    fn test_scores_include_similarity() {
        let a = BattleEntity::new(1, vec![1.0, 0.0], 10.0, 0.0);
        let b = BattleEntity::new(2, vec![0.0, 1.0], 0.0, 10.0);
        let scores = BattleScores::compute(&a, &b).unwrap();
        assert!(scores.similarity.abs() < 1e-6);
        assert!((scores.left - 6.0).abs() < 1e-5);
        assert!((scores.right - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_fight_mutates_only_loser() {
        let left = BattleEntity::new(1, vec![1.0, 2.0], 9.0, 9.0);
        let right = BattleEntity::new(2, vec![2.0, 1.0], 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(11);

        let mutation = Mutation::new(DEFAULT_MUTATION_STD_DEV).unwrap();

        let outcome = fight(0, &left, &right, &mut rng, Some(0.5), &mutation).unwrap();
        assert_eq!(outcome.winner, left);
        assert_eq!(outcome.record.winner_id(), 1);
        assert_eq!(outcome.record.loser_id(), 2);
        assert_ne!(outcome.record.loser, right);
        assert_eq!(outcome.record.draw, 0.5);
    }

    #[test]
    fn test_fight_zero_magnitude() {
        let left = BattleEntity::new(1, vec![0.0, 0.0], 1.0, 1.0);
        let right = BattleEntity::new(2, vec![1.0, 1.0], 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let mutation = Mutation::new(DEFAULT_MUTATION_STD_DEV).unwrap();
        let err = fight(0, &left, &right, &mut rng, None, &mutation).unwrap_err();
        assert_eq!(err, ArenaError::ZeroMagnitude);
    }

    #[test]
    fn test_scores_reject_overflowing_power() {
        let left = BattleEntity::new(1, vec![1.0, 1.0], f32::MAX, f32::MAX);
        let right = BattleEntity::new(2, vec![1.0, 1.0], 1.0, 1.0);
        assert!(matches!(
            BattleScores::compute(&left, &right),
            Err(ArenaError::InvalidInput(_))
        ));
    }
}
