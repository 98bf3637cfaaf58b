//! Shared test utilities for vector arena testing
//!
//! This module provides:
//! - Seeded vector and warrior generation
//! - Arena construction helpers

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vector_arena::{ArenaConfig, BattleEntity, TournamentArena};

/// Generate a deterministic vector in `[-1, 1)^dims` based on seed
pub fn seeded_vector(dims: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..dims).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect()
}

/// Generate a deterministic warrior with strictly positive coordinates
pub fn seeded_warrior(id: u64, dims: usize, seed: u64) -> BattleEntity {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..dims).map(|_| rng.gen::<f32>() * 10.0 + 0.1).collect();
    BattleEntity::new(id, values, rng.gen::<f32>() * 10.0, rng.gen::<f32>() * 10.0)
}

/// Arena with `count` seeded warriors
pub fn populated_arena(config: ArenaConfig, count: u64, dims: usize) -> TournamentArena {
    let arena = TournamentArena::new(config).unwrap();
    for id in 0..count {
        arena.add_warrior(seeded_warrior(id, dims, id * 31 + 7)).unwrap();
    }
    arena
}

/// Ids of a roster in order
pub fn ids(roster: &[BattleEntity]) -> Vec<u64> {
    roster.iter().map(|w| w.id()).collect()
}
