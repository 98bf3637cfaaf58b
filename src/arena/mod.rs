//! Tournament arena
//!
//! Runs multi-round tournaments over a population of [`BattleEntity`]:
//! - Pairs by position `(0,1), (2,3), ...`; an odd last warrior gets a bye
//! - All battles of a round run in parallel, one rayon task per pair
//! - Each pair draws from its own generator seeded from `(seed, round, pair)`
//! - Workers return owned results; only the coordinator writes the roster
//!
//! ```text
//! Empty ──add──▶ Populated ──run──▶ RoundInProgress ──▶ RoundComplete ──▶ Finished
//!                                         ▲                   │
//!                                         └───── next round ──┘
//! ```

pub mod battle;
pub mod entity;
pub mod evolution;

pub use battle::{BattleRecord, BattleScores, BattleSide};
pub use entity::BattleEntity;
pub use evolution::Mutation;

use crate::config::ArenaConfig;
use crate::error::{ArenaError, Result};
use crate::math;
use battle::BattleOutcome;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Lifecycle of an arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaState {
    Empty,
    Populated,
    RoundInProgress { round: usize },
    RoundComplete { round: usize },
    Finished { rounds: usize },
}

/// Result of one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number over the arena's lifetime
    pub round: usize,
    pub entrants: usize,
    pub survivors: usize,
    /// Battles in pair order
    pub battles: Vec<BattleRecord>,
    /// Warrior advanced without a battle
    pub bye: Option<u64>,
}

/// Result of [`TournamentArena::run_tournament`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub seed: u64,
    pub rounds: Vec<RoundReport>,
    pub survivors: usize,
}

impl TournamentReport {
    /// Roster size before the first round, then after each round
    pub fn roster_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.rounds.first().map(|r| r.entrants).into_iter().collect();
        sizes.extend(self.rounds.iter().map(|r| r.survivors));
        sizes
    }
}

struct ArenaInner {
    warriors: Vec<BattleEntity>,
    dims: Option<usize>,
    state: ArenaState,
    rounds_completed: usize,
    history: Vec<RoundReport>,
}

/// Concurrent tournament engine
pub struct TournamentArena {
    seed: u64,
    fixed_draw: Option<f32>,
    mutation: Mutation,
    pool: Option<rayon::ThreadPool>,
    inner: RwLock<ArenaInner>,
}

impl TournamentArena {
    /// Create an empty arena
    pub fn new(config: ArenaConfig) -> Result<Self> {
        config.validate()?;
        let mutation = Mutation::new(config.mutation_std_dev)?;

        let pool = match config.worker_threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("arena-battle-{}", i))
                    .build()
                    .map_err(|e| ArenaError::config(format!("battle pool: {}", e)))?,
            ),
            None => None,
        };

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, workers = ?config.worker_threads, "Arena created");

        Ok(Self {
            seed,
            fixed_draw: config.fixed_draw,
            mutation,
            pool,
            inner: RwLock::new(ArenaInner {
                warriors: Vec::new(),
                dims: None,
                state: ArenaState::Empty,
                rounds_completed: 0,
                history: Vec::new(),
            }),
        })
    }

    /// Add a warrior to the population
    pub fn add_warrior(&self, warrior: BattleEntity) -> Result<()> {
        if warrior.values().is_empty() {
            return Err(ArenaError::invalid_input(format!(
                "warrior {} has no values",
                warrior.id()
            )));
        }

        math::check_finite(warrior.values())?;
        if !warrior.strength.is_finite() || !warrior.agility.is_finite() {
            return Err(ArenaError::invalid_input(format!(
                "warrior {} has non-finite strength or agility",
                warrior.id()
            )));
        }

        let mut inner = self.inner.write();
        let dims = inner.dims;
        match dims {
            Some(dims) => math::check_dims(dims, warrior.dims())?,
            None => inner.dims = Some(warrior.dims()),
        }
        inner.warriors.push(warrior);
        inner.state = ArenaState::Populated;
        Ok(())
    }

    /// Run `num_rounds` rounds back to back
    ///
    /// Blocks until every round is complete. Callers see the roster either
    /// before or after a round, never in between. The write lock is held for
    /// the whole run, so `current_roster`, `add_warrior` and the other
    /// accessors wait until the tournament returns.
    pub fn run_tournament(&self, num_rounds: usize) -> Result<TournamentReport> {
        let mut inner = self.inner.write();
        if inner.warriors.is_empty() {
            return Err(ArenaError::EmptyPopulation);
        }

        let mut rounds = Vec::with_capacity(num_rounds);
        for _ in 0..num_rounds {
            rounds.push(self.play_round(&mut inner)?);
        }
        inner.state = ArenaState::Finished {
            rounds: rounds.len(),
        };

        Ok(TournamentReport {
            seed: self.seed,
            survivors: inner.warriors.len(),
            rounds,
        })
    }

    /// Run a single round
    pub fn run_round(&self) -> Result<RoundReport> {
        let mut inner = self.inner.write();
        if inner.warriors.is_empty() {
            return Err(ArenaError::EmptyPopulation);
        }
        self.play_round(&mut inner)
    }

    fn play_round(&self, inner: &mut ArenaInner) -> Result<RoundReport> {
        let round = inner.rounds_completed + 1;
        let entrants = inner.warriors.len();
        let pairs = entrants / 2;
        inner.state = ArenaState::RoundInProgress { round };
        info!(round, entrants, "Round {} of the tournament", round);

        let warriors = &inner.warriors;
        let results: Result<Vec<BattleOutcome>> = self.install(|| {
            (0..pairs)
                .into_par_iter()
                .map(|pair| {
                    let mut rng = StdRng::seed_from_u64(derive_seed(
                        self.seed,
                        round as u64,
                        pair as u64,
                    ));
                    battle::fight(
                        pair,
                        &warriors[2 * pair],
                        &warriors[2 * pair + 1],
                        &mut rng,
                        self.fixed_draw,
                        &self.mutation,
                    )
                })
                .collect()
        });

        let outcomes = match results {
            Ok(outcomes) => outcomes,
            Err(e) => {
                warn!(round, error = %e, "Round aborted, roster unchanged");
                inner.state = match inner.rounds_completed {
                    0 => ArenaState::Populated,
                    done => ArenaState::RoundComplete { round: done },
                };
                return Err(e);
            }
        };

        let bye = if entrants % 2 == 1 {
            inner.warriors.pop()
        } else {
            None
        };

        let mut roster = Vec::with_capacity(pairs + 1);
        let mut battles = Vec::with_capacity(pairs);
        for outcome in outcomes {
            roster.push(outcome.winner);
            battles.push(outcome.record);
        }
        let bye_id = bye.as_ref().map(BattleEntity::id);
        roster.extend(bye);

        inner.warriors = roster;
        inner.rounds_completed = round;
        inner.state = ArenaState::RoundComplete { round };

        let report = RoundReport {
            round,
            entrants,
            survivors: inner.warriors.len(),
            battles,
            bye: bye_id,
        };
        info!(round, survivors = report.survivors, "{} warriors remain", report.survivors);
        inner.history.push(report.clone());
        Ok(report)
    }

    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Snapshot of the current population in roster order
    pub fn current_roster(&self) -> Vec<BattleEntity> {
        self.inner.read().warriors.clone()
    }

    /// Every round played so far
    pub fn history(&self) -> Vec<RoundReport> {
        self.inner.read().history.clone()
    }

    pub fn state(&self) -> ArenaState {
        self.inner.read().state
    }

    /// Base seed; an arena built with the same seed replays identically
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.inner.read().warriors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().warriors.is_empty()
    }
}

/// Seed for the generator of one pair in one round (splitmix64 finalizer)
pub fn derive_seed(base: u64, round: u64, pair: u64) -> u64 {
    let mut z = base
        .wrapping_add(round.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(pair.wrapping_mul(0xD1B5_4A32_D192_ED03));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
