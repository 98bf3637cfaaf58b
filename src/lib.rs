//! # Vector Arena
//!
//! An exact nearest-neighbor vector store and a concurrent tournament
//! evolution engine sharing one set of vector-math primitives.
//!
//! ## Architecture
//!
//! ```text
//! VectorStore (exact Euclidean search)     TournamentArena (rounds of battles)
//!     │                                        ├── battle     (outcome rule)
//!     │                                        ├── evolution  (Gaussian mutation)
//!     │                                        └── rayon      (one task per pair)
//!     └──────────────┬─────────────────────────┘
//!                    ▼
//!            math (distance, cosine)
//! ```
//!
//! ## Features
//!
//! - **Exact search**: brute-force scan, ties resolve to the first inserted record
//! - **Parallel rounds**: every pair in a round battles concurrently
//! - **Seed replay**: per-pair generators derived from one base seed
//! - **Explicit errors**: dimension mismatches and zero-norm vectors are rejected
//!
//! ## Quick Start
//!
//! ```ignore
//! use vector_arena::{ArenaConfig, BattleEntity, TournamentArena};
//!
//! let arena = TournamentArena::new(ArenaConfig::seeded(42))?;
//! arena.add_warrior(BattleEntity::new(0, vec![1.0, 2.0, 3.0], 5.0, 4.0))?;
//! arena.add_warrior(BattleEntity::new(1, vec![3.0, 2.0, 1.0], 4.0, 6.0))?;
//! let report = arena.run_tournament(1)?;
//! let survivors = arena.current_roster();
//! ```

pub mod arena;
pub mod config;
pub mod defaults;
pub mod error;
pub mod math;
pub mod simulation;
pub mod vectors;

pub use arena::{ArenaState, BattleEntity, RoundReport, TournamentArena, TournamentReport};
pub use config::{ArenaConfig, Config, SimulationConfig};
pub use error::{ArenaError, Result};
pub use vectors::{VectorRecord, VectorStore};
