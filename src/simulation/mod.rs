//! Demo flows driven by the binary
//!
//! Provides:
//! - A battle simulation: random warriors, a multi-round tournament, and the
//!   roster before and after
//! - A store walkthrough: three records and one nearest-neighbor query

use crate::arena::{BattleEntity, TournamentArena, TournamentReport};
use crate::config::{ArenaConfig, SimulationConfig};
use crate::error::{ArenaError, Result};
use crate::vectors::{VectorRecord, VectorStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Results from a battle simulation
#[derive(Debug, Clone, Serialize)]
pub struct BattleSimulationResults {
    pub initial_roster: Vec<BattleEntity>,
    pub final_roster: Vec<BattleEntity>,
    pub report: TournamentReport,
    #[serde(skip)]
    pub duration: Duration,
}

impl BattleSimulationResults {
    /// Print results in a formatted way
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                  VECTOR BATTLE ARENA RESULTS                 ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ Seed:                 {:>20}                   ║", self.report.seed);
        println!("║ Rounds:               {:>10}                             ║", self.report.rounds.len());
        println!("║ Survivors:            {:>10}                             ║", self.report.survivors);
        println!("║ Duration:             {:>10.2?}                         ║", self.duration);
        println!("╚══════════════════════════════════════════════════════════════╝");

        println!("\nInitial warriors:");
        print_roster(&self.initial_roster);

        for round in &self.report.rounds {
            println!(
                "\nRound {}: {} warriors entered, {} remain",
                round.round, round.entrants, round.survivors
            );
            for battle in &round.battles {
                println!(
                    "  #{} vs #{} -> #{} wins (similarity {:.3}, draw {:.3})",
                    battle.left_id,
                    battle.right_id,
                    battle.winner_id(),
                    battle.similarity,
                    battle.draw
                );
            }
            if let Some(id) = round.bye {
                println!("  #{} advances without a battle", id);
            }
        }

        println!("\nFinal warriors:");
        print_roster(&self.final_roster);
    }
}

/// Print one line per warrior
pub fn print_roster(roster: &[BattleEntity]) {
    for warrior in roster {
        println!(
            "Warrior ID: {}, Strength: {:.3}, Agility: {:.3}, Power: {:.3}",
            warrior.id(),
            warrior.strength,
            warrior.agility,
            warrior.power()
        );
        println!("Values: {}", format_values(warrior.values()));
    }
}

/// Print one line per stored record
pub fn print_records(records: &[VectorRecord]) {
    for record in records {
        println!("ID: {} Values: {}", record.id, format_values(&record.values));
    }
}

fn format_values(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate `count` warriors with values, strength and agility in `[0, range)`
pub fn generate_warriors<R: Rng>(
    rng: &mut R,
    count: usize,
    dims: usize,
    range: f32,
) -> Vec<BattleEntity> {
    (0..count)
        .map(|i| {
            let values: Vec<f32> = (0..dims).map(|_| rng.gen::<f32>() * range).collect();
            let strength = rng.gen::<f32>() * range;
            let agility = rng.gen::<f32>() * range;
            BattleEntity::new(i as u64, values, strength, agility)
        })
        .collect()
}

/// Battle simulation runner
pub struct BattleSimulation {
    arena_config: ArenaConfig,
    config: SimulationConfig,
}

impl BattleSimulation {
    pub fn new(arena_config: ArenaConfig, config: SimulationConfig) -> Self {
        Self {
            arena_config,
            config,
        }
    }

    /// Populate an arena and run the tournament
    pub fn run(&self) -> Result<BattleSimulationResults> {
        if self.config.dimensions == 0 {
            return Err(ArenaError::invalid_input("dimensions must be positive"));
        }
        let range = self.config.attribute_range;
        if !range.is_finite() || range <= 0.0 {
            return Err(ArenaError::invalid_input("attribute_range must be positive"));
        }

        let start_time = Instant::now();
        info!(config = ?self.config, "Starting battle simulation");

        let arena = TournamentArena::new(self.arena_config.clone())?;

        // Population derives from the arena seed so one seed replays the whole run
        let mut rng = StdRng::seed_from_u64(arena.seed());
        for warrior in generate_warriors(
            &mut rng,
            self.config.warriors,
            self.config.dimensions,
            self.config.attribute_range,
        ) {
            arena.add_warrior(warrior)?;
        }

        let initial_roster = arena.current_roster();
        let report = arena.run_tournament(self.config.rounds)?;
        let final_roster = arena.current_roster();

        Ok(BattleSimulationResults {
            initial_roster,
            final_roster,
            report,
            duration: start_time.elapsed(),
        })
    }
}

/// Results from the store walkthrough
#[derive(Debug, Clone, Serialize)]
pub struct StoreDemoResults {
    pub records: Vec<VectorRecord>,
    pub query: Vec<f32>,
    pub closest: Option<VectorRecord>,
}

impl StoreDemoResults {
    pub fn print_summary(&self) {
        println!("All vectors:");
        print_records(&self.records);
        match &self.closest {
            Some(record) => println!("Closest vector to query: ID = {}", record.id),
            None => println!("No vectors in the store."),
        }
    }
}

/// Store three records and query for the nearest one
pub fn run_store_demo(query: Vec<f32>) -> Result<StoreDemoResults> {
    let mut store = VectorStore::new();
    store.add_vector(VectorRecord::new(1, vec![1.0, 2.0, 3.0]))?;
    store.add_vector(VectorRecord::new(2, vec![4.0, 5.0, 6.0]))?;
    store.add_vector(VectorRecord::new(3, vec![7.0, 8.0, 9.0]))?;

    let closest = store.find_closest_vector(&query)?.cloned();
    info!(closest = ?closest.as_ref().map(|r| r.id), "Store query complete");

    Ok(StoreDemoResults {
        records: store.records().to_vec(),
        query,
        closest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_warriors_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let warriors = generate_warriors(&mut rng, 16, 3, 10.0);
        assert_eq!(warriors.len(), 16);
        for (i, w) in warriors.iter().enumerate() {
            assert_eq!(w.id(), i as u64);
            assert_eq!(w.dims(), 3);
            assert!(w.values().iter().all(|v| (0.0..=10.0).contains(v)));
            assert!((0.0..=10.0).contains(&w.strength));
            assert!((0.0..=10.0).contains(&w.agility));
        }
    }

    #[test]
    fn test_default_simulation() {
        let sim = BattleSimulation::new(ArenaConfig::seeded(2024), SimulationConfig::default());
        let results = sim.run().unwrap();

        assert_eq!(results.initial_roster.len(), 16);
        assert_eq!(results.report.roster_sizes(), vec![16, 8, 4, 2, 1]);
        assert_eq!(results.final_roster.len(), 1);
    }

    #[test]
    fn test_simulation_replays_with_seed() {
        let run = || {
            BattleSimulation::new(ArenaConfig::seeded(77), SimulationConfig::default())
                .run()
                .unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.initial_roster, b.initial_roster);
        assert_eq!(a.report, b.report);
        assert_eq!(a.final_roster, b.final_roster);
    }

    #[test]
    fn test_store_demo() {
        let results = run_store_demo(vec![2.0, 3.0, 4.0]).unwrap();
        assert_eq!(results.records.len(), 3);
        assert_eq!(results.closest.map(|r| r.id), Some(1));

        assert!(matches!(
            run_store_demo(vec![2.0, 3.0]),
            Err(ArenaError::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }
}
