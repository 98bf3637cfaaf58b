//! Concurrency Tests
//!
//! Tests covering:
//! - Identical results across worker pool sizes
//! - Concurrent warrior registration
//! - Readers during a running tournament

mod common;

use std::sync::Arc;
use std::thread;

use common::{populated_arena, seeded_warrior};
use vector_arena::{ArenaConfig, TournamentArena};

/// Test: Results do not depend on how many threads run the battles
#[test]
fn test_pool_size_does_not_change_results() {
    let run = |workers: Option<usize>| {
        let config = ArenaConfig {
            worker_threads: workers,
            ..ArenaConfig::seeded(0xFEED)
        };
        let arena = populated_arena(config, 64, 8);
        let report = arena.run_tournament(5).unwrap();
        (report, arena.current_roster())
    };

    let baseline = run(None);
    for workers in [1, 2, 8] {
        assert_eq!(run(Some(workers)), baseline, "workers = {}", workers);
    }
}

/// Test: Warriors added from many threads are all kept
#[test]
fn test_concurrent_add_warrior() {
    let arena = Arc::new(TournamentArena::new(ArenaConfig::seeded(9)).unwrap());
    let num_threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let arena = arena.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    let id = (t * per_thread + i) as u64;
                    arena.add_warrior(seeded_warrior(id, 4, id)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(arena.len(), num_threads * per_thread);
    let report = arena.run_tournament(3).unwrap();
    assert_eq!(report.roster_sizes(), vec![200, 100, 50, 25]);
}

/// Test: Readers only ever observe whole-round rosters
#[test]
fn test_readers_see_complete_rounds() {
    let arena = Arc::new(populated_arena(ArenaConfig::seeded(77), 128, 16));

    let reader = {
        let arena = arena.clone();
        thread::spawn(move || {
            let valid = [128usize, 64, 32, 16, 8, 4, 2, 1];
            for _ in 0..500 {
                let size = arena.current_roster().len();
                assert!(valid.contains(&size), "observed partial roster of {}", size);
            }
        })
    };

    for _ in 0..7 {
        arena.run_round().unwrap();
    }
    reader.join().unwrap();
    assert_eq!(arena.len(), 1);
}
