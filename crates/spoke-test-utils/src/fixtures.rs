//! Reusable configurations and engine setups.
//!
//! - [`lane_config`]: a grid with a single horizontal lane and no agents.
//! - [`bicycle_at`]: an initialized engine with one bicycle pinned to a cell.
//! - [`collect_hashes`]: run an engine and record one hash per tick.

use spoke_core::{AgentId, Coord};
use spoke_engine::{snapshot_hash, SimConfig, SimulationEngine};
use spoke_grid::{GridState, RoadLayout, RoadMask};

/// `size × size` grid, road on row `lane`, no agents, no stations.
pub fn lane_config(size: u32, lane: u32) -> SimConfig {
    SimConfig {
        size,
        agents_person: 0,
        agents_bicycle: 0,
        road_lane: Some(lane),
        stations: Some(Vec::new()),
        ..SimConfig::default()
    }
}

/// Default grid with no agents at all.
pub fn empty_config() -> SimConfig {
    SimConfig {
        agents_person: 0,
        agents_bicycle: 0,
        ..SimConfig::default()
    }
}

/// Default grid with the given population and seed.
pub fn populated_config(persons: usize, bicycles: usize, seed: u64) -> SimConfig {
    SimConfig {
        agents_person: persons,
        agents_bicycle: bicycles,
        seed,
        ..SimConfig::default()
    }
}

/// A bare grid with a horizontal lane, for exercising agents directly.
pub fn lane_grid(size: u32, lane: u32) -> GridState {
    let mask = RoadMask::from_layout(size, &RoadLayout::Row(lane)).expect("lane inside grid");
    GridState::from_mask(mask, &[]).expect("no stations")
}

/// An initialized engine whose only agent is a bicycle at `at`.
///
/// The bicycle is `AgentId(0)`. `at` need not be a road cell.
pub fn bicycle_at(size: u32, lane: u32, at: Coord, speed: u32) -> SimulationEngine {
    let cfg = SimConfig {
        agents_bicycle: 1,
        bicycle_speed: speed,
        ..lane_config(size, lane)
    };
    let mut engine = SimulationEngine::from_config(cfg).expect("valid fixture config");
    engine
        .place_agent(AgentId(0), at)
        .expect("fixture position inside grid");
    engine
}

/// Hash the initial snapshot and every post-tick snapshot of an `n`-tick run.
pub fn collect_hashes(engine: &mut SimulationEngine, n: u64) -> Vec<u64> {
    let mut hashes = vec![snapshot_hash(&engine.snapshot().expect("initialized engine"))];
    engine
        .run(n, |s| hashes.push(snapshot_hash(s)))
        .expect("engine accepts run");
    hashes
}
