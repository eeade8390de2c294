//! Benchmark profiles for the Spoke traffic simulation.
//!
//! - [`reference_profile`]: 100x100 grid with a full middle lane
//! - [`stress_profile`]: 1000x1000 grid with a road on every tenth row
//! - [`grid_lanes`]: road cells for evenly spaced horizontal lanes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spoke_core::Coord;
use spoke_engine::SimConfig;
use spoke_grid::RoadLayout;

/// Reference profile: 100x100 grid, one lane, 50 bicycles, 200 persons.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        size: 100,
        agents_person: 200,
        agents_bicycle: 50,
        steps: 1000,
        stations: Some(vec![Coord::new(5, 9), Coord::new(90, 40)]),
        seed,
        ..SimConfig::default()
    }
}

/// Stress profile: 1000x1000 grid, 100 lanes, 50K bicycles.
///
/// Half of the road is occupied, so most moves succeed and the step
/// cost is dominated by occupancy updates.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        size: 1000,
        agents_person: 10_000,
        agents_bicycle: 50_000,
        steps: 100,
        road_layout: Some(RoadLayout::Cells(grid_lanes(1000, 10))),
        stations: Some(Vec::new()),
        seed,
        ..SimConfig::default()
    }
}

/// Every cell of every `spacing`-th row of a `size × size` grid.
///
/// # Panics
///
/// Panics if `spacing` is zero.
pub fn grid_lanes(size: u32, spacing: u32) -> Vec<Coord> {
    assert!(spacing > 0, "spacing must be positive");
    (0..size)
        .step_by(spacing as usize)
        .flat_map(|y| (0..size).map(move |x| Coord::new(x, y)))
        .collect()
}
