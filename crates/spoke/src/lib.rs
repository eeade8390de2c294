//! Spoke: a small grid traffic simulation.
//!
//! Persons stand still on a square grid while bicycles ride along a road
//! lane, wrapping around the grid edge. This is the facade crate that
//! re-exports the public API from the Spoke sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use spoke::prelude::*;
//!
//! let config = SimConfig {
//!     size: 10,
//!     agents_person: 2,
//!     agents_bicycle: 3,
//!     ..SimConfig::default()
//! };
//! let mut engine = SimulationEngine::from_config(config).unwrap();
//! let frames = engine.run_collect(4).unwrap();
//!
//! assert_eq!(frames.len(), 4);
//! assert_eq!(frames[3].time_step(), TickId(4));
//! for (_, coord) in frames[3].positions_of(AgentKind::Bicycle) {
//!     assert!(frames[3].is_road(coord).unwrap());
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spoke-core` | IDs, coordinates, error types |
//! | [`grid`] | `spoke-grid` | Road masks and agent occupancy |
//! | [`agents`] | `spoke-agents` | Person and bicycle behaviour |
//! | [`engine`] | `spoke-engine` | Configuration, stepping, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`spoke-core`).
pub use spoke_core as types;

/// Road masks and occupancy (`spoke-grid`).
///
/// [`grid::GridState`] owns agent positions; [`grid::RoadMask`] says which
/// cells bicycles may enter.
pub use spoke_grid as grid;

/// Agent behaviour (`spoke-agents`).
pub use spoke_agents as agents;

/// Simulation engine (`spoke-engine`).
///
/// [`engine::SimulationEngine`] drives the lifecycle; each tick yields an
/// [`engine::Snapshot`].
pub use spoke_engine as engine;

/// Common imports for typical Spoke usage.
///
/// ```rust
/// use spoke::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use spoke_core::{AgentId, AgentKind, Coord, TickId};

    // Errors
    pub use spoke_core::{ConfigError, OutOfBoundsError, SimError};

    // Grid
    pub use spoke_grid::{GridState, RoadLayout, RoadMask};

    // Agents
    pub use spoke_agents::{Advance, Agent, MoveOutcome};

    // Engine
    pub use spoke_engine::{
        snapshot_hash, EngineState, SimConfig, SimulationEngine, Snapshot, StepMetrics,
    };
}
