//! Simulation engine for Spoke traffic worlds.
//!
//! Provides [`SimulationEngine`], which builds a [`GridState`](spoke_grid::GridState)
//! from a [`SimConfig`], places persons and bicycles with a seedable RNG,
//! and advances the world one tick at a time. After every tick a
//! [`Snapshot`] can be taken for rendering or comparison.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod hash;
pub mod metrics;
pub mod snapshot;

pub use config::{SimConfig, DEFAULT_STATION};
pub use engine::{EngineState, SimulationEngine};
pub use hash::snapshot_hash;
pub use metrics::StepMetrics;
pub use snapshot::Snapshot;
