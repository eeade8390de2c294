//! Error types for the Spoke simulation.
//!
//! Organized by subsystem: configuration ([`ConfigError`]), grid bounds
//! ([`OutOfBoundsError`]), and the engine-level umbrella ([`SimError`]).
//! A blocked bicycle move is not represented here; it is an ordinary
//! outcome of stepping, not a failure.

use crate::id::{AgentId, Coord};
use thiserror::Error;

/// Errors detected while validating a configuration or building a grid.
///
/// Always surfaced before any simulation state is created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Grid side length is zero.
    #[error("grid size must be positive, got {size}")]
    InvalidSize {
        /// The configured size.
        size: u32,
    },
    /// Grid side length is below the engine minimum of 2.
    #[error("grid size must be at least 2, got {size}")]
    GridTooSmall {
        /// The configured size.
        size: u32,
    },
    /// A station lies outside the grid.
    #[error("station {coord} lies outside the {size}x{size} grid")]
    StationOutOfBounds {
        /// The offending station.
        coord: Coord,
        /// Grid side length.
        size: u32,
    },
    /// A road lane index lies outside the grid.
    #[error("road lane {lane} lies outside the {size}x{size} grid")]
    RoadLaneOutOfBounds {
        /// The offending lane index.
        lane: u32,
        /// Grid side length.
        size: u32,
    },
    /// An explicitly listed road cell lies outside the grid.
    #[error("road cell {coord} lies outside the {size}x{size} grid")]
    RoadCellOutOfBounds {
        /// The offending cell.
        coord: Coord,
        /// Grid side length.
        size: u32,
    },
    /// A road mask could not be materialized as a `size × size` matrix.
    #[error("road mask must be {size}x{size}, got {rows} rows (first mismatched width {width})")]
    RoadMaskShape {
        /// Expected side length.
        size: u32,
        /// Number of rows supplied.
        rows: usize,
        /// Width of the first row that did not match, or of row 0.
        width: usize,
    },
    /// Total agent count does not fit in an [`AgentId`].
    #[error("agent count {count} exceeds u32::MAX")]
    TooManyAgents {
        /// Requested number of agents.
        count: usize,
    },
    /// A configuration document failed to parse.
    #[error("failed to parse configuration: {reason}")]
    Parse {
        /// Parser diagnostic.
        reason: String,
    },
}

/// A coordinate outside the `[0, size) × [0, size)` grid.
///
/// Indicates a programming or configuration bug; never recovered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("coordinate {coord} out of bounds for {size}x{size} grid")]
pub struct OutOfBoundsError {
    /// The offending coordinate.
    pub coord: Coord,
    /// Grid side length.
    pub size: u32,
}

/// Errors returned by the simulation engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// Configuration was rejected.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    /// A coordinate fell outside the grid.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
    /// More bicycles were requested than there are road cells.
    #[error("requested {requested} bicycles but the road has only {available} cells")]
    InsufficientCapacity {
        /// Number of bicycles requested.
        requested: usize,
        /// Number of road cells available.
        available: usize,
    },
    /// An operation was invoked in a state that does not permit it.
    #[error("cannot {operation} while engine is {state}")]
    InvalidState {
        /// The rejected operation.
        operation: &'static str,
        /// Display name of the current engine state.
        state: String,
    },
    /// The agent is not part of this simulation.
    #[error("unknown agent {0}")]
    UnknownAgent(AgentId),
}
