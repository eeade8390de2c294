//! The `Advance` capability and its per-call outcome.

use spoke_core::{AgentId, AgentKind, Coord};
use spoke_grid::GridState;

/// Result of a single [`Advance::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent does not move (immobile kind, or not placed).
    Stationary,
    /// The agent moved.
    Moved {
        /// Position before the move.
        from: Coord,
        /// Position after the move.
        to: Coord,
    },
    /// The target was not road (or outside the grid); the agent waits.
    Blocked {
        /// Unchanged position.
        at: Coord,
        /// The refused target.
        target: Coord,
    },
}

impl MoveOutcome {
    /// Whether the agent's position changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Whether the move was refused.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Per-tick behaviour of an agent.
///
/// Implementations read the grid and issue at most one
/// [`GridState::move_to`] per call. They must not place or remove agents.
pub trait Advance {
    /// The kind of agent this behaviour belongs to.
    fn kind(&self) -> AgentKind;

    /// Whether `advance` can ever change the grid.
    ///
    /// The engine skips immobile agents when stepping. Defaults to `true`.
    fn is_mobile(&self) -> bool {
        true
    }

    /// Apply one tick of behaviour for the agent `id`.
    fn advance(&self, id: AgentId, grid: &mut GridState) -> MoveOutcome;
}
