//! Stationary pedestrians.

use crate::movement::{Advance, MoveOutcome};
use serde::{Deserialize, Serialize};
use spoke_core::{AgentId, AgentKind};
use spoke_grid::GridState;

/// A pedestrian. Placed once, never moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person;

impl Advance for Person {
    fn kind(&self) -> AgentKind {
        AgentKind::Person
    }

    fn is_mobile(&self) -> bool {
        false
    }

    fn advance(&self, _id: AgentId, _grid: &mut GridState) -> MoveOutcome {
        MoveOutcome::Stationary
    }
}
