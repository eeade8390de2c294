//! The agent record stored by the engine.

use crate::bicycle::Bicycle;
use crate::movement::{Advance, MoveOutcome};
use crate::person::Person;
use serde::{Deserialize, Serialize};
use spoke_core::{AgentId, AgentKind};
use spoke_grid::GridState;

/// One of the built-in agent behaviours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// See [`Person`].
    Person(Person),
    /// See [`Bicycle`].
    Bicycle(Bicycle),
}

impl Advance for Behavior {
    fn kind(&self) -> AgentKind {
        match self {
            Self::Person(p) => p.kind(),
            Self::Bicycle(b) => b.kind(),
        }
    }

    fn is_mobile(&self) -> bool {
        match self {
            Self::Person(p) => p.is_mobile(),
            Self::Bicycle(b) => b.is_mobile(),
        }
    }

    fn advance(&self, id: AgentId, grid: &mut GridState) -> MoveOutcome {
        match self {
            Self::Person(p) => p.advance(id, grid),
            Self::Bicycle(b) => b.advance(id, grid),
        }
    }
}

/// An agent: a stable identity plus its behaviour.
///
/// Agents do not store their position; [`GridState`] holds it, keyed by
/// [`id`](Agent::id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    behavior: Behavior,
}

impl Agent {
    /// A stationary person.
    pub fn person(id: AgentId) -> Self {
        Self {
            id,
            behavior: Behavior::Person(Person),
        }
    }

    /// A bicycle riding `speed` cells per tick.
    pub fn bicycle(id: AgentId, speed: u32) -> Self {
        Self {
            id,
            behavior: Behavior::Bicycle(Bicycle::new(speed)),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Agent kind.
    pub fn kind(&self) -> AgentKind {
        self.behavior.kind()
    }

    /// Cells per tick. Always 0 for persons.
    pub fn speed(&self) -> u32 {
        match self.behavior {
            Behavior::Person(_) => 0,
            Behavior::Bicycle(b) => b.speed,
        }
    }

    /// The agent's behaviour.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Whether stepping this agent can change the grid.
    pub fn is_mobile(&self) -> bool {
        self.behavior.is_mobile()
    }

    /// Apply one tick of behaviour.
    pub fn advance(&self, grid: &mut GridState) -> MoveOutcome {
        self.behavior.advance(self.id, grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoke_core::Coord;

    #[test]
    fn constructors_set_kind_and_speed() {
        let p = Agent::person(AgentId(1));
        assert_eq!(p.kind(), AgentKind::Person);
        assert_eq!(p.speed(), 0);
        assert!(!p.is_mobile());

        let b = Agent::bicycle(AgentId(0), 3);
        assert_eq!(b.kind(), AgentKind::Bicycle);
        assert_eq!(b.speed(), 3);
        assert!(b.is_mobile());
    }

    #[test]
    fn advance_dispatches_on_behaviour() {
        let mut grid = GridState::new(5, |c| c.y == 2, &[]).unwrap();
        grid.place(AgentId(0), Coord::new(0, 2)).unwrap();
        grid.place(AgentId(1), Coord::new(0, 2)).unwrap();

        let bike = Agent::bicycle(AgentId(0), 2);
        let person = Agent::person(AgentId(1));
        assert!(bike.advance(&mut grid).is_moved());
        assert_eq!(person.advance(&mut grid), MoveOutcome::Stationary);

        assert_eq!(grid.position(AgentId(0)), Some(Coord::new(2, 2)));
        assert_eq!(grid.position(AgentId(1)), Some(Coord::new(0, 2)));
    }
}
