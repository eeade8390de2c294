//! Strongly-typed identifiers and the [`Coord`] value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an agent for the lifetime of a simulation run.
///
/// Agents are created once during initialization and assigned sequential
/// IDs. `AgentId(n)` is the n-th agent in the engine's agent collection.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Zero after initialization; incremented each time the simulation
/// advances one step.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A cell on the square grid.
///
/// `x` runs along the road axis (columns), `y` across it (rows).
/// Coordinates carry no size information; bounds are checked by the
/// grid that receives them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Coord {
    /// Construct a coordinate from its components.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies inside a `size × size` grid.
    pub fn within(self, size: u32) -> bool {
        self.x < size && self.y < size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// The variant of an agent.
///
/// Persons never move; bicycles advance along the road each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// A stationary pedestrian.
    Person,
    /// A road-bound cyclist.
    Bicycle,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::Bicycle => write!(f, "bicycle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tick_next_increments() {
        assert_eq!(TickId(0).next(), TickId(1));
        assert_eq!(TickId(41).next().next(), TickId(43));
    }

    #[test]
    fn coord_display_matches_tuple_form() {
        assert_eq!(Coord::new(19, 10).to_string(), "(19, 10)");
    }

    #[test]
    fn coord_ordering_is_x_major() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
    }

    proptest! {
        #[test]
        fn within_agrees_with_component_bounds(x in 0u32..64, y in 0u32..64, size in 1u32..64) {
            let c = Coord::new(x, y);
            prop_assert_eq!(c.within(size), x < size && y < size);
        }
    }
}
