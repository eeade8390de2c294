//! Road-bound cyclists.
//!
//! Each tick a bicycle at `(x, y)` tries to move to
//! `((x + speed) mod size, y)`: it rides along the row it is on and
//! re-enters from the opposite edge. The move is committed only when the
//! target cell is road. Otherwise the bicycle waits where it is. Several
//! bicycles may end up on the same cell; there is no collision handling.

use crate::movement::{Advance, MoveOutcome};
use serde::{Deserialize, Serialize};
use spoke_core::{AgentId, AgentKind, Coord};
use spoke_grid::bounds::wrap_axis;
use spoke_grid::GridState;

/// A cyclist advancing `speed` cells per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bicycle {
    /// Cells travelled per tick along the road axis.
    pub speed: u32,
}

impl Bicycle {
    /// Create a bicycle with the given speed.
    pub fn new(speed: u32) -> Self {
        Self { speed }
    }

    /// The cell this bicycle would try to enter from `from` on a
    /// `size × size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn target(&self, from: Coord, size: u32) -> Coord {
        Coord::new(wrap_axis(from.x, self.speed, size), from.y)
    }
}

impl Default for Bicycle {
    fn default() -> Self {
        Self { speed: 1 }
    }
}

impl Advance for Bicycle {
    fn kind(&self) -> AgentKind {
        AgentKind::Bicycle
    }

    fn advance(&self, id: AgentId, grid: &mut GridState) -> MoveOutcome {
        let Some(from) = grid.position(id) else {
            return MoveOutcome::Stationary;
        };
        let target = self.target(from, grid.size());
        if grid.move_to(id, target) {
            MoveOutcome::Moved { from, to: target }
        } else {
            tracing::trace!(agent = %id, at = %from, %target, "bicycle blocked");
            MoveOutcome::Blocked { at: from, target }
        }
    }
}
