//! Immutable per-tick view of the simulation.
//!
//! A [`Snapshot`] is an owned value: positions are copied out of the
//! grid, while the road mask, station list, and agent kinds (fixed for
//! the whole run) are shared by `Arc`. Holding a snapshot never blocks
//! the engine, and nothing a consumer does with it reaches back into
//! engine state.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use spoke_core::{AgentId, AgentKind, Coord, OutOfBoundsError, TickId};
use spoke_grid::{GridState, RoadMask};

/// State of the world at the end of one tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    time_step: TickId,
    road_mask: Arc<RoadMask>,
    positions: IndexMap<AgentId, Coord>,
    stations: Arc<[Coord]>,
    kinds: Arc<IndexMap<AgentId, AgentKind>>,
}

impl Snapshot {
    pub(crate) fn capture(
        time_step: TickId,
        grid: &GridState,
        kinds: &Arc<IndexMap<AgentId, AgentKind>>,
    ) -> Self {
        Self {
            time_step,
            road_mask: Arc::clone(grid.road_mask()),
            positions: grid.positions().clone(),
            stations: Arc::clone(grid.stations()),
            kinds: Arc::clone(kinds),
        }
    }

    /// Tick at which this snapshot was taken (0 = initial placement).
    pub fn time_step(&self) -> TickId {
        self.time_step
    }

    /// Grid side length.
    pub fn size(&self) -> u32 {
        self.road_mask.size()
    }

    /// The road mask.
    pub fn road_mask(&self) -> &RoadMask {
        &self.road_mask
    }

    /// Whether `coord` is road.
    pub fn is_road(&self, coord: Coord) -> Result<bool, OutOfBoundsError> {
        self.road_mask.is_road(coord)
    }

    /// Every agent position, in agent order.
    pub fn positions(&self) -> &IndexMap<AgentId, Coord> {
        &self.positions
    }

    /// Position of one agent.
    pub fn position(&self, agent: AgentId) -> Option<Coord> {
        self.positions.get(&agent).copied()
    }

    /// Station coordinates in configuration order.
    pub fn stations(&self) -> &[Coord] {
        &self.stations
    }

    /// Kind of `agent`, if it exists.
    pub fn kind(&self, agent: AgentId) -> Option<AgentKind> {
        self.kinds.get(&agent).copied()
    }

    /// Positions of agents of one kind, in agent order.
    pub fn positions_of(&self, kind: AgentKind) -> impl Iterator<Item = (AgentId, Coord)> + '_ {
        self.positions
            .iter()
            .filter(move |(id, _)| self.kinds.get(*id) == Some(&kind))
            .map(|(&id, &coord)| (id, coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoke_grid::RoadLayout;

    fn sample() -> Snapshot {
        let mut grid = GridState::from_mask(
            RoadMask::from_layout(6, &RoadLayout::Row(3)).unwrap(),
            &[Coord::new(1, 1)],
        )
        .unwrap();
        grid.place(AgentId(0), Coord::new(2, 3)).unwrap();
        grid.place(AgentId(1), Coord::new(4, 0)).unwrap();
        let kinds: IndexMap<_, _> = [
            (AgentId(0), AgentKind::Bicycle),
            (AgentId(1), AgentKind::Person),
        ]
        .into_iter()
        .collect();
        Snapshot::capture(TickId(5), &grid, &Arc::new(kinds))
    }

    #[test]
    fn capture_copies_grid_state() {
        let snap = sample();
        assert_eq!(snap.time_step(), TickId(5));
        assert_eq!(snap.size(), 6);
        assert_eq!(snap.stations(), &[Coord::new(1, 1)]);
        assert_eq!(snap.position(AgentId(1)), Some(Coord::new(4, 0)));
        assert!(snap.is_road(Coord::new(0, 3)).unwrap());
    }

    #[test]
    fn positions_of_filters_by_kind() {
        let snap = sample();
        let bikes: Vec<_> = snap.positions_of(AgentKind::Bicycle).collect();
        assert_eq!(bikes, vec![(AgentId(0), Coord::new(2, 3))]);
        let people: Vec<_> = snap.positions_of(AgentKind::Person).collect();
        assert_eq!(people, vec![(AgentId(1), Coord::new(4, 0))]);
    }

    #[test]
    fn serializes_render_contract() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["time_step"], 5);
        assert_eq!(json["positions"]["0"]["x"], 2);
        assert_eq!(json["positions"]["0"]["y"], 3);
        assert_eq!(json["stations"][0]["x"], 1);
        assert_eq!(json["kinds"]["1"], "person");
        assert_eq!(json["road_mask"]["size"], 6);
    }
}
