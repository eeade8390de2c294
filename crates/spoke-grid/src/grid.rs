//! The authoritative grid: road mask, stations, and agent positions.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use spoke_core::{AgentId, ConfigError, Coord, OutOfBoundsError};

use crate::bounds::check_bounds;
use crate::road::RoadMask;

/// Occupancy and layout state for a square `size × size` grid.
///
/// `GridState` owns the position index only; the agents themselves live
/// in the engine. Positions are keyed by [`AgentId`] in insertion order,
/// and several agents may share a cell. The road mask and station list
/// are fixed at construction and shared by `Arc` with every snapshot.
///
/// # Examples
///
/// ```
/// use spoke_core::{AgentId, Coord};
/// use spoke_grid::GridState;
///
/// let mut grid = GridState::new(8, |c| c.y == 4, &[Coord::new(5, 1)]).unwrap();
/// grid.place(AgentId(0), Coord::new(5, 7)).unwrap();
///
/// // Row 4 is the only road; a move onto row 7 is refused.
/// assert!(!grid.move_to(AgentId(0), Coord::new(6, 7)));
/// assert!(grid.move_to(AgentId(0), Coord::new(6, 4)));
/// assert_eq!(grid.position(AgentId(0)), Some(Coord::new(6, 4)));
/// ```
#[derive(Clone, Debug)]
pub struct GridState {
    mask: Arc<RoadMask>,
    stations: Arc<[Coord]>,
    occupancy: IndexMap<AgentId, Coord>,
}

impl GridState {
    /// Create a grid from a road predicate and a station list.
    ///
    /// Fails with [`ConfigError`] if `size` is zero or any station lies
    /// outside the grid.
    pub fn new(
        size: u32,
        is_road: impl FnMut(Coord) -> bool,
        stations: &[Coord],
    ) -> Result<Self, ConfigError> {
        Self::from_mask(RoadMask::from_fn(size, is_road)?, stations)
    }

    /// Create a grid from an already materialized road mask.
    ///
    /// Duplicate stations are collapsed, keeping the first occurrence.
    pub fn from_mask(mask: RoadMask, stations: &[Coord]) -> Result<Self, ConfigError> {
        let size = mask.size();
        let mut unique = IndexSet::with_capacity(stations.len());
        for &coord in stations {
            if !coord.within(size) {
                return Err(ConfigError::StationOutOfBounds { coord, size });
            }
            unique.insert(coord);
        }
        Ok(Self {
            mask: Arc::new(mask),
            stations: unique.into_iter().collect(),
            occupancy: IndexMap::new(),
        })
    }

    /// Grid side length.
    pub fn size(&self) -> u32 {
        self.mask.size()
    }

    /// Insert or overwrite an agent's position.
    ///
    /// The road mask is not consulted: initial placement may put any
    /// agent on any in-bounds cell.
    pub fn place(&mut self, agent: AgentId, coord: Coord) -> Result<(), OutOfBoundsError> {
        let coord = check_bounds(coord, self.size())?;
        self.occupancy.insert(agent, coord);
        Ok(())
    }

    /// Whether `coord` is a road cell.
    pub fn is_road(&self, coord: Coord) -> Result<bool, OutOfBoundsError> {
        self.mask.is_road(coord)
    }

    /// Attempt to move a placed agent to `to`.
    ///
    /// The move is committed only if `to` is inside the grid and on the
    /// road. Returns `false` and leaves occupancy untouched otherwise,
    /// including when the agent has never been placed. A refused move is
    /// a normal outcome, not an error.
    pub fn move_to(&mut self, agent: AgentId, to: Coord) -> bool {
        if !matches!(self.mask.is_road(to), Ok(true)) {
            return false;
        }
        match self.occupancy.get_mut(&agent) {
            Some(pos) => {
                *pos = to;
                true
            }
            None => {
                tracing::trace!(%agent, %to, "move requested for unplaced agent");
                false
            }
        }
    }

    /// The current position of `agent`, if placed.
    pub fn position(&self, agent: AgentId) -> Option<Coord> {
        self.occupancy.get(&agent).copied()
    }

    /// All agent positions at the current instant, in placement order.
    pub fn positions(&self) -> &IndexMap<AgentId, Coord> {
        &self.occupancy
    }

    /// Agents currently on `coord`, in placement order.
    pub fn occupants(&self, coord: Coord) -> SmallVec<[AgentId; 4]> {
        self.occupancy
            .iter()
            .filter(|&(_, &c)| c == coord)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Number of placed agents.
    pub fn agent_count(&self) -> usize {
        self.occupancy.len()
    }

    /// The road mask.
    pub fn road_mask(&self) -> &Arc<RoadMask> {
        &self.mask
    }

    /// Station coordinates in configuration order.
    pub fn stations(&self) -> &Arc<[Coord]> {
        &self.stations
    }

    /// Whether `coord` is a station.
    pub fn is_station(&self, coord: Coord) -> bool {
        self.stations.contains(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road::RoadLayout;
    use proptest::prelude::*;

    fn lane_grid(size: u32, lane: u32) -> GridState {
        GridState::from_mask(
            RoadMask::from_layout(size, &RoadLayout::Row(lane)).unwrap(),
            &[],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_zero_size() {
        assert_eq!(
            GridState::new(0, |_| true, &[]).unwrap_err(),
            ConfigError::InvalidSize { size: 0 }
        );
    }

    #[test]
    fn new_rejects_station_out_of_bounds() {
        let err = GridState::new(8, |_| false, &[Coord::new(5, 9)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::StationOutOfBounds {
                coord: Coord::new(5, 9),
                size: 8
            }
        );
    }

    #[test]
    fn stations_deduplicated_in_order() {
        let grid = GridState::new(
            10,
            |_| false,
            &[Coord::new(5, 9), Coord::new(1, 1), Coord::new(5, 9)],
        )
        .unwrap();
        assert_eq!(&grid.stations()[..], &[Coord::new(5, 9), Coord::new(1, 1)]);
        assert!(grid.is_station(Coord::new(1, 1)));
        assert!(!grid.is_station(Coord::new(0, 0)));
    }

    #[test]
    fn place_ignores_road_mask() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(0), Coord::new(2, 0)).unwrap();
        assert_eq!(grid.position(AgentId(0)), Some(Coord::new(2, 0)));
    }

    #[test]
    fn place_overwrites() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(0), Coord::new(2, 0)).unwrap();
        grid.place(AgentId(0), Coord::new(3, 4)).unwrap();
        assert_eq!(grid.agent_count(), 1);
        assert_eq!(grid.position(AgentId(0)), Some(Coord::new(3, 4)));
    }

    #[test]
    fn place_out_of_bounds_fails() {
        let mut grid = lane_grid(8, 4);
        let err = grid.place(AgentId(0), Coord::new(0, 8)).unwrap_err();
        assert_eq!(err.coord, Coord::new(0, 8));
        assert_eq!(grid.agent_count(), 0);
    }

    #[test]
    fn move_onto_road_commits() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(0), Coord::new(0, 4)).unwrap();
        assert!(grid.move_to(AgentId(0), Coord::new(1, 4)));
        assert_eq!(grid.position(AgentId(0)), Some(Coord::new(1, 4)));
    }

    #[test]
    fn move_off_road_refused() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(0), Coord::new(5, 7)).unwrap();
        assert!(!grid.move_to(AgentId(0), Coord::new(6, 7)));
        assert_eq!(grid.position(AgentId(0)), Some(Coord::new(5, 7)));
    }

    #[test]
    fn move_out_of_bounds_refused() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(0), Coord::new(7, 4)).unwrap();
        assert!(!grid.move_to(AgentId(0), Coord::new(8, 4)));
        assert_eq!(grid.position(AgentId(0)), Some(Coord::new(7, 4)));
    }

    #[test]
    fn move_unplaced_agent_refused() {
        let mut grid = lane_grid(8, 4);
        assert!(!grid.move_to(AgentId(3), Coord::new(1, 4)));
        assert_eq!(grid.agent_count(), 0);
    }

    #[test]
    fn shared_cells_allowed() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(0), Coord::new(1, 4)).unwrap();
        grid.place(AgentId(1), Coord::new(0, 4)).unwrap();
        assert!(grid.move_to(AgentId(1), Coord::new(1, 4)));
        assert_eq!(
            grid.occupants(Coord::new(1, 4)).as_slice(),
            &[AgentId(0), AgentId(1)]
        );
    }

    #[test]
    fn positions_preserve_placement_order() {
        let mut grid = lane_grid(8, 4);
        grid.place(AgentId(7), Coord::new(1, 1)).unwrap();
        grid.place(AgentId(2), Coord::new(2, 2)).unwrap();
        let ids: Vec<_> = grid.positions().keys().copied().collect();
        assert_eq!(ids, vec![AgentId(7), AgentId(2)]);
    }

    proptest! {
        #[test]
        fn refused_moves_leave_position_unchanged(
            x in 0u32..16, y in 0u32..16, tx in 0u32..20, ty in 0u32..20,
        ) {
            let mut grid = lane_grid(16, 8);
            grid.place(AgentId(0), Coord::new(x, y)).unwrap();
            let before = grid.position(AgentId(0));
            let target = Coord::new(tx, ty);
            let moved = grid.move_to(AgentId(0), target);
            prop_assert_eq!(moved, target.within(16) && ty == 8);
            if moved {
                prop_assert_eq!(grid.position(AgentId(0)), Some(target));
            } else {
                prop_assert_eq!(grid.position(AgentId(0)), before);
            }
        }
    }
}
