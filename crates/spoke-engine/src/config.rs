//! Simulation configuration and validation.
//!
//! [`SimConfig`] is the builder-input for [`SimulationEngine`](crate::SimulationEngine).
//! [`validate()`](SimConfig::validate) checks structural invariants before
//! any simulation state exists; the engine calls it from `initialize()`.

use serde::{Deserialize, Serialize};
use spoke_core::{ConfigError, Coord};
use spoke_grid::{RoadLayout, RoadMask};

/// Landmark used when no stations are configured.
pub const DEFAULT_STATION: Coord = Coord::new(5, 9);

/// Complete configuration for one simulation run.
///
/// Every field has a default, so a TOML document only needs the values
/// it overrides:
///
/// ```
/// use spoke_engine::SimConfig;
///
/// let cfg = SimConfig::from_toml_str("size = 12\nagents_bicycle = 3\n").unwrap();
/// assert_eq!(cfg.size, 12);
/// assert_eq!(cfg.agents_bicycle, 3);
/// assert_eq!(cfg.steps, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Grid side length. Minimum: 2. Default: 20.
    pub size: u32,
    /// Number of persons, scattered uniformly over the whole grid. Default: 1.
    pub agents_person: usize,
    /// Number of bicycles, placed on distinct road cells. Default: 1.
    pub agents_bicycle: usize,
    /// Ticks executed by [`run_configured`](crate::SimulationEngine::run_configured).
    /// Default: 30.
    pub steps: u64,
    /// Row of the horizontal road lane. `None` = `size / 2`.
    pub road_lane: Option<u32>,
    /// Arbitrary road shape. Takes precedence over `road_lane` when set.
    pub road_layout: Option<RoadLayout>,
    /// Station coordinates. `None` = [`DEFAULT_STATION`] if it fits the grid.
    pub stations: Option<Vec<Coord>>,
    /// Cells per tick for every bicycle. Default: 1.
    pub bicycle_speed: u32,
    /// RNG seed for placement. Default: 42.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 20,
            agents_person: 1,
            agents_bicycle: 1,
            steps: 30,
            road_lane: None,
            road_layout: None,
            stations: None,
            bicycle_speed: 1,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate all structural invariants.
    ///
    /// Bicycle capacity is not checked here: it depends on the number of
    /// road cells and is reported by `initialize()` as
    /// [`SimError::InsufficientCapacity`](spoke_core::SimError::InsufficientCapacity).
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be at least 2x2.
        if self.size == 0 {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        if self.size < 2 {
            return Err(ConfigError::GridTooSmall { size: self.size });
        }
        // 2. Agent ids are u32.
        let total = self.agents_person.saturating_add(self.agents_bicycle);
        if u32::try_from(total).is_err() {
            return Err(ConfigError::TooManyAgents { count: total });
        }
        // 3. Road must materialize. The mask is discarded; initialize()
        //    builds it again.
        let _ = self.road_mask()?;
        // 4. Stations inside the grid.
        for coord in self.resolved_stations() {
            if !coord.within(self.size) {
                return Err(ConfigError::StationOutOfBounds {
                    coord,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// The road shape this configuration describes.
    pub fn resolved_layout(&self) -> RoadLayout {
        match (&self.road_layout, self.road_lane) {
            (Some(layout), _) => layout.clone(),
            (None, Some(lane)) => RoadLayout::Row(lane),
            (None, None) => RoadLayout::default_for(self.size),
        }
    }

    /// Materialize the road mask.
    pub fn road_mask(&self) -> Result<RoadMask, ConfigError> {
        RoadMask::from_layout(self.size, &self.resolved_layout())
    }

    /// The station list this configuration describes.
    ///
    /// Explicit stations are returned as given. Without explicit stations
    /// the default landmark is used when it lies inside the grid, and no
    /// station otherwise.
    pub fn resolved_stations(&self) -> Vec<Coord> {
        match &self.stations {
            Some(stations) => stations.clone(),
            None if DEFAULT_STATION.within(self.size) => vec![DEFAULT_STATION],
            None => Vec::new(),
        }
    }
}
