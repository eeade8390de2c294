//! The simulation engine and its lifecycle state machine.
//!
//! [`SimulationEngine`] owns the grid and the agent collection. Its
//! lifecycle is
//!
//! ```text
//! Uninitialized --initialize--> Ready --step--> Running(t) --step--> Running(t+1)
//!                                 |                 |
//!                                 +-----finish------+--> Finished
//! ```
//!
//! `run(n, ..)` is `n` calls to `step()` followed by `finish()`. Stepping
//! is single-threaded and runs each bicycle to completion in agent order,
//! each one evaluated against the positions left by the agents before it.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use indexmap::IndexMap;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spoke_agents::{Agent, MoveOutcome};
use spoke_core::{AgentId, AgentKind, Coord, SimError, TickId};
use spoke_grid::GridState;

use crate::config::SimConfig;
use crate::metrics::StepMetrics;
use crate::snapshot::Snapshot;

// ── EngineState ─────────────────────────────────────────────────

/// Lifecycle state of a [`SimulationEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no world yet.
    Uninitialized,
    /// World built and agents placed; no tick executed.
    Ready,
    /// At least one tick executed.
    Running {
        /// The most recently completed tick.
        tick: TickId,
    },
    /// The run is over; stepping is rejected.
    Finished {
        /// The final tick.
        tick: TickId,
    },
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Ready => write!(f, "ready"),
            Self::Running { tick } => write!(f, "running (tick {tick})"),
            Self::Finished { tick } => write!(f, "finished (tick {tick})"),
        }
    }
}

// ── World ───────────────────────────────────────────────────────

/// Everything built by `initialize()`.
#[derive(Debug)]
struct World {
    config: SimConfig,
    grid: GridState,
    agents: Vec<Agent>,
    kinds: Arc<IndexMap<AgentId, AgentKind>>,
    tick: TickId,
}

impl World {
    fn build<R: Rng + ?Sized>(config: SimConfig, rng: &mut R) -> Result<Self, SimError> {
        config.validate()?;
        let mut grid = GridState::from_mask(config.road_mask()?, &config.resolved_stations())?;
        let size = grid.size();

        let road_cells = grid.road_mask().road_cells();
        if config.agents_bicycle > road_cells.len() {
            return Err(SimError::InsufficientCapacity {
                requested: config.agents_bicycle,
                available: road_cells.len(),
            });
        }

        // Persons: independent uniform draws over the whole grid. Two
        // persons may land on the same cell.
        let person_cells: Vec<Coord> = (0..config.agents_person)
            .map(|_| Coord::new(rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        // Bicycles: distinct road cells, sampled without replacement.
        let bicycle_cells: Vec<Coord> =
            index::sample(rng, road_cells.len(), config.agents_bicycle)
                .into_iter()
                .map(|i| road_cells[i])
                .collect();

        // Bicycles take the first ids, persons follow. validate() bounds
        // the total to u32, so the counter cannot overflow.
        let mut agents = Vec::with_capacity(bicycle_cells.len() + person_cells.len());
        let mut next_id = 0u32;
        for cell in bicycle_cells {
            let agent = Agent::bicycle(AgentId(next_id), config.bicycle_speed);
            grid.place(agent.id(), cell)?;
            agents.push(agent);
            next_id += 1;
        }
        for cell in person_cells {
            let agent = Agent::person(AgentId(next_id));
            grid.place(agent.id(), cell)?;
            agents.push(agent);
            next_id += 1;
        }

        let kinds: IndexMap<AgentId, AgentKind> =
            agents.iter().map(|a| (a.id(), a.kind())).collect();
        Ok(Self {
            config,
            grid,
            agents,
            kinds: Arc::new(kinds),
            tick: TickId(0),
        })
    }
}

// ── SimulationEngine ────────────────────────────────────────────

/// Single-threaded, lockstep traffic simulation.
///
/// # Example
///
/// ```
/// use spoke_engine::{SimConfig, SimulationEngine};
///
/// let mut engine = SimulationEngine::from_config(SimConfig::default()).unwrap();
/// let mut frames = 0;
/// engine.run(5, |snapshot| {
///     assert!(snapshot.positions().len() == 2);
///     frames += 1;
/// }).unwrap();
/// assert_eq!(frames, 5);
/// assert!(engine.step().is_err());
/// ```
pub struct SimulationEngine {
    state: EngineState,
    world: Option<World>,
    last_metrics: StepMetrics,
}

impl SimulationEngine {
    /// An engine in the `Uninitialized` state.
    pub fn new() -> Self {
        Self {
            state: EngineState::Uninitialized,
            world: None,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Build and initialize an engine, seeding placement from `config.seed`.
    pub fn from_config(config: SimConfig) -> Result<Self, SimError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut engine = Self::new();
        engine.initialize(config, &mut rng)?;
        Ok(engine)
    }

    /// Build the grid and place every agent, drawing from `rng`.
    ///
    /// Transitions `Uninitialized → Ready`. On error the engine stays
    /// `Uninitialized` and no state is kept.
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] if `config` fails validation.
    /// - [`SimError::InsufficientCapacity`] if there are more bicycles
    ///   than road cells.
    /// - [`SimError::InvalidState`] if already initialized.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        config: SimConfig,
        rng: &mut R,
    ) -> Result<(), SimError> {
        if self.state != EngineState::Uninitialized {
            return Err(self.invalid("initialize"));
        }
        let world = World::build(config, rng)?;
        tracing::info!(
            size = world.grid.size(),
            bicycles = world.config.agents_bicycle,
            persons = world.config.agents_person,
            road_cells = world.grid.road_mask().road_count(),
            stations = world.grid.stations().len(),
            "simulation initialized"
        );
        self.world = Some(world);
        self.state = EngineState::Ready;
        Ok(())
    }

    /// Pin an agent's position before the first tick.
    ///
    /// Valid only in `Ready`. Like initial placement, the road mask is
    /// not consulted.
    pub fn place_agent(&mut self, agent: AgentId, coord: Coord) -> Result<(), SimError> {
        if self.state != EngineState::Ready {
            return Err(self.invalid("place an agent"));
        }
        let world = self.world_mut("place an agent")?;
        if !world.kinds.contains_key(&agent) {
            return Err(SimError::UnknownAgent(agent));
        }
        world.grid.place(agent, coord)?;
        Ok(())
    }

    /// Execute one tick: advance every mobile agent once, in agent order.
    ///
    /// Persons are skipped; their advance is a no-op.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidState`] unless the engine is `Ready` or `Running`.
    pub fn step(&mut self) -> Result<StepMetrics, SimError> {
        if !matches!(self.state, EngineState::Ready | EngineState::Running { .. }) {
            return Err(self.invalid("step"));
        }
        let world = self.world_mut("step")?;
        let start = Instant::now();

        let mut metrics = StepMetrics::default();
        for agent in world.agents.iter().filter(|a| a.is_mobile()) {
            match agent.advance(&mut world.grid) {
                MoveOutcome::Moved { .. } => metrics.moved += 1,
                MoveOutcome::Blocked { .. } => metrics.blocked += 1,
                MoveOutcome::Stationary => metrics.stationary += 1,
            }
        }
        world.tick = world.tick.next();
        let tick = world.tick;
        metrics.total_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            %tick,
            moved = metrics.moved,
            blocked = metrics.blocked,
            "tick complete"
        );
        self.state = EngineState::Running { tick };
        self.last_metrics = metrics;
        Ok(metrics)
    }

    /// End the run. Subsequent `step()` calls fail.
    ///
    /// Calling `finish()` on a finished engine is a no-op.
    pub fn finish(&mut self) -> Result<(), SimError> {
        match self.state {
            EngineState::Uninitialized => Err(self.invalid("finish")),
            EngineState::Finished { .. } => Ok(()),
            EngineState::Ready | EngineState::Running { .. } => {
                let tick = self.current_tick();
                tracing::info!(%tick, "simulation finished");
                self.state = EngineState::Finished { tick };
                Ok(())
            }
        }
    }

    /// A copy of the current world state. Does not mutate the engine.
    ///
    /// Valid in every state after `initialize()`.
    pub fn snapshot(&self) -> Result<Snapshot, SimError> {
        let world = self
            .world
            .as_ref()
            .ok_or_else(|| self.invalid("take a snapshot"))?;
        Ok(Snapshot::capture(world.tick, &world.grid, &world.kinds))
    }

    /// Run `n_steps` ticks, handing each post-tick snapshot to `on_frame`,
    /// then transition to `Finished`.
    pub fn run<F>(&mut self, n_steps: u64, mut on_frame: F) -> Result<(), SimError>
    where
        F: FnMut(&Snapshot),
    {
        if !matches!(self.state, EngineState::Ready | EngineState::Running { .. }) {
            return Err(self.invalid("run"));
        }
        for _ in 0..n_steps {
            self.step()?;
            on_frame(&self.snapshot()?);
        }
        self.finish()
    }

    /// Run `n_steps` ticks and return every post-tick snapshot.
    pub fn run_collect(&mut self, n_steps: u64) -> Result<Vec<Snapshot>, SimError> {
        let mut frames = Vec::with_capacity(usize::try_from(n_steps).unwrap_or(0));
        self.run(n_steps, |s| frames.push(s.clone()))?;
        Ok(frames)
    }

    /// Run the number of ticks given by the configuration's `steps`.
    pub fn run_configured<F>(&mut self, on_frame: F) -> Result<(), SimError>
    where
        F: FnMut(&Snapshot),
    {
        let steps = self
            .world
            .as_ref()
            .map(|w| w.config.steps)
            .ok_or_else(|| self.invalid("run"))?;
        self.run(steps, on_frame)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Most recently completed tick (0 before the first step).
    pub fn current_tick(&self) -> TickId {
        self.world.as_ref().map_or(TickId(0), |w| w.tick)
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The configuration this engine was initialized with.
    pub fn config(&self) -> Option<&SimConfig> {
        self.world.as_ref().map(|w| &w.config)
    }

    /// Read-only access to the grid.
    pub fn grid(&self) -> Option<&GridState> {
        self.world.as_ref().map(|w| &w.grid)
    }

    /// The agent collection, bicycles first.
    pub fn agents(&self) -> &[Agent] {
        match &self.world {
            Some(w) => &w.agents,
            None => &[],
        }
    }

    fn world_mut(&mut self, operation: &'static str) -> Result<&mut World, SimError> {
        let state = self.state;
        self.world.as_mut().ok_or(SimError::InvalidState {
            operation,
            state: state.to_string(),
        })
    }

    fn invalid(&self, operation: &'static str) -> SimError {
        SimError::InvalidState {
            operation,
            state: self.state.to_string(),
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("state", &self.state)
            .field("agents", &self.agents().len())
            .field("size", &self.grid().map(GridState::size))
            .finish()
    }
}
