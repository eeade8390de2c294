//! Per-tick metrics for the simulation engine.

/// Counts and timing collected during a single tick.
///
/// The engine populates these after each `step()`; the most recent value
/// is available from [`SimulationEngine::last_metrics`](crate::SimulationEngine::last_metrics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Mobile agents whose position changed.
    pub moved: u32,
    /// Mobile agents whose target was not road.
    pub blocked: u32,
    /// Mobile agents that did not attempt a move (not placed).
    pub stationary: u32,
}

impl StepMetrics {
    /// Number of mobile agents stepped this tick.
    pub fn stepped(&self) -> u32 {
        self.moved + self.blocked + self.stationary
    }
}
