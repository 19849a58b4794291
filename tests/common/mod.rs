//! Shared helpers for integration tests.

use hvac_sim::sim::clock;
use hvac_sim::sim::types::SimulationState;

/// Builds a default-room state positioned at the given day and time.
pub fn state_at(day: u32, time_of_day_s: u32) -> SimulationState {
    SimulationState {
        day,
        time_of_day_s,
        ..SimulationState::default()
    }
}

/// Advances a state by `n` sequential one-second steps.
pub fn run_seconds(state: &SimulationState, n: u64) -> SimulationState {
    clock::run_steps(state, n)
}
