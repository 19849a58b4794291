//! Simulation clock: time-of-day wrapping and bounded step iteration.

use super::engine;
use super::types::SimulationState;

/// Seconds in one simulated day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Days in the weekly schedule cycle.
pub const DAYS_PER_WEEK: u32 = 7;

/// Advances the wall clock by exactly one second.
///
/// Returns the new `(time_of_day_s, day)` pair: time wraps mod 86400 and
/// the day advances mod 7 on the midnight wrap.
pub fn advance_second(time_of_day_s: u32, day: u32) -> (u32, u32) {
    let time = (time_of_day_s + 1) % SECONDS_PER_DAY;
    if time == 0 {
        (time, (day + 1) % DAYS_PER_WEEK)
    } else {
        (time, day)
    }
}

/// Runs `n` engine steps strictly sequentially, each step consuming the
/// previous step's output. Exactly equivalent to `n` single calls to
/// [`engine::step`]; intermediate states are not exposed.
pub fn run_steps(state: &SimulationState, n: u64) -> SimulationState {
    let mut current = *state;
    for _ in 0..n {
        current = engine::step(&current);
    }
    current
}

/// A simulation clock that tracks steps over a fixed duration.
///
/// Provides methods to advance step-by-step or run a function at each
/// step until completion. Batching policy (how many seconds to catch up
/// per external call) belongs to the driver; the clock only guarantees
/// sequential, one-second granularity.
///
/// # Examples
///
/// ```
/// use hvac_sim::sim::clock::Clock;
///
/// let mut clock = Clock::new(3);
/// let mut steps = Vec::new();
///
/// clock.run(|step| steps.push(step));
/// assert_eq!(steps, vec![0, 1, 2]);
/// ```
pub struct Clock {
    /// Current step of the simulation.
    current: u64,
    /// Total steps to run.
    total: u64,
}

impl Clock {
    /// Creates a new clock with a specified total number of steps.
    pub fn new(total: u64) -> Self {
        Self { current: 0, total }
    }

    /// Advances the clock by one step.
    ///
    /// # Returns
    ///
    /// * `Some(step)` - The current step number (starting from 0) before advancing
    /// * `None` - If the clock has reached its total steps
    pub fn tick(&mut self) -> Option<u64> {
        if self.current < self.total {
            let step = self.current;
            self.current += 1;
            Some(step)
        } else {
            None
        }
    }

    /// Runs a function for each remaining step in the clock.
    pub fn run(&mut self, mut f: impl FnMut(u64)) {
        while let Some(step) = self.tick() {
            f(step);
        }
    }
}
