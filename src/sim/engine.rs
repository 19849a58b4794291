//! Per-second state-transition engine composing schedule lookup,
//! thermostat resolution, timers, and output derivation.

use super::clock;
use super::outputs;
use super::schedule;
use super::thermostat;
use super::timers;
use super::types::{Room, SimulationState, StepRecord};

/// Executes one second of controller logic for every room and advances
/// the wall clock.
///
/// Pure update: the prior state is read-only and a new state is returned.
/// Each room is processed independently against the schedule slot at the
/// prior state's day and time; the clock then advances by one second,
/// wrapping time mod 86400 and the day mod 7 at midnight.
pub fn step(state: &SimulationState) -> SimulationState {
    let mut next = *state;

    let second = state.time_of_day_s % 60;
    let minute = state.time_of_day_s % 3600 / 60;
    let heat_adjust_f = thermostat::heat_adjustment_f(state.ambient_temp_f);

    for room in Room::ALL {
        let symbol = schedule::symbol(room, state.day, state.time_of_day_s);
        let purge_request = state.purge_request(room);
        let r = next.room_mut(room);

        thermostat::apply_symbol(r, symbol, room, heat_adjust_f);
        timers::update(r, symbol, second, minute);
        r.purge_active = purge_request;
        thermostat::update_run_state(r);
        outputs::derive(r, room);
    }

    let (time, day) = clock::advance_second(state.time_of_day_s, state.day);
    next.time_of_day_s = time;
    next.day = day;
    next
}

/// Stateful wrapper owning the threaded [`SimulationState`] plus the
/// mutable external inputs, for drivers that advance the simulation and
/// consume per-step records.
pub struct Engine {
    state: SimulationState,
}

impl Engine {
    /// Creates an engine starting from the given state.
    pub fn new(initial: SimulationState) -> Self {
        Self { state: initial }
    }

    /// Returns the current fully-settled state snapshot.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Sets the outdoor ambient temperature (°F). Takes effect on the
    /// next step.
    pub fn set_ambient_temp_f(&mut self, ambient_temp_f: f32) {
        self.state.ambient_temp_f = ambient_temp_f;
    }

    /// Sets or clears a room's manual temperature override.
    pub fn set_temp_override_f(&mut self, room: Room, override_f: Option<f32>) {
        self.state.room_mut(room).temp_override_f = override_f;
    }

    /// Sets a room's temperature lock flag.
    pub fn set_temp_locked(&mut self, room: Room, locked: bool) {
        self.state.room_mut(room).temp_locked = locked;
    }

    /// Sets the purge request for the Big or Small room.
    ///
    /// The Reformer room has no purge input; requests for it are ignored.
    pub fn set_purge_request(&mut self, room: Room, requested: bool) {
        match room {
            Room::Big => self.state.big_purge_request = requested,
            Room::Small => self.state.small_purge_request = requested,
            Room::Reformer => {}
        }
    }

    /// Advances the simulation by exactly one second and returns the
    /// record for the step just executed.
    pub fn step(&mut self) -> StepRecord {
        let before = self.state;
        self.state = step(&before);
        StepRecord {
            day: before.day,
            time_of_day_s: before.time_of_day_s,
            ambient_temp_f: before.ambient_temp_f,
            big: self.state.big,
            small: self.state.small,
            reformer: self.state.reformer,
        }
    }

    /// Advances `n` seconds sequentially without producing records.
    ///
    /// Catch-up helper for drivers resuming after a pause; equivalent to
    /// `n` calls to [`Engine::step`] with the records discarded.
    pub fn advance(&mut self, n: u64) {
        self.state = clock::run_steps(&self.state, n);
    }
}
