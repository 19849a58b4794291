//! Core simulation types: rooms, modes, run states, and state snapshots.

use std::fmt;

/// The three conditioned rooms of the studio.
///
/// Big and Small are fully equipped (fan, fresh air, humidifier); the
/// Reformer room carries heat only and never drives auxiliary outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    Big,
    Small,
    Reformer,
}

impl Room {
    /// All rooms in processing order.
    pub const ALL: [Room; 3] = [Room::Big, Room::Small, Room::Reformer];

    /// Returns a short display label for log and CSV output.
    pub fn label(self) -> &'static str {
        match self {
            Room::Big => "Big",
            Room::Small => "Small",
            Room::Reformer => "Reformer",
        }
    }
}

/// Commanded thermostat mode, resolved each second from the schedule.
///
/// `Auto` is never produced by schedule resolution; if set externally it
/// behaves like `Off` for run-state and drift purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off,
    Heat,
    Cool,
    Auto,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Off => "Off",
            Mode::Heat => "Heat",
            Mode::Cool => "Cool",
            Mode::Auto => "Auto",
        }
    }
}

/// Current thermostat action, distinct from the commanded mode.
///
/// Carries hysteresis memory across steps: inside the dead band the prior
/// run state persists, including across mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Heating,
    Cooling,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Heating => "Heating",
            RunState::Cooling => "Cooling",
        }
    }
}

/// Full per-room controller state, advanced one second at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomState {
    /// Simulated room temperature (°F).
    pub temperature_f: f32,
    /// Active setpoint (°F), derived solely from the schedule symbol.
    pub setpoint_f: f32,
    /// Commanded mode from the current schedule symbol.
    pub mode: Mode,
    /// Fan output.
    pub fan: bool,
    /// Fresh-air damper output.
    pub fresh_air: bool,
    /// Humidifier output.
    pub humidifier: bool,
    /// Fan run timer, seconds remaining.
    pub fan_timer_s: u32,
    /// Fresh-air run timer, seconds remaining.
    pub fresh_air_timer_s: u32,
    /// Mirrors the external purge request each step.
    pub purge_active: bool,
    /// Current thermostat action.
    pub run_state: RunState,
    /// Manual temperature override; pins `temperature_f` every step until cleared.
    pub temp_override_f: Option<f32>,
    /// Suppresses temperature drift without pinning a value.
    pub temp_locked: bool,
}

impl Default for RoomState {
    fn default() -> Self {
        Self {
            temperature_f: 70.0,
            setpoint_f: 60.0,
            mode: Mode::Off,
            fan: false,
            fresh_air: false,
            humidifier: false,
            fan_timer_s: 0,
            fresh_air_timer_s: 0,
            purge_active: false,
            run_state: RunState::Idle,
            temp_override_f: None,
            temp_locked: false,
        }
    }
}

/// Global simulation state: wall clock, ambient conditions, and all rooms.
///
/// Advanced by [`crate::sim::engine::step`], which treats the prior state
/// as read-only and returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Seconds since midnight, `0..86400`.
    pub time_of_day_s: u32,
    /// Day of week, `0..7` (0 = Monday).
    pub day: u32,
    /// Outdoor ambient temperature (°F); gates the heat adjustment.
    pub ambient_temp_f: f32,
    pub big: RoomState,
    pub small: RoomState,
    pub reformer: RoomState,
    /// External purge request for the Big room.
    pub big_purge_request: bool,
    /// External purge request for the Small room (Reformer has none).
    pub small_purge_request: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            time_of_day_s: 0,
            day: 0,
            ambient_temp_f: 75.0,
            big: RoomState::default(),
            small: RoomState::default(),
            reformer: RoomState::default(),
            big_purge_request: false,
            small_purge_request: false,
        }
    }
}

impl SimulationState {
    /// Returns the state of the given room.
    pub fn room(&self, room: Room) -> &RoomState {
        match room {
            Room::Big => &self.big,
            Room::Small => &self.small,
            Room::Reformer => &self.reformer,
        }
    }

    /// Returns a mutable reference to the given room's state.
    pub fn room_mut(&mut self, room: Room) -> &mut RoomState {
        match room {
            Room::Big => &mut self.big,
            Room::Small => &mut self.small,
            Room::Reformer => &mut self.reformer,
        }
    }

    /// Returns the external purge request for the given room.
    ///
    /// The Reformer room has no purge input and always reads `false`.
    pub fn purge_request(&self, room: Room) -> bool {
        match room {
            Room::Big => self.big_purge_request,
            Room::Small => self.small_purge_request,
            Room::Reformer => false,
        }
    }
}

/// Complete record of one simulation second: the time at which the step
/// was evaluated and the post-step snapshot of every room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Day of week at evaluation time.
    pub day: u32,
    /// Time of day at evaluation time (seconds since midnight).
    pub time_of_day_s: u32,
    /// Ambient temperature during this step (°F).
    pub ambient_temp_f: f32,
    pub big: RoomState,
    pub small: RoomState,
    pub reformer: RoomState,
}

impl StepRecord {
    /// Returns the snapshot for the given room.
    pub fn room(&self, room: Room) -> &RoomState {
        match room {
            Room::Big => &self.big,
            Room::Small => &self.small,
            Room::Reformer => &self.reformer,
        }
    }
}

fn fmt_room(f: &mut fmt::Formatter<'_>, label: &str, r: &RoomState) -> fmt::Result {
    write!(
        f,
        "{label}: {:>5.1}°F/{:>5.1}°F {:<4} {:<7} fan={} fa={} hum={}",
        r.temperature_f,
        r.setpoint_f,
        r.mode.as_str(),
        r.run_state.as_str(),
        u8::from(r.fan),
        u8::from(r.fresh_air),
        u8::from(r.humidifier),
    )
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.time_of_day_s / 3600;
        let m = self.time_of_day_s % 3600 / 60;
        let s = self.time_of_day_s % 60;
        write!(f, "d{} {h:02}:{m:02}:{s:02} | ", self.day)?;
        fmt_room(f, "Big", &self.big)?;
        write!(f, " | ")?;
        fmt_room(f, "Small", &self.small)?;
        write!(f, " | ")?;
        fmt_room(f, "Ref", &self.reformer)
    }
}
