//! Per-room setpoint/mode resolution, hysteresis control, and temperature
//! integration.
//!
//! Everything here is a pure per-second update on a [`RoomState`]; the
//! caller supplies the resolved schedule symbol and the heat adjustment
//! derived from ambient temperature.

use super::schedule::ScheduleSymbol;
use super::types::{Mode, Room, RoomState, RunState};

/// Ambient temperature above which heat setpoints are reduced (°F).
pub const HEAT_ADJUST_THRESHOLD_F: f32 = 95.0;

/// Setpoint reduction applied to heat calls above the threshold (°F).
pub const HEAT_ADJUST_DEG_F: f32 = 10.0;

/// Setpoint written when a slot is idle (°F).
pub const IDLE_SETPOINT_F: f32 = 60.0;

/// Flat cooling setpoint; heat adjustment never applies to cooling (°F).
pub const COOL_SETPOINT_F: f32 = 73.0;

/// Off-mode drift target, independent of ambient temperature (°F).
pub const DRIFT_BASELINE_F: f32 = 70.0;

/// Hysteresis turn-on threshold: run when |setpoint − temp| exceeds this.
pub const BAND_ON_F: f32 = 1.0;

/// Hysteresis turn-off threshold: stop when |setpoint − temp| falls below this.
pub const BAND_OFF_F: f32 = 0.2;

/// Temperature change per second while actively heating or cooling (°F/s).
pub const ACTIVE_RATE_F_PER_S: f32 = 0.02;

/// Temperature change per second while idle in Heat or Cool mode (°F/s).
pub const IDLE_RATE_F_PER_S: f32 = 0.005;

/// Fraction of the distance to the drift baseline recovered per second.
pub const DRIFT_RATE_PER_S: f32 = 0.001;

/// Returns the heat-call setpoint reduction for the given ambient temperature.
pub fn heat_adjustment_f(ambient_temp_f: f32) -> f32 {
    if ambient_temp_f > HEAT_ADJUST_THRESHOLD_F {
        HEAT_ADJUST_DEG_F
    } else {
        0.0
    }
}

/// Base heat setpoint for a (room, symbol) pair, before heat adjustment (°F).
fn heat_base_f(room: Room, symbol: ScheduleSymbol) -> f32 {
    match room {
        Room::Big => 90.0,
        Room::Reformer => 80.0,
        Room::Small => match symbol {
            ScheduleSymbol::Hot => 95.0,
            ScheduleSymbol::Heat | ScheduleSymbol::Sauna => 115.0,
            // Warm, HeatFlush, and anything unexpected.
            _ => 90.0,
        },
    }
}

/// Resolves mode and setpoint from the current schedule symbol.
///
/// `Purge` switches the mode off but deliberately leaves the setpoint
/// untouched, unlike `Idle` which resets it to 60°F. Off-mode hysteresis
/// ignores the setpoint, so the stale value is inert.
pub fn apply_symbol(state: &mut RoomState, symbol: ScheduleSymbol, room: Room, heat_adjust_f: f32) {
    match symbol {
        ScheduleSymbol::Idle => {
            state.mode = Mode::Off;
            state.setpoint_f = IDLE_SETPOINT_F;
        }
        ScheduleSymbol::Purge => {
            state.mode = Mode::Off;
        }
        s if s.is_heat() => {
            state.mode = Mode::Heat;
            state.setpoint_f = heat_base_f(room, s) - heat_adjust_f;
        }
        _ => {
            state.mode = Mode::Cool;
            state.setpoint_f = COOL_SETPOINT_F;
        }
    }
}

/// Applies the manual override pin, evaluates hysteresis, and integrates
/// temperature for one second.
///
/// Hysteresis comparisons are strict: a diff of exactly 1.0 does not turn
/// heating on, and exactly 0.2 does not turn it off. Inside the band the
/// prior run state persists, even across a mode change. Integration is
/// skipped entirely while an override is set or the temperature is locked.
pub fn update_run_state(state: &mut RoomState) {
    if let Some(pin_f) = state.temp_override_f {
        state.temperature_f = pin_f;
    }
    let free_running = state.temp_override_f.is_none() && !state.temp_locked;
    let diff = state.setpoint_f - state.temperature_f;

    match state.mode {
        Mode::Heat => {
            if diff > BAND_ON_F {
                state.run_state = RunState::Heating;
            } else if diff < BAND_OFF_F {
                state.run_state = RunState::Idle;
            }
            if free_running {
                state.temperature_f += if state.run_state == RunState::Heating {
                    ACTIVE_RATE_F_PER_S
                } else {
                    -IDLE_RATE_F_PER_S
                };
            }
        }
        Mode::Cool => {
            if diff < -BAND_ON_F {
                state.run_state = RunState::Cooling;
            } else if diff > -BAND_OFF_F {
                state.run_state = RunState::Idle;
            }
            if free_running {
                state.temperature_f += if state.run_state == RunState::Cooling {
                    -ACTIVE_RATE_F_PER_S
                } else {
                    IDLE_RATE_F_PER_S
                };
            }
        }
        Mode::Off | Mode::Auto => {
            state.run_state = RunState::Idle;
            if free_running {
                state.temperature_f += (DRIFT_BASELINE_F - state.temperature_f) * DRIFT_RATE_PER_S;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomState {
        RoomState::default()
    }

    #[test]
    fn idle_symbol_resets_mode_and_setpoint() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        apply_symbol(&mut r, ScheduleSymbol::Idle, Room::Big, 0.0);
        assert_eq!(r.mode, Mode::Off);
        assert_eq!(r.setpoint_f, IDLE_SETPOINT_F);
    }

    #[test]
    fn purge_symbol_leaves_setpoint_untouched() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        apply_symbol(&mut r, ScheduleSymbol::Purge, Room::Big, 0.0);
        assert_eq!(r.mode, Mode::Off);
        assert_eq!(r.setpoint_f, 90.0);
    }

    #[test]
    fn big_room_heat_setpoints_are_flat_90() {
        for sym in [ScheduleSymbol::Heat, ScheduleSymbol::HeatFlush] {
            let mut r = room();
            apply_symbol(&mut r, sym, Room::Big, 0.0);
            assert_eq!(r.mode, Mode::Heat);
            assert_eq!(r.setpoint_f, 90.0);
        }
    }

    #[test]
    fn small_room_heat_setpoint_table() {
        let cases = [
            (ScheduleSymbol::Warm, 90.0),
            (ScheduleSymbol::Hot, 95.0),
            (ScheduleSymbol::Heat, 115.0),
            (ScheduleSymbol::Sauna, 115.0),
            (ScheduleSymbol::HeatFlush, 90.0),
        ];
        for (sym, expected) in cases {
            let mut r = room();
            apply_symbol(&mut r, sym, Room::Small, 0.0);
            assert_eq!(r.setpoint_f, expected, "symbol {:?}", sym);
        }
    }

    #[test]
    fn reformer_heat_setpoint_is_flat_80() {
        for sym in [ScheduleSymbol::Warm, ScheduleSymbol::Sauna] {
            let mut r = room();
            apply_symbol(&mut r, sym, Room::Reformer, 0.0);
            assert_eq!(r.setpoint_f, 80.0);
        }
    }

    #[test]
    fn heat_adjustment_reduces_heat_but_not_cool() {
        assert_eq!(heat_adjustment_f(95.0), 0.0);
        assert_eq!(heat_adjustment_f(96.0), HEAT_ADJUST_DEG_F);

        let mut r = room();
        apply_symbol(&mut r, ScheduleSymbol::Heat, Room::Big, HEAT_ADJUST_DEG_F);
        assert_eq!(r.setpoint_f, 80.0);

        let mut r = room();
        apply_symbol(&mut r, ScheduleSymbol::Cool, Room::Big, HEAT_ADJUST_DEG_F);
        assert_eq!(r.setpoint_f, COOL_SETPOINT_F);
    }

    #[test]
    fn heat_turns_on_only_beyond_one_degree() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.temp_locked = true; // freeze integration so only the boundary matters

        r.temperature_f = 89.0; // diff exactly 1.0 — no change
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Idle);

        r.temperature_f = 88.5;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Heating);
    }

    #[test]
    fn heat_turns_off_only_below_band() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.run_state = RunState::Heating;
        r.temp_locked = true;

        r.temperature_f = 89.75; // diff 0.25, inside the band — stays on
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Heating);

        r.temperature_f = 89.9;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Idle);
    }

    #[test]
    fn diff_equal_to_off_threshold_does_not_turn_off() {
        // 90.0 - 89.8 rounds just below 0.2 in f32, so pick values whose
        // subtraction lands exactly on the threshold constant.
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = BAND_OFF_F;
        r.temperature_f = 0.0; // diff == BAND_OFF_F exactly
        r.run_state = RunState::Heating;
        r.temp_locked = true;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Heating);

        let mut r = room();
        r.mode = Mode::Cool;
        r.setpoint_f = 0.0;
        r.temperature_f = BAND_OFF_F; // diff == -BAND_OFF_F exactly
        r.run_state = RunState::Cooling;
        r.temp_locked = true;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Cooling);
    }

    #[test]
    fn cool_hysteresis_mirrors_heat() {
        let mut r = room();
        r.mode = Mode::Cool;
        r.setpoint_f = 73.0;
        r.temp_locked = true;

        r.temperature_f = 74.0; // diff exactly -1.0 — no change
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Idle);

        r.temperature_f = 74.5;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Cooling);

        r.temperature_f = 73.25; // diff -0.25, inside the band — stays on
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Cooling);

        r.temperature_f = 73.125;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Idle);
    }

    #[test]
    fn in_band_run_state_survives_mode_change() {
        // Cooling carried into Heat mode persists while diff sits in the
        // dead band; the humidifier key is run state, not mode.
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.temperature_f = 89.5; // diff 0.5, inside the band
        r.run_state = RunState::Cooling;
        r.temp_locked = true;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Cooling);
    }

    #[test]
    fn heating_integrates_upward() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.temperature_f = 80.0;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Heating);
        assert!((r.temperature_f - 80.02).abs() < 1e-5);
    }

    #[test]
    fn idle_heat_mode_loses_temperature() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.temperature_f = 90.0;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Idle);
        assert!((r.temperature_f - 89.995).abs() < 1e-5);
    }

    #[test]
    fn off_mode_drifts_toward_baseline() {
        let mut r = room();
        r.temperature_f = 90.0;
        update_run_state(&mut r);
        assert!((r.temperature_f - 89.98).abs() < 1e-5);

        let mut r = room();
        r.temperature_f = 50.0;
        update_run_state(&mut r);
        assert!((r.temperature_f - 50.02).abs() < 1e-5);
    }

    #[test]
    fn auto_mode_behaves_like_off() {
        let mut r = room();
        r.mode = Mode::Auto;
        r.run_state = RunState::Heating;
        r.temperature_f = 80.0;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Idle);
        assert!((r.temperature_f - 79.99).abs() < 1e-5);
    }

    #[test]
    fn override_pins_temperature_and_skips_integration() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.temperature_f = 70.0;
        r.temp_override_f = Some(85.0);
        update_run_state(&mut r);
        assert_eq!(r.temperature_f, 85.0);
        assert_eq!(r.run_state, RunState::Heating);

        // Same step again: still pinned, no creep.
        update_run_state(&mut r);
        assert_eq!(r.temperature_f, 85.0);
    }

    #[test]
    fn clearing_override_resumes_from_pinned_value() {
        let mut r = room();
        r.mode = Mode::Heat;
        r.setpoint_f = 90.0;
        r.temp_override_f = Some(85.0);
        update_run_state(&mut r);
        r.temp_override_f = None;
        update_run_state(&mut r);
        assert!((r.temperature_f - 85.02).abs() < 1e-5);
    }

    #[test]
    fn lock_suppresses_drift_but_not_run_state() {
        let mut r = room();
        r.mode = Mode::Cool;
        r.setpoint_f = 73.0;
        r.temperature_f = 80.0;
        r.temp_locked = true;
        update_run_state(&mut r);
        assert_eq!(r.run_state, RunState::Cooling);
        assert_eq!(r.temperature_f, 80.0);
    }
}
