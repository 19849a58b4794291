//! Boolean output derivation from run state, timers, and purge flags.

use super::types::{Room, RoomState, RunState};

/// Derives the three boolean outputs from the room's settled step state.
///
/// Big/Small: fan follows the fan timer or an active purge; fresh air
/// follows its timer, purge, or active cooling; the humidifier follows
/// active heating. The Reformer room has no auxiliary equipment: all
/// outputs are forced off and both timers zeroed, overriding anything
/// computed upstream.
pub fn derive(state: &mut RoomState, room: Room) {
    if room == Room::Reformer {
        state.fan = false;
        state.fresh_air = false;
        state.humidifier = false;
        state.fan_timer_s = 0;
        state.fresh_air_timer_s = 0;
        return;
    }
    state.fan = state.fan_timer_s > 0 || state.purge_active;
    state.fresh_air =
        state.fresh_air_timer_s > 0 || state.purge_active || state.run_state == RunState::Cooling;
    state.humidifier = state.run_state == RunState::Heating;
}
