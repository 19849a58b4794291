//! Fan and fresh-air countdown timer management.

use super::schedule::ScheduleSymbol;
use super::types::RoomState;

/// Value loaded into both run timers on a qualifying boundary (seconds).
pub const RELOAD_S: u32 = 900;

/// Reloads and counts down both run timers for one second.
///
/// Reload is edge-triggered: it fires only when the current second sits
/// exactly on a quarter-hour boundary (`second == 0 && minute % 15 == 0`)
/// and the slot symbol qualifies. The reload lands before the countdown,
/// so a freshly loaded timer reads 899 after its first second.
pub fn update(state: &mut RoomState, symbol: ScheduleSymbol, second: u32, minute: u32) {
    if second == 0 && minute % 15 == 0 && symbol.triggers_timers() {
        state.fan_timer_s = RELOAD_S;
        state.fresh_air_timer_s = RELOAD_S;
    }
    state.fan_timer_s = state.fan_timer_s.saturating_sub(1);
    state.fresh_air_timer_s = state.fresh_air_timer_s.saturating_sub(1);
}
