//! Fixed weekly program tables and schedule symbol lookup.

use super::types::Room;

/// Duration of one schedule slot in seconds (15 minutes).
pub const SLOT_SECONDS: u32 = 900;

/// Number of schedule slots per day.
pub const SLOTS_PER_DAY: usize = 96;

/// One-character program code for a 15-minute schedule slot.
///
/// Replaces the firmware's character-keyed dispatch with a total mapping;
/// unknown characters resolve to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSymbol {
    /// `.` — no call, setpoint reset to 60°F.
    Idle,
    /// `H` — heat call (90°F in Big, 115°F in Small).
    Heat,
    /// `W` — warm heat call (90°F in Small, 80°F in Reformer).
    Warm,
    /// `M` — high heat call (95°F in Small).
    Hot,
    /// `S` — sauna-level heat call (115°F in Small).
    Sauna,
    /// `T` — heat call that also reloads the run timers.
    HeatFlush,
    /// `C` — cool call (73°F).
    Cool,
    /// `V` — cool call that also reloads the run timers.
    CoolFlush,
    /// `P` — purge slot: mode off, setpoint untouched, timers reloaded.
    Purge,
}

impl ScheduleSymbol {
    /// Maps a grid character to its symbol. Total: anything outside the
    /// alphabet is an idle slot.
    pub fn from_char(c: char) -> Self {
        match c {
            'H' => ScheduleSymbol::Heat,
            'W' => ScheduleSymbol::Warm,
            'M' => ScheduleSymbol::Hot,
            'S' => ScheduleSymbol::Sauna,
            'T' => ScheduleSymbol::HeatFlush,
            'C' => ScheduleSymbol::Cool,
            'V' => ScheduleSymbol::CoolFlush,
            'P' => ScheduleSymbol::Purge,
            _ => ScheduleSymbol::Idle,
        }
    }

    /// Returns the grid character for this symbol.
    pub fn as_char(self) -> char {
        match self {
            ScheduleSymbol::Idle => '.',
            ScheduleSymbol::Heat => 'H',
            ScheduleSymbol::Warm => 'W',
            ScheduleSymbol::Hot => 'M',
            ScheduleSymbol::Sauna => 'S',
            ScheduleSymbol::HeatFlush => 'T',
            ScheduleSymbol::Cool => 'C',
            ScheduleSymbol::CoolFlush => 'V',
            ScheduleSymbol::Purge => 'P',
        }
    }

    /// True for symbols that command heating.
    pub fn is_heat(self) -> bool {
        matches!(
            self,
            ScheduleSymbol::Heat
                | ScheduleSymbol::Warm
                | ScheduleSymbol::Hot
                | ScheduleSymbol::Sauna
                | ScheduleSymbol::HeatFlush
        )
    }

    /// True for symbols that command cooling.
    pub fn is_cool(self) -> bool {
        matches!(self, ScheduleSymbol::Cool | ScheduleSymbol::CoolFlush)
    }

    /// True for symbols that reload the fan and fresh-air timers on a
    /// quarter-hour boundary.
    pub fn triggers_timers(self) -> bool {
        matches!(
            self,
            ScheduleSymbol::Purge | ScheduleSymbol::CoolFlush | ScheduleSymbol::HeatFlush
        )
    }
}

// Weekly program grids, one row per day (Monday first), one character per
// 15-minute slot. Only the first 96 columns of a row are reachable.
const BIG_WEEK: [&str; 7] = [
    ".....................HHHHHHHHHHHHHHHVCCCCHHHHHHVCCCCC...P....HHHHHHHHHHHHHHHHH..P...................",
    ".................HHHHHH....HHHHHHHHHHHHHHHHHHHHVCCCCC...P...HHHHHHHHHHHHHVCCCC..P...................",
    ".....................HHHHHH......HHHHHHHHHHHHHHVCCCCC...P....HHHHHHVCCCCHHHHH...P...................",
    ".................HHHHHH....HHHHHHHHHHHHHHHHHHHHVCCCCC...P.....HHHHHPHHHHHHHHH...P...................",
    ".....................HHHHHHHHHHH..HHHHHVCCCCHHHHVCCCC...P....HHHHHHHVCCCC.......P...................",
    "..........................HHHHHHHHHHHHHHHHHHHHHHHH......P...........................................",
    ".........................HHHHHH.VCCCCCCCHHHHHHHHHH......P........HHHHHHHHH......P...................",
];

const SMALL_WEEK: [&str; 7] = [
    "....................WWWWWWW.....WWWWWWWWVCCCCCC.MMMM....P...SSSSSSSSWWWWVCCCCC..P..................",
    "....................WWWWWWW.....SSSSSSSSVCCCCCC.MMMM....P...WWWWWWWWSSSSSWWWW...P..................",
    "................WWWWWWWWWWWWWWWW.WWWWWWWVCCCCCCC........P...SSSSSSSSTWWWSSSSSS..P..................",
    ".....................WWWWWW.....SSSSSSSSP...............P...SSSSSSSS....VCCCCC..P..................",
    ".................WWWWWW..........MMMMMMMVCCCCCC.WWWW....P...SSSSSSSSVCCCCC......P..................",
    "........................WWWWWWWSSSSSWWWWVCCCCCCVCCCC....P.......................P...................",
    "............................WWWWWWWSSSSSTWWWW...........P.........SSSSSSSS......P..................",
];

const REFORMER_WEEK: [&str; 7] = [
    ".............................WWWW....WWWW....WWWW...............WWWWW...............................",
    "...................WWWWWW....WWWW....WWWW....WWWW...............WWWWW...............................",
    ".........................WWWW....WWWWWWWW....WWWW...............WWWWW...............................",
    ".........................WWWW....WWWWWWWWWWWW...................WWWWWWWWWWWWW.......................",
    "...................WWWWWW....WWWW....WWWW....WWWW...............WWWWWWWWW...........................",
    "............................WWWWW....WWWW....WWWW...................................................",
    "............................WWWWW....WWWW...........................................................",
];

fn week(room: Room) -> &'static [&'static str; 7] {
    match room {
        Room::Big => &BIG_WEEK,
        Room::Small => &SMALL_WEEK,
        Room::Reformer => &REFORMER_WEEK,
    }
}

/// Looks up the schedule symbol for a room at a given day and time of day.
///
/// `slot = time_of_day_s / 900` over 96 slots per day. Out-of-range days
/// or slots resolve to [`ScheduleSymbol::Idle`] rather than failing.
pub fn symbol(room: Room, day: u32, time_of_day_s: u32) -> ScheduleSymbol {
    let slot = (time_of_day_s / SLOT_SECONDS) as usize;
    week(room)
        .get(day as usize)
        .and_then(|row| row.as_bytes().get(slot))
        .map_or(ScheduleSymbol::Idle, |&b| ScheduleSymbol::from_char(b as char))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reachable_slot_is_in_the_alphabet() {
        for room in Room::ALL {
            for day in 0..7 {
                for slot in 0..SLOTS_PER_DAY as u32 {
                    let sym = symbol(room, day, slot * SLOT_SECONDS);
                    // from_char/as_char round-trip proves alphabet membership.
                    assert_eq!(ScheduleSymbol::from_char(sym.as_char()), sym);
                }
            }
        }
    }

    #[test]
    fn grids_cover_all_reachable_slots() {
        for week in [&BIG_WEEK, &SMALL_WEEK, &REFORMER_WEEK] {
            for row in week.iter() {
                assert!(row.len() >= SLOTS_PER_DAY);
            }
        }
    }

    #[test]
    fn midnight_monday_is_idle_everywhere() {
        for room in Room::ALL {
            assert_eq!(symbol(room, 0, 0), ScheduleSymbol::Idle);
        }
    }

    #[test]
    fn big_monday_morning_block_is_heat() {
        // Slot 21 (05:15) starts the Monday heat block in the Big room.
        assert_eq!(symbol(Room::Big, 0, 21 * SLOT_SECONDS), ScheduleSymbol::Heat);
        assert_eq!(symbol(Room::Big, 0, 20 * SLOT_SECONDS), ScheduleSymbol::Idle);
    }

    #[test]
    fn purge_column_is_shared_across_rooms() {
        // Slot 56 (14:00) is a purge slot in the Big and Small rooms on Monday.
        assert_eq!(symbol(Room::Big, 0, 56 * SLOT_SECONDS), ScheduleSymbol::Purge);
        assert_eq!(symbol(Room::Small, 0, 56 * SLOT_SECONDS), ScheduleSymbol::Purge);
        assert_eq!(symbol(Room::Reformer, 0, 56 * SLOT_SECONDS), ScheduleSymbol::Idle);
    }

    #[test]
    fn out_of_range_day_resolves_to_idle() {
        assert_eq!(symbol(Room::Big, 7, 0), ScheduleSymbol::Idle);
        assert_eq!(symbol(Room::Small, 99, 30_000), ScheduleSymbol::Idle);
    }

    #[test]
    fn lookup_is_constant_within_a_slot() {
        let start = 22 * SLOT_SECONDS;
        let expected = symbol(Room::Big, 0, start);
        for offset in [0, 1, 450, 899] {
            assert_eq!(symbol(Room::Big, 0, start + offset), expected);
        }
    }

    #[test]
    fn unknown_character_maps_to_idle() {
        assert_eq!(ScheduleSymbol::from_char('x'), ScheduleSymbol::Idle);
        assert_eq!(ScheduleSymbol::from_char(' '), ScheduleSymbol::Idle);
    }

    #[test]
    fn timer_trigger_set_is_exactly_p_v_t() {
        for c in ['P', 'V', 'T'] {
            assert!(ScheduleSymbol::from_char(c).triggers_timers());
        }
        for c in ['.', 'H', 'W', 'M', 'S', 'C'] {
            assert!(!ScheduleSymbol::from_char(c).triggers_timers());
        }
    }
}
