//! Post-hoc runtime report computed from step records.

use std::fmt;

use super::types::{Room, RoomState, RunState, StepRecord};

/// Per-room duty-cycle and temperature aggregates for one run.
#[derive(Debug, Clone, Copy)]
pub struct RoomUsage {
    /// Seconds spent actively heating.
    pub heating_s: u64,
    /// Seconds spent actively cooling.
    pub cooling_s: u64,
    /// Seconds with the fan output on.
    pub fan_on_s: u64,
    /// Seconds with the fresh-air output on.
    pub fresh_air_on_s: u64,
    /// Seconds with the humidifier output on.
    pub humidifier_on_s: u64,
    /// Lowest temperature observed (°F).
    pub min_temp_f: f32,
    /// Highest temperature observed (°F).
    pub max_temp_f: f32,
}

impl RoomUsage {
    fn empty() -> Self {
        Self {
            heating_s: 0,
            cooling_s: 0,
            fan_on_s: 0,
            fresh_air_on_s: 0,
            humidifier_on_s: 0,
            min_temp_f: f32::INFINITY,
            max_temp_f: f32::NEG_INFINITY,
        }
    }

    fn absorb(&mut self, r: &RoomState) {
        match r.run_state {
            RunState::Heating => self.heating_s += 1,
            RunState::Cooling => self.cooling_s += 1,
            RunState::Idle => {}
        }
        self.fan_on_s += u64::from(r.fan);
        self.fresh_air_on_s += u64::from(r.fresh_air);
        self.humidifier_on_s += u64::from(r.humidifier);
        self.min_temp_f = self.min_temp_f.min(r.temperature_f);
        self.max_temp_f = self.max_temp_f.max(r.temperature_f);
    }
}

/// Aggregate runtime report derived from a complete run's step records.
///
/// Computed post-hoc from the record vector so the report always agrees
/// with the exported telemetry.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeReport {
    pub big: RoomUsage,
    pub small: RoomUsage,
    pub reformer: RoomUsage,
    /// Number of simulated seconds covered.
    pub steps: u64,
}

impl RuntimeReport {
    /// Computes the report from the complete record vector.
    pub fn from_records(records: &[StepRecord]) -> Self {
        let mut big = RoomUsage::empty();
        let mut small = RoomUsage::empty();
        let mut reformer = RoomUsage::empty();

        for rec in records {
            big.absorb(&rec.big);
            small.absorb(&rec.small);
            reformer.absorb(&rec.reformer);
        }

        if records.is_empty() {
            // Leave extremes at 0 rather than infinities for display.
            for usage in [&mut big, &mut small, &mut reformer] {
                usage.min_temp_f = 0.0;
                usage.max_temp_f = 0.0;
            }
        }

        Self {
            big,
            small,
            reformer,
            steps: records.len() as u64,
        }
    }

    /// Returns the aggregates for the given room.
    pub fn room(&self, room: Room) -> &RoomUsage {
        match room {
            Room::Big => &self.big,
            Room::Small => &self.small,
            Room::Reformer => &self.reformer,
        }
    }
}

impl fmt::Display for RuntimeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Runtime Report ({} s simulated) ---", self.steps)?;
        for room in Room::ALL {
            let u = self.room(room);
            writeln!(
                f,
                "{:<9} heat={:>6}s cool={:>6}s fan={:>6}s fa={:>6}s hum={:>6}s temp=[{:.1}, {:.1}]°F",
                room.label(),
                u.heating_s,
                u.cooling_s,
                u.fan_on_s,
                u.fresh_air_on_s,
                u.humidifier_on_s,
                u.min_temp_f,
                u.max_temp_f,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::types::RoomState;

    fn record(big: RoomState) -> StepRecord {
        StepRecord {
            day: 0,
            time_of_day_s: 0,
            ambient_temp_f: 75.0,
            big,
            small: RoomState::default(),
            reformer: RoomState::default(),
        }
    }

    #[test]
    fn counts_run_state_seconds() {
        let mut heating = RoomState::default();
        heating.run_state = RunState::Heating;
        heating.humidifier = true;
        let mut cooling = RoomState::default();
        cooling.run_state = RunState::Cooling;
        cooling.fresh_air = true;

        let records = vec![record(heating), record(heating), record(cooling)];
        let report = RuntimeReport::from_records(&records);

        assert_eq!(report.big.heating_s, 2);
        assert_eq!(report.big.cooling_s, 1);
        assert_eq!(report.big.humidifier_on_s, 2);
        assert_eq!(report.big.fresh_air_on_s, 1);
        assert_eq!(report.steps, 3);
    }

    #[test]
    fn tracks_temperature_extremes() {
        let mut warm = RoomState::default();
        warm.temperature_f = 88.5;
        let mut cold = RoomState::default();
        cold.temperature_f = 61.0;

        let report = RuntimeReport::from_records(&[record(warm), record(cold)]);
        assert_eq!(report.big.min_temp_f, 61.0);
        assert_eq!(report.big.max_temp_f, 88.5);
        // Untouched rooms still report their constant temperature.
        assert_eq!(report.small.min_temp_f, 70.0);
        assert_eq!(report.small.max_temp_f, 70.0);
    }

    #[test]
    fn empty_records_produce_zeroed_report() {
        let report = RuntimeReport::from_records(&[]);
        assert_eq!(report.steps, 0);
        assert_eq!(report.big.heating_s, 0);
        assert_eq!(report.big.min_temp_f, 0.0);
        assert_eq!(report.big.max_temp_f, 0.0);
    }

    #[test]
    fn display_does_not_panic() {
        let report = RuntimeReport::from_records(&[record(RoomState::default())]);
        let s = format!("{report}");
        assert!(s.contains("Runtime Report"));
        assert!(s.contains("Reformer"));
    }
}
