//! CSV export for simulation step records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::{RoomState, StepRecord};

/// Schema v1 column header for CSV telemetry export.
const HEADER: &str = "day,time_s,ambient_f,\
                      big_temp_f,big_setpoint_f,big_mode,big_run_state,big_fan,big_fresh_air,\
                      big_humidifier,big_fan_timer_s,big_fa_timer_s,big_purge,\
                      small_temp_f,small_setpoint_f,small_mode,small_run_state,small_fan,\
                      small_fresh_air,small_humidifier,small_fan_timer_s,small_fa_timer_s,small_purge,\
                      ref_temp_f,ref_setpoint_f,ref_mode,ref_run_state,ref_fan,ref_fresh_air,\
                      ref_humidifier,ref_fan_timer_s,ref_fa_timer_s,ref_purge";

fn push_room(fields: &mut Vec<String>, r: &RoomState) {
    fields.push(format!("{:.4}", r.temperature_f));
    fields.push(format!("{:.1}", r.setpoint_f));
    fields.push(r.mode.as_str().to_string());
    fields.push(r.run_state.as_str().to_string());
    fields.push(r.fan.to_string());
    fields.push(r.fresh_air.to_string());
    fields.push(r.humidifier.to_string());
    fields.push(r.fan_timer_s.to_string());
    fields.push(r.fresh_air_timer_s.to_string());
    fields.push(r.purge_active.to_string());
}

/// Exports simulation records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per recorded step using
/// the schema v1 column layout. Produces deterministic output for
/// identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[StepRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes simulation records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[StepRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for rec in records {
        let mut fields = Vec::with_capacity(33);
        fields.push(rec.day.to_string());
        fields.push(rec.time_of_day_s.to_string());
        fields.push(format!("{:.1}", rec.ambient_temp_f));
        push_room(&mut fields, &rec.big);
        push_room(&mut fields, &rec.small);
        push_room(&mut fields, &rec.reformer);
        wtr.write_record(&fields)?;
    }

    wtr.flush()?;
    Ok(())
}
