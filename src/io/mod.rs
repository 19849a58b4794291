/// CSV telemetry export for simulation step records.
pub mod export;
