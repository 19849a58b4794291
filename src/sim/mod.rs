/// Simulation clock for second-by-second time and day-of-week tracking.
pub mod clock;
pub mod engine;
/// Boolean output derivation from run state, timers, and purge flags.
pub mod outputs;
pub mod report;
/// Fixed weekly program tables and symbol lookup.
pub mod schedule;
pub mod thermostat;
/// Fan and fresh-air countdown timer management.
pub mod timers;
pub mod types;
