//! Three-room studio HVAC controller simulator.

/// TOML scenario configuration and preset definitions.
pub mod config;
pub mod io;
/// Simulation engine, schedule, thermostat, timer, and output modules.
pub mod sim;
