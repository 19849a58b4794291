//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::clock::{DAYS_PER_WEEK, SECONDS_PER_DAY};
use crate::sim::types::{RoomState, SimulationState};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation timing and global parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Big room external inputs.
    #[serde(default)]
    pub big: RoomConfig,
    /// Small room external inputs.
    #[serde(default)]
    pub small: RoomConfig,
    /// Reformer room external inputs (no purge request).
    #[serde(default)]
    pub reformer: ReformerConfig,
}

/// Simulation timing and global parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Starting day of week, 0 (Monday) through 6 (Sunday).
    pub start_day: u32,
    /// Starting time of day in seconds since midnight (0–86399).
    pub start_time_s: u32,
    /// Number of one-second steps to simulate (must be > 0).
    pub duration_s: u64,
    /// Outdoor ambient temperature (°F).
    pub ambient_temp_f: f32,
    /// Readable-log interval in seconds; 0 disables per-step logging.
    pub log_every_s: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_day: 0,
            start_time_s: 0,
            duration_s: u64::from(SECONDS_PER_DAY),
            ambient_temp_f: 75.0,
            log_every_s: 900,
        }
    }
}

/// External inputs for a room with purge equipment (Big, Small).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomConfig {
    /// Manual purge request held for the whole run.
    pub purge_request: bool,
    /// Manual temperature override (°F); pins the room temperature.
    pub temp_override_f: Option<f32>,
    /// Suppresses temperature drift without pinning a value.
    pub temp_locked: bool,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            purge_request: false,
            temp_override_f: None,
            temp_locked: false,
        }
    }
}

/// External inputs for the Reformer room, which has no purge input.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReformerConfig {
    /// Manual temperature override (°F); pins the room temperature.
    pub temp_override_f: Option<f32>,
    /// Suppresses temperature drift without pinning a value.
    pub temp_locked: bool,
}

impl Default for ReformerConfig {
    fn default() -> Self {
        Self {
            temp_override_f: None,
            temp_locked: false,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.start_day"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: defaults everywhere, one simulated
    /// day from Monday midnight at 75°F ambient.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            big: RoomConfig::default(),
            small: RoomConfig::default(),
            reformer: ReformerConfig::default(),
        }
    }

    /// Returns the heat-wave preset: 100°F ambient, exercising the heat
    /// adjustment on every heat call.
    pub fn heat_wave() -> Self {
        Self {
            simulation: SimulationConfig {
                ambient_temp_f: 100.0,
                ..SimulationConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the purge-drill preset: both purge requests held on.
    pub fn purge_drill() -> Self {
        Self {
            big: RoomConfig {
                purge_request: true,
                ..RoomConfig::default()
            },
            small: RoomConfig {
                purge_request: true,
                ..RoomConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &'static [&'static str] = &["baseline", "heat_wave", "purge_drill"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "heat_wave" => Ok(Self::heat_wave()),
            "purge_drill" => Ok(Self::purge_drill()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.start_day >= DAYS_PER_WEEK {
            errors.push(ConfigError {
                field: "simulation.start_day".into(),
                message: "must be in 0..=6".into(),
            });
        }
        if s.start_time_s >= SECONDS_PER_DAY {
            errors.push(ConfigError {
                field: "simulation.start_time_s".into(),
                message: "must be in 0..=86399".into(),
            });
        }
        if s.duration_s == 0 {
            errors.push(ConfigError {
                field: "simulation.duration_s".into(),
                message: "must be > 0".into(),
            });
        }
        if !s.ambient_temp_f.is_finite() {
            errors.push(ConfigError {
                field: "simulation.ambient_temp_f".into(),
                message: "must be finite".into(),
            });
        }

        let overrides = [
            ("big.temp_override_f", self.big.temp_override_f),
            ("small.temp_override_f", self.small.temp_override_f),
            ("reformer.temp_override_f", self.reformer.temp_override_f),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                if !v.is_finite() {
                    errors.push(ConfigError {
                        field: field.into(),
                        message: "must be finite".into(),
                    });
                }
            }
        }

        errors
    }

    /// Builds the initial simulation state described by this scenario.
    pub fn initial_state(&self) -> SimulationState {
        let room = |override_f: Option<f32>, locked: bool| RoomState {
            temp_override_f: override_f,
            temp_locked: locked,
            ..RoomState::default()
        };

        SimulationState {
            time_of_day_s: self.simulation.start_time_s,
            day: self.simulation.start_day,
            ambient_temp_f: self.simulation.ambient_temp_f,
            big: room(self.big.temp_override_f, self.big.temp_locked),
            small: room(self.small.temp_override_f, self.small.temp_locked),
            reformer: room(self.reformer.temp_override_f, self.reformer.temp_locked),
            big_purge_request: self.big.purge_request,
            small_purge_request: self.small.purge_request,
        }
    }
}
