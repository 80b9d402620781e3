//! Race configuration built once at startup from the tuning constants.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ENGINE_ALERT_THRESHOLD, ENGINE_HEAT_PER_LAP, FUEL_BURN_PER_LAP, INITIAL_ENGINE_TEMP,
    INITIAL_FUEL, INITIAL_SUSPENSION, LEVEL_MAX, PENALTY_ENGINE_HEAT, PENALTY_INTERVAL,
    PENALTY_SUSPENSION, REPORT_INTERVAL, SUSPENSION_ALERT_THRESHOLD, SUSPENSION_WEAR_PER_LAP,
    TOTAL_LAPS,
};

/// Errors raised when race configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum RaceConfigError {
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("{field} must not be negative (got {value:.2})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
}

/// Immutable tuning for a single race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    #[serde(default = "RaceConfig::default_total_laps")]
    pub total_laps: u32,
    #[serde(default = "RaceConfig::default_initial_suspension")]
    pub initial_suspension: f32,
    #[serde(default = "RaceConfig::default_initial_fuel")]
    pub initial_fuel: f32,
    #[serde(default = "RaceConfig::default_initial_engine_temp")]
    pub initial_engine_temp: f64,
    #[serde(default = "RaceConfig::default_suspension_wear_per_lap")]
    pub suspension_wear_per_lap: f32,
    #[serde(default = "RaceConfig::default_fuel_burn_per_lap")]
    pub fuel_burn_per_lap: f32,
    #[serde(default = "RaceConfig::default_engine_heat_per_lap")]
    pub engine_heat_per_lap: f64,
    #[serde(default = "RaceConfig::default_penalty_suspension")]
    pub penalty_suspension: f32,
    #[serde(default = "RaceConfig::default_penalty_engine_heat")]
    pub penalty_engine_heat: f64,
    /// Penalty applies on every lap that is a multiple of this value.
    #[serde(default = "RaceConfig::default_penalty_interval")]
    pub penalty_interval: u32,
    /// Suspension alert fires strictly below this level.
    #[serde(default = "RaceConfig::default_suspension_alert_threshold")]
    pub suspension_alert_threshold: f32,
    /// Engine alert fires strictly above this temperature.
    #[serde(default = "RaceConfig::default_engine_alert_threshold")]
    pub engine_alert_threshold: f64,
    /// A status report is printed on every lap that is a multiple of this value.
    #[serde(default = "RaceConfig::default_report_interval")]
    pub report_interval: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            total_laps: Self::default_total_laps(),
            initial_suspension: Self::default_initial_suspension(),
            initial_fuel: Self::default_initial_fuel(),
            initial_engine_temp: Self::default_initial_engine_temp(),
            suspension_wear_per_lap: Self::default_suspension_wear_per_lap(),
            fuel_burn_per_lap: Self::default_fuel_burn_per_lap(),
            engine_heat_per_lap: Self::default_engine_heat_per_lap(),
            penalty_suspension: Self::default_penalty_suspension(),
            penalty_engine_heat: Self::default_penalty_engine_heat(),
            penalty_interval: Self::default_penalty_interval(),
            suspension_alert_threshold: Self::default_suspension_alert_threshold(),
            engine_alert_threshold: Self::default_engine_alert_threshold(),
            report_interval: Self::default_report_interval(),
        }
    }
}

impl RaceConfig {
    const fn default_total_laps() -> u32 {
        TOTAL_LAPS
    }

    const fn default_initial_suspension() -> f32 {
        INITIAL_SUSPENSION
    }

    const fn default_initial_fuel() -> f32 {
        INITIAL_FUEL
    }

    const fn default_initial_engine_temp() -> f64 {
        INITIAL_ENGINE_TEMP
    }

    const fn default_suspension_wear_per_lap() -> f32 {
        SUSPENSION_WEAR_PER_LAP
    }

    const fn default_fuel_burn_per_lap() -> f32 {
        FUEL_BURN_PER_LAP
    }

    const fn default_engine_heat_per_lap() -> f64 {
        ENGINE_HEAT_PER_LAP
    }

    const fn default_penalty_suspension() -> f32 {
        PENALTY_SUSPENSION
    }

    const fn default_penalty_engine_heat() -> f64 {
        PENALTY_ENGINE_HEAT
    }

    const fn default_penalty_interval() -> u32 {
        PENALTY_INTERVAL
    }

    const fn default_suspension_alert_threshold() -> f32 {
        SUSPENSION_ALERT_THRESHOLD
    }

    const fn default_engine_alert_threshold() -> f64 {
        ENGINE_ALERT_THRESHOLD
    }

    const fn default_report_interval() -> u32 {
        REPORT_INTERVAL
    }

    /// True when the periodic penalty applies on `lap`.
    #[must_use]
    pub const fn is_penalty_lap(&self, lap: u32) -> bool {
        self.penalty_interval != 0 && lap % self.penalty_interval == 0
    }

    /// True when a periodic status report is due on `lap`.
    #[must_use]
    pub const fn is_report_lap(&self, lap: u32) -> bool {
        self.report_interval != 0 && lap % self.report_interval == 0
    }

    /// Validate structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), RaceConfigError> {
        self.validate_counts()?;
        self.validate_rates()?;
        self.validate_initial_levels()?;
        Ok(())
    }

    fn validate_counts(&self) -> Result<(), RaceConfigError> {
        for (field, value) in [
            ("total_laps", self.total_laps),
            ("penalty_interval", self.penalty_interval),
            ("report_interval", self.report_interval),
        ] {
            if value == 0 {
                return Err(RaceConfigError::ZeroCount { field });
            }
        }
        Ok(())
    }

    fn validate_rates(&self) -> Result<(), RaceConfigError> {
        for (field, value) in [
            (
                "suspension_wear_per_lap",
                f64::from(self.suspension_wear_per_lap),
            ),
            ("fuel_burn_per_lap", f64::from(self.fuel_burn_per_lap)),
            ("engine_heat_per_lap", self.engine_heat_per_lap),
            ("penalty_suspension", f64::from(self.penalty_suspension)),
            ("penalty_engine_heat", self.penalty_engine_heat),
        ] {
            if value < 0.0 {
                return Err(RaceConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    fn validate_initial_levels(&self) -> Result<(), RaceConfigError> {
        for (field, value) in [
            ("initial_suspension", self.initial_suspension),
            ("initial_fuel", self.initial_fuel),
            ("suspension_alert_threshold", self.suspension_alert_threshold),
        ] {
            if !(0.0..=LEVEL_MAX).contains(&value) {
                return Err(RaceConfigError::RangeViolation {
                    field,
                    min: 0.0,
                    max: LEVEL_MAX,
                    value,
                });
            }
        }
        Ok(())
    }
}
