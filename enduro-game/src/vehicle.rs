//! Vehicle wear and consumption model
use serde::{Deserialize, Serialize};

use crate::config::RaceConfig;
use crate::result::FailureCause;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Suspension integrity (percentage). May drop below zero; reports clamp it.
    pub suspension: f32,
    /// Remaining fuel (percentage). May drop below zero; reports clamp it.
    pub fuel: f32,
    /// Engine temperature in degrees Celsius, unbounded above.
    pub engine_temp: f64,
    /// Latches once the suspension alert has been emitted.
    #[serde(default)]
    pub suspension_alert_shown: bool,
    /// Latches once the engine temperature alert has been emitted.
    #[serde(default)]
    pub engine_alert_shown: bool,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new(&RaceConfig::default())
    }
}

impl Vehicle {
    /// Build a vehicle at race-start conditions.
    #[must_use]
    pub const fn new(cfg: &RaceConfig) -> Self {
        Self {
            suspension: cfg.initial_suspension,
            fuel: cfg.initial_fuel,
            engine_temp: cfg.initial_engine_temp,
            suspension_alert_shown: false,
            engine_alert_shown: false,
        }
    }

    /// Apply one lap of wear, fuel burn and engine heat. No clamping.
    pub fn run_lap(&mut self, cfg: &RaceConfig) {
        self.suspension -= cfg.suspension_wear_per_lap;
        self.fuel -= cfg.fuel_burn_per_lap;
        self.engine_temp += cfg.engine_heat_per_lap;
    }

    /// Apply the periodic penalty on top of the lap's regular wear.
    pub fn apply_penalty(&mut self, cfg: &RaceConfig) {
        self.suspension -= cfg.penalty_suspension;
        self.engine_temp += cfg.penalty_engine_heat;
    }

    /// Suspension level as shown in reports.
    #[must_use]
    pub fn display_suspension(&self) -> f32 {
        clamp_display(self.suspension)
    }

    /// Fuel level as shown in reports.
    #[must_use]
    pub fn display_fuel(&self) -> f32 {
        clamp_display(self.fuel)
    }

    #[must_use]
    pub fn suspension_failed(&self) -> bool {
        self.suspension <= 0.0
    }

    #[must_use]
    pub fn out_of_fuel(&self) -> bool {
        self.fuel <= 0.0
    }

    /// Race-ending condition, if any. Suspension failure wins when both hold.
    #[must_use]
    pub fn failure_cause(&self) -> Option<FailureCause> {
        if self.suspension_failed() {
            Some(FailureCause::SuspensionFailure)
        } else if self.out_of_fuel() {
            Some(FailureCause::FuelExhausted)
        } else {
            None
        }
    }
}

// Non-positive levels show as a plain zero, never `-0.00`.
fn clamp_display(level: f32) -> f32 {
    if level > 0.0 { level } else { 0.0 }
}
