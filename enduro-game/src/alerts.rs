//! One-shot critical alerts for suspension and engine temperature.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::RaceConfig;
use crate::vehicle::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Suspension,
    EngineTemp,
}

/// A fired alert together with the reading that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    /// Unclamped suspension level or engine temperature.
    pub value: f64,
}

/// At most one alert per kind can fire on a lap.
pub type AlertSet = SmallVec<[Alert; 2]>;

/// Evaluate both thresholds, latching each alert the first time it fires.
///
/// Suspension is checked before engine temperature, so when both fire on the
/// same lap they are returned in that order.
pub fn check_alerts(vehicle: &mut Vehicle, cfg: &RaceConfig) -> AlertSet {
    let mut fired = AlertSet::new();

    if vehicle.suspension < cfg.suspension_alert_threshold && !vehicle.suspension_alert_shown {
        vehicle.suspension_alert_shown = true;
        fired.push(Alert {
            kind: AlertKind::Suspension,
            value: f64::from(vehicle.suspension),
        });
    }

    if vehicle.engine_temp > cfg.engine_alert_threshold && !vehicle.engine_alert_shown {
        vehicle.engine_alert_shown = true;
        fired.push(Alert {
            kind: AlertKind::EngineTemp,
            value: vehicle.engine_temp,
        });
    }

    fired
}
