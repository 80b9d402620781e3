//! Race outcome types
use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

/// Lifecycle of a single race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Running,
    /// Suspension or fuel ran out before the last lap.
    Failed,
    /// Every lap was completed.
    Completed,
}

impl RaceStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Why a race ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    /// Suspension integrity reached zero or below
    SuspensionFailure,
    /// Fuel level reached zero or below
    FuelExhausted,
}

impl FailureCause {
    /// Sentence used in the final report.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SuspensionFailure => "Total suspension failure",
            Self::FuelExhausted => "Fuel exhaustion",
        }
    }
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureCause::SuspensionFailure => write!(f, "suspension_failure"),
            FailureCause::FuelExhausted => write!(f, "fuel_exhausted"),
        }
    }
}

/// Terminal summary of a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceOutcome {
    pub status: RaceStatus,
    /// Lap the race ended on: the failing lap, or the total lap count.
    pub final_lap: u32,
    pub cause: Option<FailureCause>,
    pub vehicle: Vehicle,
}

impl RaceOutcome {
    #[must_use]
    pub const fn completed(&self) -> bool {
        matches!(self.status, RaceStatus::Completed)
    }
}
