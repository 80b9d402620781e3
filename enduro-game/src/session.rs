use std::io::{self, Write};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::alerts::{AlertSet, check_alerts};
use crate::config::RaceConfig;
use crate::report::{
    write_alert, write_final_report, write_header, write_penalty_notice, write_status_report,
};
use crate::result::{RaceOutcome, RaceStatus};
use crate::vehicle::Vehicle;

/// Everything a single lap produced, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapOutcome {
    pub lap: u32,
    pub penalty_applied: bool,
    pub alerts: AlertSet,
    pub report_due: bool,
    /// Status after the end-of-lap failure check.
    pub status: RaceStatus,
}

/// High-level session binding the race configuration to the one vehicle it drives.
#[derive(Debug, Clone)]
pub struct RaceSession {
    config: RaceConfig,
    vehicle: Vehicle,
    lap: u32,
    status: RaceStatus,
}

impl RaceSession {
    /// Fresh session with the vehicle at race-start conditions.
    #[must_use]
    pub fn new(config: RaceConfig) -> Self {
        let vehicle = Vehicle::new(&config);
        Self::from_vehicle(config, vehicle)
    }

    /// Session starting at lap 0 from an arbitrary vehicle snapshot.
    #[must_use]
    pub const fn from_vehicle(config: RaceConfig, vehicle: Vehicle) -> Self {
        Self {
            config,
            vehicle,
            lap: 0,
            status: RaceStatus::Running,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RaceConfig {
        &self.config
    }

    #[must_use]
    pub const fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Last lap processed; 0 before the race starts.
    #[must_use]
    pub const fn lap(&self) -> u32 {
        self.lap
    }

    #[must_use]
    pub const fn status(&self) -> RaceStatus {
        self.status
    }

    /// Advance the race by one lap.
    ///
    /// Order is fixed: wear, penalty, alerts, report scheduling, failure
    /// check. Returns `None` once the race has reached a terminal state.
    pub fn tick_lap(&mut self) -> Option<LapOutcome> {
        if self.status.is_terminal() {
            return None;
        }

        self.lap += 1;
        let lap = self.lap;
        self.vehicle.run_lap(&self.config);

        let penalty_applied = self.config.is_penalty_lap(lap);
        if penalty_applied {
            self.vehicle.apply_penalty(&self.config);
            info!("penalty applied on lap {lap}");
        }

        let alerts = check_alerts(&mut self.vehicle, &self.config);
        for alert in &alerts {
            info!("lap {lap}: {:?} alert at {:.1}", alert.kind, alert.value);
        }

        let report_due = self.config.is_report_lap(lap);

        if let Some(cause) = self.vehicle.failure_cause() {
            self.status = RaceStatus::Failed;
            info!("race failed on lap {lap}: {cause}");
        } else if lap >= self.config.total_laps {
            self.status = RaceStatus::Completed;
            info!("race completed after {lap} laps");
        }

        debug!(
            "lap {lap}: suspension {:.2}, fuel {:.2}, engine {:.2}",
            self.vehicle.suspension, self.vehicle.fuel, self.vehicle.engine_temp
        );

        Some(LapOutcome {
            lap,
            penalty_applied,
            alerts,
            report_due,
            status: self.status,
        })
    }

    /// Terminal summary, or `None` while the race is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<RaceOutcome> {
        if !self.status.is_terminal() {
            return None;
        }
        Some(self.snapshot())
    }

    fn snapshot(&self) -> RaceOutcome {
        RaceOutcome {
            status: self.status,
            final_lap: self.lap,
            cause: self.vehicle.failure_cause(),
            vehicle: self.vehicle.clone(),
        }
    }

    /// Drive the race to its end, writing the full transcript to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<RaceOutcome> {
        write_header(out)?;
        write_status_report(out, &self.vehicle, self.lap)?;

        while let Some(lap) = self.tick_lap() {
            self.render_lap(out, &lap)?;
        }

        let outcome = self.snapshot();
        write_final_report(
            out,
            &self.vehicle,
            outcome.final_lap,
            outcome.completed(),
            &self.config,
        )?;
        Ok(outcome)
    }

    fn render_lap<W: Write + ?Sized>(&self, out: &mut W, lap: &LapOutcome) -> io::Result<()> {
        if lap.penalty_applied {
            write_penalty_notice(out, lap.lap)?;
        }
        for alert in &lap.alerts {
            write_alert(out, alert)?;
        }
        if lap.report_due {
            write_status_report(out, &self.vehicle, lap.lap)?;
        }
        Ok(())
    }
}

/// Run a fresh race with `config`, writing the transcript to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_race<W: Write + ?Sized>(config: &RaceConfig, out: &mut W) -> io::Result<RaceOutcome> {
    RaceSession::new(config.clone()).run(out)
}
