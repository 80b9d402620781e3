//! Text rendering for the race transcript.
//!
//! Every function writes into an arbitrary [`Write`] sink and never touches
//! the vehicle beyond reading it, so the same state always renders the same
//! bytes.
use std::io::{self, Write};

use crate::alerts::{Alert, AlertKind};
use crate::config::RaceConfig;
use crate::vehicle::Vehicle;

const REPORT_RULE: &str = "=================================";
const BANNER_RULE: &str = "##################################################";

/// Opening lines printed before the lap-0 report.
pub fn write_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "### ENDURANCE RACE SIMULATION START ###")?;
    writeln!(out)?;
    writeln!(out, "Initial conditions:")
}

/// Formatted status block. Suspension and fuel never show below zero.
pub fn write_status_report<W: Write + ?Sized>(
    out: &mut W,
    vehicle: &Vehicle,
    lap: u32,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- LAP {lap} REPORT ---")?;
    writeln!(out, "{REPORT_RULE}")?;
    writeln!(out, "Suspension...: {:.2}%", vehicle.display_suspension())?;
    writeln!(out, "Fuel.........: {:.2}%", vehicle.display_fuel())?;
    writeln!(out, "Engine.......: {:.2}°C", vehicle.engine_temp)?;
    writeln!(out, "{REPORT_RULE}")?;
    writeln!(out)
}

pub fn write_penalty_notice<W: Write + ?Sized>(out: &mut W, lap: u32) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, ">>> Penalty applied on lap {lap}! <<<")
}

pub fn write_alert<W: Write + ?Sized>(out: &mut W, alert: &Alert) -> io::Result<()> {
    writeln!(out)?;
    match alert.kind {
        AlertKind::Suspension => writeln!(
            out,
            "!!! ALERT: Critical suspension level ({:.1}%) !!!",
            alert.value
        ),
        AlertKind::EngineTemp => writeln!(
            out,
            "!!! ALERT: Excessive engine temperature ({:.1}°C) !!!",
            alert.value
        ),
    }
}

/// Closing banner, verdict and final status block.
///
/// On failure the cause is read from the vehicle itself, with suspension
/// failure reported ahead of fuel exhaustion.
pub fn write_final_report<W: Write + ?Sized>(
    out: &mut W,
    vehicle: &Vehicle,
    final_lap: u32,
    completed: bool,
    cfg: &RaceConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "### END OF SIMULATION ###")?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out)?;

    if completed {
        writeln!(out, "RACE COMPLETED SUCCESSFULLY!")?;
        writeln!(out, "The vehicle completed all {} laps.", cfg.total_laps)?;
    } else {
        writeln!(out, "CRITICAL FAILURE ON LAP {final_lap}!")?;
        if let Some(cause) = vehicle.failure_cause() {
            writeln!(out, "Cause: {}.", cause.description())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "--- FINAL VEHICLE STATE ---")?;
    write_status_report(out, vehicle, final_lap)
}
