//! Centralized tuning constants for the enduro race.
//!
//! These values define the deterministic math for the whole simulation.
//! Keeping them together ensures the race can only be adjusted via code
//! changes reviewed in version control. They feed `RaceConfig::default()`
//! and are not read anywhere else.

// Race length ---------------------------------------------------------------
pub(crate) const TOTAL_LAPS: u32 = 100;

// Starting levels -----------------------------------------------------------
pub(crate) const INITIAL_SUSPENSION: f32 = 100.0;
pub(crate) const INITIAL_FUEL: f32 = 100.0;
pub(crate) const INITIAL_ENGINE_TEMP: f64 = 80.0;
pub(crate) const LEVEL_MAX: f32 = 100.0;

// Per-lap wear --------------------------------------------------------------
pub(crate) const SUSPENSION_WEAR_PER_LAP: f32 = 2.0;
pub(crate) const FUEL_BURN_PER_LAP: f32 = 1.5;
pub(crate) const ENGINE_HEAT_PER_LAP: f64 = 1.0;

// Periodic penalty ----------------------------------------------------------
pub(crate) const PENALTY_SUSPENSION: f32 = 3.0;
pub(crate) const PENALTY_ENGINE_HEAT: f64 = 5.0;
pub(crate) const PENALTY_INTERVAL: u32 = 10;

// Alert thresholds ----------------------------------------------------------
pub(crate) const SUSPENSION_ALERT_THRESHOLD: f32 = 20.0;
pub(crate) const ENGINE_ALERT_THRESHOLD: f64 = 115.0;

// Reporting -----------------------------------------------------------------
pub(crate) const REPORT_INTERVAL: u32 = 20;
