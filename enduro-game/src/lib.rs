//! Enduro Race Engine
//!
//! Platform-agnostic race logic for a single-vehicle off-road endurance run.
//! This crate owns the wear model, penalties, one-shot alerts and the text
//! transcript; it performs no process I/O of its own and renders into any
//! [`std::io::Write`] sink.

pub mod alerts;
pub mod config;
mod constants;
pub mod report;
pub mod result;
pub mod session;
pub mod vehicle;

// Re-export commonly used types
pub use alerts::{Alert, AlertKind, AlertSet, check_alerts};
pub use config::{RaceConfig, RaceConfigError};
pub use report::{
    write_alert, write_final_report, write_header, write_penalty_notice, write_status_report,
};
pub use result::{FailureCause, RaceOutcome, RaceStatus};
pub use session::{LapOutcome, RaceSession, run_race};
pub use vehicle::Vehicle;
