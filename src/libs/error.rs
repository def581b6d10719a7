//! Domain errors raised by the worker use cases.
//!
//! These are the recoverable, user-facing failures: validation of input,
//! clock state preconditions and restore guards. Storage and network failures
//! are not represented here, they travel as `anyhow::Error` and are reported
//! as a generic failure by the command layer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    #[error("Project name cannot be empty")]
    InvalidProjectName,

    #[error("Project '{0}' already exists")]
    ProjectAlreadyExists(String),

    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    #[error("Invalid starting point for time summary: {0}")]
    InvalidStartingPoint(i64),

    #[error("Invalid time report summary format: {0}")]
    InvalidTimeReportSummaryFormat(i64),

    #[error("Project is already clocked in")]
    ActiveProject,

    #[error("Project is not clocked in")]
    InactiveProject,

    #[error("Clock out cannot happen before clock in")]
    ClockOutBeforeClockIn,

    #[error("Unable to mark active time interval as registered")]
    UnableToMarkActiveTimeIntervalAsRegistered,

    #[error("Restore requires an empty database")]
    RestoreRequiresEmptyDatabase,

    #[error("Project '{0}' has more than one running time interval")]
    MultipleActiveTimeIntervals(String),
}
