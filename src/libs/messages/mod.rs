//! User-facing messages.
//!
//! Every line the CLI prints goes through [`Message`], so wording lives in
//! one place (`display.rs`) and call sites only pick a variant. The
//! `msg_*` macros in `macros.rs` decide whether a message goes to the
//! terminal or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use crate::libs::error::WorkerError;
use thiserror::Error;

/// A [`Message`] raised as an error by the command layer, for failures that
/// are not domain errors but still have user-facing wording.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct MessageError(pub Message);

impl From<&WorkerError> for Message {
    fn from(error: &WorkerError) -> Self {
        match error {
            WorkerError::InvalidProjectName => Message::InvalidProjectName,
            WorkerError::ProjectAlreadyExists(name) => Message::ProjectAlreadyExists(name.clone()),
            WorkerError::ProjectNotFound(name) => Message::ProjectNotFound(name.clone()),
            WorkerError::InvalidStartingPoint(value) => Message::InvalidStartingPoint(*value),
            WorkerError::InvalidTimeReportSummaryFormat(value) => Message::InvalidTimeReportSummaryFormat(*value),
            WorkerError::ActiveProject => Message::ProjectAlreadyClockedIn,
            WorkerError::InactiveProject => Message::ProjectNotClockedIn,
            WorkerError::ClockOutBeforeClockIn => Message::ClockOutBeforeClockIn,
            WorkerError::UnableToMarkActiveTimeIntervalAsRegistered => Message::UnableToRegisterActiveTime,
            WorkerError::RestoreRequiresEmptyDatabase => Message::RestoreRequiresEmptyDatabase,
            WorkerError::MultipleActiveTimeIntervals(name) => Message::MultipleActiveTimeIntervals(name.clone()),
        }
    }
}

/// Picks the message shown for a failed command.
///
/// Domain errors and [`MessageError`]s map to their own wording. Anything
/// else (storage, network, I/O) is logged in full and reported as a generic
/// failure without its detail.
pub fn from_error(error: &anyhow::Error) -> Message {
    if let Some(worker_error) = error.downcast_ref::<WorkerError>() {
        return Message::from(worker_error);
    }
    if let Some(MessageError(message)) = error.downcast_ref::<MessageError>() {
        return message.clone();
    }

    tracing::error!("{:#}", error);
    Message::OperationFailed
}
