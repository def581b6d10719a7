//! Text of every [`Message`].
//!
//! Sentence case, no trailing period on headers, parameters interpolated in
//! place. Emoji prefixes are added by the `msg_*` macros, not here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created", name),
            Message::ProjectRemoved(name) => format!("Project '{}' removed with all of its time", name),
            Message::ProjectAlreadyExists(name) => format!("Project '{}' already exists", name),
            Message::ProjectNotFound(name) => format!("Project '{}' not found", name),
            Message::ProjectNotFoundWithId(id) => format!("Project with ID {} not found", id),
            Message::InvalidProjectName => "Project name cannot be empty".to_string(),
            Message::NoProjectsFound => "No projects yet. Create one with `worker project create <name>`".to_string(),
            Message::ProjectsHeader => "Projects".to_string(),
            Message::ConfirmRemoveProject(name) => format!("Remove project '{}' and all of its registered time?", name),
            Message::ProjectRemoveCancelled => "Project was not removed".to_string(),
            Message::ProjectDeepLink(uri) => format!("Link: {}", uri),

            // === CLOCK MESSAGES ===
            Message::ClockedIn(name, time) => format!("Clocked in to '{}' at {}", name, time),
            Message::ClockedOut(name, time, duration) => format!("Clocked out of '{}' at {} ({})", name, time, duration),
            Message::ProjectAlreadyClockedIn => "Project is already clocked in".to_string(),
            Message::ProjectNotClockedIn => "Project is not clocked in".to_string(),
            Message::ClockOutBeforeClockIn => "Clock out time is before the clock in time".to_string(),
            Message::ConfirmClockOut(name) => format!("Clock out of '{}'?", name),
            Message::ClockOutCancelled => "Still clocked in".to_string(),
            Message::InvalidClockTime(value) => format!("Invalid time '{}', expected HH:MM or YYYY-MM-DD HH:MM", value),

            // === STATUS MESSAGES ===
            Message::NoActiveProjects => "Not clocked in to any project".to_string(),
            Message::ActiveProjectsHeader => "Clocked in".to_string(),
            Message::ChronometerLine(name, elapsed) if elapsed.is_empty() => name.clone(),
            Message::ChronometerLine(name, elapsed) => format!("{}: {}", name, elapsed),

            // === REPORT MESSAGES ===
            Message::TimeReportHeader(name) => format!("Time report for '{}'", name),
            Message::TimeReportWeeksHeader(name) => format!("Weekly time report for '{}'", name),
            Message::NoTimeReports(name) => format!("No time registered for '{}' yet", name),
            Message::TimeReportPage(page, total) => format!("Page {} ({} in total)", page, total),
            Message::TimeSummaryHeader(since) => format!("Time summary since {}", since),

            // === REGISTER MESSAGES ===
            Message::TimeRegistered(count) => format!("Marked {} time interval(s) as registered", count),
            Message::TimeUnregistered(count) => format!("Unmarked {} time interval(s) as registered", count),
            Message::UnableToRegisterActiveTime => "Unable to mark an active time interval as registered, clock out first".to_string(),
            Message::NoTimeIntervalsSelected => "No time intervals selected".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected 'today' or YYYY-MM-DD", value),

            // === INTERVAL MESSAGES ===
            Message::TimeIntervalRemoved(id) => format!("Time interval {} removed", id),
            Message::TimeIntervalNotFound(id) => format!("Time interval {} not found", id),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Settings".to_string(),
            Message::SettingUpdated(key, value) => format!("Setting '{}' set to {}", key, value),
            Message::InvalidStartingPoint(value) => format!("Invalid starting point for time summary: {}", value),
            Message::InvalidTimeReportSummaryFormat(value) => format!("Invalid time report summary format: {}", value),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigServerSkipped => "No backup server configured, uploads are disabled".to_string(),
            Message::ServerNotConfigured => "Backup server is not configured. Run `worker init` first".to_string(),
            Message::PromptApiUrl => "Backup server URL (leave empty to skip)".to_string(),
            Message::PromptAuthToken => "Backup server token".to_string(),

            // === BACKUP MESSAGES ===
            Message::BackupWritten(path) => format!("Backup written to {}", path),
            Message::BackupUploaded(url) => format!("Backup uploaded to {}", url),
            Message::BackupUploadFailed(status) => format!("Backup upload failed: {}", status),
            Message::BackupRestored(projects, intervals) => {
                format!("Restored {} project(s) with {} time interval(s)", projects, intervals)
            }
            Message::RestoreRequiresEmptyDatabase => "Restore requires an empty database".to_string(),
            Message::MultipleActiveTimeIntervals(name) => format!("Backup has more than one running time interval for project '{}'", name),

            // === DEEP LINK MESSAGES ===
            Message::InvalidDeepLink(uri) => format!("Unable to read project from link '{}'", uri),
            Message::MissingDeepLink => "No link was given".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::LegacyDataImported(projects, intervals) => {
                format!("Imported {} project(s) and {} time interval(s) from the old database layout", projects, intervals)
            }

            // === GENERIC MESSAGES ===
            Message::OperationFailed => "Operation failed. Set WORKER_DEBUG=1 to see the cause".to_string(),
        };

        write!(f, "{}", text)
    }
}
