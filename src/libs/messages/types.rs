#[derive(Debug, Clone)]
pub enum Message {
    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectRemoved(String),
    ProjectAlreadyExists(String),
    ProjectNotFound(String),
    ProjectNotFoundWithId(i64),
    InvalidProjectName,
    NoProjectsFound,
    ProjectsHeader,
    ConfirmRemoveProject(String),
    ProjectRemoveCancelled,
    ProjectDeepLink(String),

    // === CLOCK MESSAGES ===
    ClockedIn(String, String),          // project, time
    ClockedOut(String, String, String), // project, time, duration
    ProjectAlreadyClockedIn,
    ProjectNotClockedIn,
    ClockOutBeforeClockIn,
    ConfirmClockOut(String),
    ClockOutCancelled,
    InvalidClockTime(String),

    // === STATUS MESSAGES ===
    NoActiveProjects,
    ActiveProjectsHeader,
    ChronometerLine(String, String), // project, elapsed

    // === REPORT MESSAGES ===
    TimeReportHeader(String),
    TimeReportWeeksHeader(String),
    NoTimeReports(String),
    TimeReportPage(u32, i64), // page, total groups
    TimeSummaryHeader(String),

    // === REGISTER MESSAGES ===
    TimeRegistered(usize),
    TimeUnregistered(usize),
    UnableToRegisterActiveTime,
    NoTimeIntervalsSelected,
    InvalidDate(String),

    // === INTERVAL MESSAGES ===
    TimeIntervalRemoved(i64),
    TimeIntervalNotFound(i64),

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingUpdated(String, String),
    InvalidStartingPoint(i64),
    InvalidTimeReportSummaryFormat(i64),

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigServerSkipped,
    ServerNotConfigured,
    PromptApiUrl,
    PromptAuthToken,

    // === BACKUP MESSAGES ===
    BackupWritten(String),
    BackupUploaded(String),
    BackupUploadFailed(String),
    BackupRestored(usize, usize), // projects, time intervals
    RestoreRequiresEmptyDatabase,
    MultipleActiveTimeIntervals(String),

    // === DEEP LINK MESSAGES ===
    InvalidDeepLink(String),
    MissingDeepLink,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    LegacyDataImported(usize, usize), // projects, time intervals

    // === GENERIC MESSAGES ===
    OperationFailed,
}
