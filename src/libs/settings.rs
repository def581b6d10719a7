//! Typed key-value settings.
//!
//! Values are booleans or integers keyed by [`AppKey`]. Each read supplies
//! its own default, so a missing key (or a value of the wrong type) never
//! fails. [`FileKeyValueStore`] re-reads `settings.json` on every access, so
//! a change made by another process is visible to the next query.

use super::data_storage::DataStorage;
use super::formatter::TimeReportSummaryFormat;
use super::time::TimeIntervalStartingPoint;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::path::PathBuf;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppKey {
    HideRegisteredTime,
    ConfirmClockOut,
    OngoingNotificationEnabled,
    OngoingNotificationChronometerEnabled,
    TimeSummary,
    TimeReportSummaryFormat,
}

impl AppKey {
    pub const ALL: [AppKey; 6] = [
        AppKey::HideRegisteredTime,
        AppKey::ConfirmClockOut,
        AppKey::OngoingNotificationEnabled,
        AppKey::OngoingNotificationChronometerEnabled,
        AppKey::TimeSummary,
        AppKey::TimeReportSummaryFormat,
    ];

    /// Name of the key in `settings.json`.
    pub fn raw_value(&self) -> &'static str {
        match self {
            AppKey::HideRegisteredTime => "hide_registered_time",
            AppKey::ConfirmClockOut => "confirm_clock_out",
            AppKey::OngoingNotificationEnabled => "ongoing_notification_enabled",
            AppKey::OngoingNotificationChronometerEnabled => "ongoing_notification_chronometer_enabled",
            AppKey::TimeSummary => "time_summary",
            AppKey::TimeReportSummaryFormat => "time_report_summary_format",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
}

pub trait KeyValueStore {
    fn bool(&self, key: AppKey, default: bool) -> bool;
    fn int(&self, key: AppKey, default: i64) -> i64;
    fn set_bool(&mut self, key: AppKey, value: bool) -> Result<()>;
    fn set_int(&mut self, key: AppKey, value: i64) -> Result<()>;

    fn hide_registered_time(&self) -> bool {
        self.bool(AppKey::HideRegisteredTime, false)
    }

    fn set_hide_registered_time(&mut self, value: bool) -> Result<()> {
        self.set_bool(AppKey::HideRegisteredTime, value)
    }

    fn confirm_clock_out(&self) -> bool {
        self.bool(AppKey::ConfirmClockOut, true)
    }

    fn set_confirm_clock_out(&mut self, value: bool) -> Result<()> {
        self.set_bool(AppKey::ConfirmClockOut, value)
    }

    fn ongoing_notification(&self) -> bool {
        self.bool(AppKey::OngoingNotificationEnabled, true)
    }

    fn set_ongoing_notification(&mut self, value: bool) -> Result<()> {
        self.set_bool(AppKey::OngoingNotificationEnabled, value)
    }

    fn ongoing_notification_chronometer(&self) -> bool {
        self.bool(AppKey::OngoingNotificationChronometerEnabled, true)
    }

    fn set_ongoing_notification_chronometer(&mut self, value: bool) -> Result<()> {
        self.set_bool(AppKey::OngoingNotificationChronometerEnabled, value)
    }

    /// Raw stored value; convert with `TimeIntervalStartingPoint::try_from`.
    fn starting_point_for_time_summary(&self) -> i64 {
        self.int(AppKey::TimeSummary, TimeIntervalStartingPoint::Month.raw_value())
    }

    fn set_starting_point_for_time_summary(&mut self, starting_point: TimeIntervalStartingPoint) -> Result<()> {
        self.set_int(AppKey::TimeSummary, starting_point.raw_value())
    }

    /// Raw stored value; convert with `TimeReportSummaryFormat::try_from`.
    fn time_report_summary_format(&self) -> i64 {
        self.int(AppKey::TimeReportSummaryFormat, TimeReportSummaryFormat::DigitalClock.raw_value())
    }

    fn set_time_report_summary_format(&mut self, format: TimeReportSummaryFormat) -> Result<()> {
        self.set_int(AppKey::TimeReportSummaryFormat, format.raw_value())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryKeyValueStore {
    values: HashMap<AppKey, SettingValue>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn bool(&self, key: AppKey, default: bool) -> bool {
        match self.values.get(&key) {
            Some(SettingValue::Bool(value)) => *value,
            _ => default,
        }
    }

    fn int(&self, key: AppKey, default: i64) -> i64 {
        match self.values.get(&key) {
            Some(SettingValue::Int(value)) => *value,
            _ => default,
        }
    }

    fn set_bool(&mut self, key: AppKey, value: bool) -> Result<()> {
        self.values.insert(key, SettingValue::Bool(value));
        Ok(())
    }

    fn set_int(&mut self, key: AppKey, value: i64) -> Result<()> {
        self.values.insert(key, SettingValue::Int(value));
        Ok(())
    }
}

/// Settings persisted as a flat JSON object in the data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        Ok(Self { path })
    }

    fn read_values(&self) -> Result<BTreeMap<String, SettingValue>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn value(&self, key: AppKey) -> Option<SettingValue> {
        match self.read_values() {
            Ok(values) => values.get(key.raw_value()).copied(),
            Err(e) => {
                tracing::warn!("Unable to read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Where an unreadable settings file is moved before it is replaced.
    pub fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    fn write_value(&mut self, key: AppKey, value: SettingValue) -> Result<()> {
        let mut values = match self.read_values() {
            Ok(values) => values,
            Err(e) => {
                let corrupt_path = self.corrupt_path();
                tracing::warn!(
                    "Unable to read {}: {}. Moving it to {} and starting over",
                    self.path.display(),
                    e,
                    corrupt_path.display()
                );
                fs::rename(&self.path, &corrupt_path)?;
                BTreeMap::new()
            }
        };
        values.insert(key.raw_value().to_string(), value);

        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &values)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn bool(&self, key: AppKey, default: bool) -> bool {
        match self.value(key) {
            Some(SettingValue::Bool(value)) => value,
            _ => default,
        }
    }

    fn int(&self, key: AppKey, default: i64) -> i64 {
        match self.value(key) {
            Some(SettingValue::Int(value)) => value,
            _ => default,
        }
    }

    fn set_bool(&mut self, key: AppKey, value: bool) -> Result<()> {
        self.write_value(key, SettingValue::Bool(value))
    }

    fn set_int(&mut self, key: AppKey, value: i64) -> Result<()> {
        self.write_value(key, SettingValue::Int(value))
    }
}
