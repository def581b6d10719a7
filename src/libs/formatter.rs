//! Text rendering of durations and intervals.
//!
//! Two summary formats exist: a digital clock (`7:52`) and a decimal
//! fraction of hours (`7.87`). Negative values keep a single leading minus,
//! so eight minutes short of a workday renders as `-0:08` or `-0.13`.

use super::error::WorkerError;
use super::time::{HoursMinutes, MINUTES_IN_HOUR};
use super::time_interval::TimeInterval;
use super::time_report::TimeReportDay;
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

pub trait HoursMinutesFormat {
    fn apply(&self, value: HoursMinutes) -> String;
}

/// `H:MM`
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitalHoursMinutesFormat;

impl HoursMinutesFormat for DigitalHoursMinutesFormat {
    fn apply(&self, value: HoursMinutes) -> String {
        let sign = if value.is_positive() { "" } else { "-" };
        format!("{}{}:{:02}", sign, value.hours.abs(), value.minutes.abs())
    }
}

/// Hours with two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractionHoursMinutesFormat;

impl HoursMinutesFormat for FractionHoursMinutesFormat {
    fn apply(&self, value: HoursMinutes) -> String {
        let hours = value.total_minutes() as f64 / MINUTES_IN_HOUR as f64;
        format!("{:.2}", hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TimeReportSummaryFormat {
    DigitalClock,
    Fraction,
}

impl TimeReportSummaryFormat {
    pub fn raw_value(&self) -> i64 {
        match self {
            TimeReportSummaryFormat::DigitalClock => 1,
            TimeReportSummaryFormat::Fraction => 2,
        }
    }

    pub fn formatter(&self) -> Box<dyn HoursMinutesFormat> {
        match self {
            TimeReportSummaryFormat::DigitalClock => Box::new(DigitalHoursMinutesFormat),
            TimeReportSummaryFormat::Fraction => Box::new(FractionHoursMinutesFormat),
        }
    }
}

impl TryFrom<i64> for TimeReportSummaryFormat {
    type Error = WorkerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TimeReportSummaryFormat::DigitalClock),
            2 => Ok(TimeReportSummaryFormat::Fraction),
            _ => Err(WorkerError::InvalidTimeReportSummaryFormat(value)),
        }
    }
}

/// `9:00 (+1:00)`, `7:52 (-0:08)` or just `8:00` when there is no difference.
pub fn time_summary_with_difference(summary: HoursMinutes, difference: HoursMinutes, format: &dyn HoursMinutesFormat) -> String {
    let summary = format.apply(summary);
    if difference.is_empty() {
        summary
    } else if difference.is_positive() {
        format!("{} (+{})", summary, format.apply(difference))
    } else {
        format!("{} ({})", summary, format.apply(difference))
    }
}

pub fn day_summary(day: &TimeReportDay, format: &dyn HoursMinutesFormat) -> String {
    time_summary_with_difference(day.time_summary(), day.time_difference(), format)
}

/// Local `HH:MM` of a timestamp.
pub fn clock_time(milliseconds: i64) -> String {
    Local
        .timestamp_millis_opt(milliseconds)
        .earliest()
        .map(|date_time| date_time.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// A time interval prepared for a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTimeInterval {
    pub id: i64,
    /// `09:00 - 17:00`, or `09:00 -` while running.
    pub title: String,
    pub duration: String,
    pub registered: bool,
}

impl FormattedTimeInterval {
    pub fn new(time_interval: &TimeInterval, format: &dyn HoursMinutesFormat) -> Self {
        let title = match time_interval.stop {
            Some(stop) => format!("{} - {}", clock_time(time_interval.start), clock_time(stop)),
            None => format!("{} -", clock_time(time_interval.start)),
        };

        Self {
            id: time_interval.id,
            title,
            duration: format.apply(time_interval.time()),
            registered: time_interval.is_registered(),
        }
    }
}
