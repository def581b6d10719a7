//! Time values and calendar helpers used by the aggregation core.
//!
//! Timestamps are plain milliseconds since the Unix epoch (`i64`), the same
//! unit the database stores. Calendar math (day, week and month boundaries)
//! always happens in the local time zone, never in UTC, so that an interval
//! started late in the evening is grouped with the day the user saw on the
//! clock.
//!
//! ## Durations
//!
//! [`HoursMinutes`] is the duration type of every report. It only keeps whole
//! minutes: a span of `ms` milliseconds is `ms / 60_000` minutes, truncated.
//! Negative values keep the sign on both fields, e.g. eight minutes short of
//! a workday is `HoursMinutes { hours: 0, minutes: -8 }`.
//!
//! ```rust
//! use worker::libs::time::{Accumulated, HoursMinutes};
//!
//! let total = vec![HoursMinutes::new(1, 45), HoursMinutes::new(0, 30)].accumulated();
//! assert_eq!(total, HoursMinutes::new(2, 15));
//! ```

use super::error::WorkerError;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Sub};

pub const MINUTES_IN_HOUR: i64 = 60;
pub const MILLISECONDS_IN_MINUTE: i64 = 60_000;

/// A duration expressed as whole hours and remainder minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    pub const EMPTY: HoursMinutes = HoursMinutes { hours: 0, minutes: 0 };

    /// The expected length of a workday, used for the report difference.
    pub const WORKDAY: HoursMinutes = HoursMinutes { hours: 8, minutes: 0 };

    pub fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    /// Normalizes a minute count, carrying every 60 minutes into hours.
    ///
    /// Integer division truncates toward zero, so a negative count produces
    /// the negative mirror of the positive one (`-8` becomes `0h -8m`).
    pub fn from_minutes(total_minutes: i64) -> Self {
        Self {
            hours: total_minutes / MINUTES_IN_HOUR,
            minutes: total_minutes % MINUTES_IN_HOUR,
        }
    }

    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self::from_minutes(milliseconds / MILLISECONDS_IN_MINUTE)
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * MINUTES_IN_HOUR + self.minutes
    }

    pub fn is_empty(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    pub fn is_positive(&self) -> bool {
        self.hours >= 0 && self.minutes >= 0
    }
}

impl Add for HoursMinutes {
    type Output = HoursMinutes;

    fn add(self, rhs: HoursMinutes) -> HoursMinutes {
        HoursMinutes::from_minutes(self.total_minutes() + rhs.total_minutes())
    }
}

impl Sub for HoursMinutes {
    type Output = HoursMinutes;

    fn sub(self, rhs: HoursMinutes) -> HoursMinutes {
        HoursMinutes::from_minutes(self.total_minutes() - rhs.total_minutes())
    }
}

impl Sum for HoursMinutes {
    fn sum<I: Iterator<Item = HoursMinutes>>(iter: I) -> Self {
        iter.fold(HoursMinutes::EMPTY, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a HoursMinutes> for HoursMinutes {
    fn sum<I: Iterator<Item = &'a HoursMinutes>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Folds a collection of durations into a single total.
pub trait Accumulated {
    fn accumulated(self) -> HoursMinutes;
}

impl<I> Accumulated for I
where
    I: IntoIterator<Item = HoursMinutes>,
{
    fn accumulated(self) -> HoursMinutes {
        self.into_iter().sum()
    }
}

/// How far back the "time summary" of a project looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeIntervalStartingPoint {
    Week,
    Month,
}

impl TimeIntervalStartingPoint {
    pub fn raw_value(&self) -> i64 {
        match self {
            TimeIntervalStartingPoint::Month => 0,
            TimeIntervalStartingPoint::Week => 1,
        }
    }

    /// First calendar day included in a summary computed on `today`.
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeIntervalStartingPoint::Week => week_start(today),
            TimeIntervalStartingPoint::Month => month_start(today),
        }
    }

    pub fn start_in_milliseconds(&self, now: i64) -> i64 {
        start_of_day(self.start_date(local_date(now)))
    }
}

impl TryFrom<i64> for TimeIntervalStartingPoint {
    type Error = WorkerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimeIntervalStartingPoint::Month),
            1 => Ok(TimeIntervalStartingPoint::Week),
            _ => Err(WorkerError::InvalidStartingPoint(value)),
        }
    }
}

pub fn now() -> i64 {
    Local::now().timestamp_millis()
}

/// Local calendar date of a timestamp.
pub fn local_date(milliseconds: i64) -> NaiveDate {
    Local
        .timestamp_millis_opt(milliseconds)
        .earliest()
        .map(|date_time| date_time.date_naive())
        .unwrap_or_default()
}

/// Monday of the week that contains `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Timestamp of local midnight at the start of `date`.
///
/// Falls back to UTC midnight if local midnight does not exist on that day.
pub fn start_of_day(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|date_time| date_time.timestamp_millis())
        .unwrap_or_else(|| midnight.and_utc().timestamp_millis())
}

/// Timestamp of a local wall-clock time, `None` if it does not exist.
pub fn local_timestamp(date_time: NaiveDateTime) -> Option<i64> {
    Local
        .from_local_datetime(&date_time)
        .earliest()
        .map(|date_time| date_time.timestamp_millis())
}

/// Parses `today` (any case) or `YYYY-MM-DD`.
pub fn parse_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("today") {
        return Some(today);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses `HH:MM` on `today` or a full `YYYY-MM-DD HH:MM`.
pub fn parse_clock_time(value: &str, today: NaiveDate) -> Option<i64> {
    let value = value.trim();
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return local_timestamp(today.and_time(time));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").ok().and_then(local_timestamp)
}
