//! Time grouped by calendar day and week.
//!
//! Grouping uses the local date of each interval's start. Days and weeks are
//! returned newest first, and within a day intervals are ordered by start
//! then stop, both descending.
//!
//! The paging use cases consult the "hide registered time" setting on every
//! call. With the setting on, registered intervals are dropped before
//! grouping: a day only appears if something in it is still unregistered.

use super::project::Project;
use super::settings::KeyValueStore;
use super::time::{local_date, week_start, Accumulated, HoursMinutes};
use super::time_interval::TimeInterval;
use crate::db::time_reports::TimeReports;
use anyhow::Result;
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// A page of groups: skip `position`, take at most `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRange {
    pub position: u32,
    pub size: u32,
}

impl LoadRange {
    pub fn new(position: u32, size: u32) -> Self {
        Self { position, size }
    }

    /// Range of the zero-based `page` when pages hold `size` groups.
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            position: page.saturating_mul(size),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReportDayState {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReportDay {
    pub date: NaiveDate,
    pub time_intervals: Vec<TimeInterval>,
}

impl TimeReportDay {
    pub fn new(date: NaiveDate, mut time_intervals: Vec<TimeInterval>) -> Self {
        time_intervals.sort_by_key(|time_interval| (Reverse(time_interval.start), Reverse(time_interval.stop)));
        Self { date, time_intervals }
    }

    pub fn state(&self) -> TimeReportDayState {
        if self.time_intervals.iter().any(TimeInterval::is_active) {
            TimeReportDayState::Active
        } else {
            TimeReportDayState::Inactive
        }
    }

    /// True when every interval is registered. An empty day is not.
    pub fn is_registered(&self) -> bool {
        !self.time_intervals.is_empty() && self.time_intervals.iter().all(TimeInterval::is_registered)
    }

    pub fn time_summary(&self) -> HoursMinutes {
        self.time_intervals.iter().map(TimeInterval::time).accumulated()
    }

    /// Summary compared to an eight hour workday.
    pub fn time_difference(&self) -> HoursMinutes {
        self.time_summary() - HoursMinutes::WORKDAY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReportWeek {
    /// Monday of the week.
    pub start: NaiveDate,
    pub days: Vec<TimeReportDay>,
}

impl TimeReportWeek {
    pub fn time_summary(&self) -> HoursMinutes {
        self.days.iter().map(TimeReportDay::time_summary).accumulated()
    }

    pub fn is_registered(&self) -> bool {
        !self.days.is_empty() && self.days.iter().all(TimeReportDay::is_registered)
    }
}

pub trait GroupTimeIntervals {
    fn group_by_day(self) -> Vec<TimeReportDay>;
    fn group_by_week(self) -> Vec<TimeReportWeek>;
}

impl GroupTimeIntervals for Vec<TimeInterval> {
    fn group_by_day(self) -> Vec<TimeReportDay> {
        let mut days: BTreeMap<NaiveDate, Vec<TimeInterval>> = BTreeMap::new();
        for time_interval in self {
            days.entry(local_date(time_interval.start)).or_default().push(time_interval);
        }

        days.into_iter()
            .rev()
            .map(|(date, time_intervals)| TimeReportDay::new(date, time_intervals))
            .collect()
    }

    fn group_by_week(self) -> Vec<TimeReportWeek> {
        let mut weeks: BTreeMap<NaiveDate, Vec<TimeReportDay>> = BTreeMap::new();
        for day in self.group_by_day() {
            weeks.entry(week_start(day.date)).or_default().push(day);
        }

        weeks.into_iter().rev().map(|(start, days)| TimeReportWeek { start, days }).collect()
    }
}

pub fn count_time_reports(settings: &dyn KeyValueStore, time_reports: &TimeReports, project: &Project) -> Result<i64> {
    if settings.hide_registered_time() {
        time_reports.count_not_registered_days(project.id)
    } else {
        time_reports.count_days(project.id)
    }
}

pub fn find_time_reports(
    settings: &dyn KeyValueStore,
    time_reports: &TimeReports,
    project: &Project,
    range: LoadRange,
) -> Result<Vec<TimeReportDay>> {
    if settings.hide_registered_time() {
        time_reports.find_not_registered_days(project.id, range)
    } else {
        time_reports.find_days(project.id, range)
    }
}

pub fn count_time_report_weeks(settings: &dyn KeyValueStore, time_reports: &TimeReports, project: &Project) -> Result<i64> {
    if settings.hide_registered_time() {
        time_reports.count_not_registered_weeks(project.id)
    } else {
        time_reports.count_weeks(project.id)
    }
}

pub fn find_time_report_weeks(
    settings: &dyn KeyValueStore,
    time_reports: &TimeReports,
    project: &Project,
    range: LoadRange,
) -> Result<Vec<TimeReportWeek>> {
    if settings.hide_registered_time() {
        time_reports.find_not_registered_weeks(project.id, range)
    } else {
        time_reports.find_weeks(project.id, range)
    }
}
