//! Paged day and week reports.
//!
//! Paging happens on the distinct group keys (local date, or the Monday of
//! the local week) so a page never splits a day. The intervals of the page
//! are then fetched in one query and grouped in Rust.

use super::db::Db;
use super::time_intervals::map_time_interval;
use crate::libs::time_interval::TimeInterval;
use crate::libs::time_report::{GroupTimeIntervals, LoadRange, TimeReportDay, TimeReportWeek};
use anyhow::Result;
use rusqlite::{params, Connection};

const DAY_KEY: &str = "date(start_ms / 1000, 'unixepoch', 'localtime')";
const WEEK_KEY: &str = "date(start_ms / 1000, 'unixepoch', 'localtime', 'weekday 0', '-6 days')";
const NOT_REGISTERED: &str = "AND registered = 0";

pub struct TimeReports {
    pub conn: Connection,
}

impl TimeReports {
    pub fn new() -> Result<TimeReports> {
        let db = Db::new()?;

        Ok(TimeReports { conn: db.conn })
    }

    pub fn count_days(&self, project_id: i64) -> Result<i64> {
        self.count_groups(project_id, DAY_KEY, "")
    }

    pub fn count_not_registered_days(&self, project_id: i64) -> Result<i64> {
        self.count_groups(project_id, DAY_KEY, NOT_REGISTERED)
    }

    pub fn find_days(&self, project_id: i64, range: LoadRange) -> Result<Vec<TimeReportDay>> {
        Ok(self.find_groups(project_id, DAY_KEY, "", range)?.group_by_day())
    }

    pub fn find_not_registered_days(&self, project_id: i64, range: LoadRange) -> Result<Vec<TimeReportDay>> {
        Ok(self.find_groups(project_id, DAY_KEY, NOT_REGISTERED, range)?.group_by_day())
    }

    pub fn count_weeks(&self, project_id: i64) -> Result<i64> {
        self.count_groups(project_id, WEEK_KEY, "")
    }

    pub fn count_not_registered_weeks(&self, project_id: i64) -> Result<i64> {
        self.count_groups(project_id, WEEK_KEY, NOT_REGISTERED)
    }

    pub fn find_weeks(&self, project_id: i64, range: LoadRange) -> Result<Vec<TimeReportWeek>> {
        Ok(self.find_groups(project_id, WEEK_KEY, "", range)?.group_by_week())
    }

    pub fn find_not_registered_weeks(&self, project_id: i64, range: LoadRange) -> Result<Vec<TimeReportWeek>> {
        Ok(self.find_groups(project_id, WEEK_KEY, NOT_REGISTERED, range)?.group_by_week())
    }

    fn count_groups(&self, project_id: i64, key: &str, filter: &str) -> Result<i64> {
        let count = self.conn.query_row(
            &format!("SELECT COUNT(DISTINCT {}) FROM time_intervals WHERE project_id = ?1 {}", key, filter),
            params![project_id],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    /// Intervals belonging to the groups selected by `range`.
    ///
    /// Keys are `YYYY-MM-DD` strings, so the page is the contiguous key span
    /// between its oldest and newest key.
    fn find_groups(&self, project_id: i64, key: &str, filter: &str, range: LoadRange) -> Result<Vec<TimeInterval>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT {} AS grouping FROM time_intervals WHERE project_id = ?1 {} ORDER BY grouping DESC LIMIT ?2 OFFSET ?3",
            key, filter
        ))?;
        let keys = stmt
            .query_map(params![project_id, range.size, range.position], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        let (Some(newest), Some(oldest)) = (keys.first(), keys.last()) else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, project_id, start_ms, stop_ms, registered FROM time_intervals
             WHERE project_id = ?1 {} AND {} BETWEEN ?2 AND ?3
             ORDER BY start_ms DESC, stop_ms DESC",
            filter, key
        ))?;
        let time_intervals = stmt
            .query_map(params![project_id, oldest, newest], map_time_interval)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(time_intervals)
    }
}
