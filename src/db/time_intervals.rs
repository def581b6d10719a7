use super::db::Db;
use crate::libs::time_interval::{NewTimeInterval, TimeInterval};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TIME_INTERVAL: &str = "INSERT INTO time_intervals (project_id, start_ms, stop_ms, registered) VALUES (?1, ?2, NULL, 0)";
const UPDATE_TIME_INTERVAL: &str = "UPDATE time_intervals SET start_ms = ?2, stop_ms = ?3, registered = ?4 WHERE id = ?1";
const DELETE_TIME_INTERVAL: &str = "DELETE FROM time_intervals WHERE id = ?1";
const SELECT_TIME_INTERVALS: &str = "SELECT id, project_id, start_ms, stop_ms, registered FROM time_intervals";
const ORDER_BY_START: &str = "ORDER BY start_ms DESC, stop_ms DESC";

pub struct TimeIntervals {
    pub conn: Connection,
}

impl TimeIntervals {
    pub fn new() -> Result<TimeIntervals> {
        let db = Db::new()?;

        Ok(TimeIntervals { conn: db.conn })
    }

    pub fn insert(&mut self, time_interval: &NewTimeInterval) -> Result<TimeInterval> {
        self.conn.execute(INSERT_TIME_INTERVAL, params![time_interval.project_id, time_interval.start])?;

        Ok(TimeInterval {
            id: self.conn.last_insert_rowid(),
            project_id: time_interval.project_id,
            start: time_interval.start,
            stop: None,
            registered: false,
        })
    }

    pub fn update(&mut self, time_interval: &TimeInterval) -> Result<()> {
        self.conn.execute(
            UPDATE_TIME_INTERVAL,
            params![time_interval.id, time_interval.start, time_interval.stop, time_interval.registered],
        )?;

        Ok(())
    }

    /// Writes every interval or none of them.
    pub fn update_all(&mut self, time_intervals: &[TimeInterval]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(UPDATE_TIME_INTERVAL)?;
            for time_interval in time_intervals {
                stmt.execute(params![time_interval.id, time_interval.start, time_interval.stop, time_interval.registered])?;
            }
        }
        tx.commit()?;

        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute(DELETE_TIME_INTERVAL, params![id])?;

        Ok(deleted > 0)
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<TimeInterval>> {
        let time_interval = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TIME_INTERVALS), params![id], map_time_interval)
            .optional()?;

        Ok(time_interval)
    }

    pub fn find_active(&mut self, project_id: i64) -> Result<Option<TimeInterval>> {
        let time_interval = self
            .conn
            .query_row(
                &format!("{} WHERE project_id = ?1 AND stop_ms IS NULL {} LIMIT 1", SELECT_TIME_INTERVALS, ORDER_BY_START),
                params![project_id],
                map_time_interval,
            )
            .optional()?;

        Ok(time_interval)
    }

    /// Intervals started at or after `since`, plus any running one.
    pub fn find_since(&mut self, project_id: i64, since: i64) -> Result<Vec<TimeInterval>> {
        self.query(
            &format!(
                "{} WHERE project_id = ?1 AND (start_ms >= ?2 OR stop_ms IS NULL) {}",
                SELECT_TIME_INTERVALS, ORDER_BY_START
            ),
            params![project_id, since],
        )
    }

    /// Intervals started in `[from, to)`.
    pub fn find_between(&mut self, project_id: i64, from: i64, to: i64) -> Result<Vec<TimeInterval>> {
        self.query(
            &format!(
                "{} WHERE project_id = ?1 AND start_ms >= ?2 AND start_ms < ?3 {}",
                SELECT_TIME_INTERVALS, ORDER_BY_START
            ),
            params![project_id, from, to],
        )
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<TimeInterval>> {
        let mut stmt = self.conn.prepare(sql)?;
        let time_intervals = stmt.query_map(params, map_time_interval)?.collect::<Result<Vec<_>, _>>()?;

        Ok(time_intervals)
    }
}

pub(crate) fn map_time_interval(row: &Row) -> rusqlite::Result<TimeInterval> {
    Ok(TimeInterval {
        id: row.get(0)?,
        project_id: row.get(1)?,
        start: row.get(2)?,
        stop: row.get(3)?,
        registered: row.get(4)?,
    })
}
