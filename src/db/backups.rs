use super::db::Db;
use super::time_intervals::map_time_interval;
use crate::libs::backup::{Backup, BackupProject, BackupTimeInterval};
use crate::libs::error::WorkerError;
use crate::libs::project::ProjectName;
use anyhow::Result;
use rusqlite::{params, Connection};

const SELECT_PROJECTS: &str = "SELECT id, name FROM projects ORDER BY id";
const SELECT_TIME_INTERVALS: &str = "SELECT id, project_id, start_ms, stop_ms, registered FROM time_intervals ORDER BY project_id, start_ms";
const INSERT_PROJECT: &str = "INSERT INTO projects (id, name) VALUES (?1, ?2)";
const INSERT_TIME_INTERVAL: &str = "INSERT INTO time_intervals (id, project_id, start_ms, stop_ms, registered) VALUES (?1, ?2, ?3, ?4, ?5)";

pub struct Backups {
    pub conn: Connection,
}

impl Backups {
    pub fn new() -> Result<Backups> {
        let db = Db::new()?;

        Ok(Backups { conn: db.conn })
    }

    /// Snapshot of every project with its time intervals.
    pub fn fetch(&mut self) -> Result<Backup> {
        let mut stmt = self.conn.prepare(SELECT_PROJECTS)?;
        let mut projects = stmt
            .query_map([], |row| {
                Ok(BackupProject {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    time_intervals: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(SELECT_TIME_INTERVALS)?;
        let time_intervals = stmt.query_map([], map_time_interval)?.collect::<Result<Vec<_>, _>>()?;
        for time_interval in time_intervals {
            if let Some(project) = projects.iter_mut().find(|project| project.id == time_interval.project_id) {
                project.time_intervals.push(BackupTimeInterval::from(&time_interval));
            }
        }

        Ok(Backup { projects })
    }

    /// Inserts the backup with its original ids. Returns the number of
    /// projects and time intervals written.
    ///
    /// Fails with `RestoreRequiresEmptyDatabase` when any project exists and
    /// with the validation error of the first invalid project or interval.
    pub fn restore(&mut self, backup: &Backup) -> Result<(usize, usize)> {
        backup.validate()?;

        let tx = self.conn.transaction()?;

        let count: i64 = tx.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
        if count > 0 {
            return Err(WorkerError::RestoreRequiresEmptyDatabase.into());
        }

        let mut time_intervals = 0;
        {
            let mut insert_project = tx.prepare(INSERT_PROJECT)?;
            let mut insert_time_interval = tx.prepare(INSERT_TIME_INTERVAL)?;
            for project in &backup.projects {
                let name = ProjectName::new(&project.name)?;
                insert_project.execute(params![project.id, name.as_str()])?;
                for time_interval in &project.time_intervals {
                    insert_time_interval.execute(params![
                        time_interval.id,
                        project.id,
                        time_interval.start_in_milliseconds,
                        time_interval.stop_in_milliseconds,
                        time_interval.is_registered
                    ])?;
                    time_intervals += 1;
                }
            }
        }
        tx.commit()?;

        Ok((backup.projects.len(), time_intervals))
    }
}
