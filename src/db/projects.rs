use super::db::Db;
use crate::libs::project::{Project, ProjectName};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_PROJECT: &str = "INSERT INTO projects (name) VALUES (?1)";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";
const SELECT_PROJECTS: &str = "SELECT id, name FROM projects";
const COUNT_PROJECTS: &str = "SELECT COUNT(*) FROM projects";
const WHERE_ACTIVE: &str = "WHERE EXISTS (SELECT 1 FROM time_intervals WHERE time_intervals.project_id = projects.id AND time_intervals.stop_ms IS NULL)";
const ORDER_BY_NAME: &str = "ORDER BY name COLLATE NOCASE";

pub struct Projects {
    pub conn: Connection,
}

impl Projects {
    pub fn new() -> Result<Projects> {
        let db = Db::new()?;

        Ok(Projects { conn: db.conn })
    }

    pub fn insert(&mut self, name: &ProjectName) -> Result<Project> {
        self.conn.execute(INSERT_PROJECT, params![name.as_str()])?;

        Ok(Project {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Relies on the `ON DELETE CASCADE` of `time_intervals.project_id`.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute(DELETE_PROJECT, params![id])?;

        Ok(deleted > 0)
    }

    /// Case-insensitive, the column is declared `COLLATE NOCASE`.
    pub fn find_by_name(&mut self, name: &str) -> Result<Option<Project>> {
        let project = self
            .conn
            .query_row(&format!("{} WHERE name = ?1", SELECT_PROJECTS), params![name], map_project)
            .optional()?;

        Ok(project)
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<Project>> {
        let project = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_PROJECTS), params![id], map_project)
            .optional()?;

        Ok(project)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Project>> {
        self.query(&format!("{} {}", SELECT_PROJECTS, ORDER_BY_NAME))
    }

    pub fn fetch_active(&mut self) -> Result<Vec<Project>> {
        self.query(&format!("{} {} {}", SELECT_PROJECTS, WHERE_ACTIVE, ORDER_BY_NAME))
    }

    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_PROJECTS, [], |row| row.get(0))?;

        Ok(count)
    }

    fn query(&self, sql: &str) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(sql)?;
        let projects = stmt.query_map([], map_project)?.collect::<Result<Vec<_>, _>>()?;

        Ok(projects)
    }
}

fn map_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
