//! Versioned schema changes.
//!
//! Every connection opened through [`Db::new`](super::db::Db::new) runs the
//! pending migrations inside one transaction, so a failing step leaves the
//! database exactly as it was and the open fails. Applied versions are
//! recorded in the `migrations` table.
//!
//! Version 2 converts databases written by earlier releases, which kept
//! projects in `project(_id, name, ...)` and time in `time(_id, project_id,
//! start, stop, registered)` with `stop = 0` marking a running interval.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_PROJECTS: &str = "
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE
)";

const SCHEMA_TIME_INTERVALS: &str = "
CREATE TABLE IF NOT EXISTS time_intervals (
    id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    start_ms INTEGER NOT NULL,
    stop_ms INTEGER,
    registered INTEGER NOT NULL DEFAULT 0
)";

const LEGACY_PROJECT_TABLE: &str = "project";
const LEGACY_TIME_TABLE: &str = "time";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_projects_and_time_intervals", |tx| {
            tx.execute(SCHEMA_PROJECTS, [])?;
            tx.execute(SCHEMA_TIME_INTERVALS, [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_intervals_project_id ON time_intervals(project_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_time_intervals_start_ms ON time_intervals(start_ms)", [])?;
            Ok(())
        });

        self.add_migration(2, "import_legacy_projects_and_time", |tx| {
            let (projects, time_intervals) = import_legacy_tables(tx)?;
            if projects > 0 || time_intervals > 0 {
                msg_info!(Message::LegacyDataImported(projects, time_intervals));
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();
        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// `(version, name, applied_at)` of every applied migration, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn table_exists(tx: &Transaction, table: &str) -> Result<bool> {
    let name: Option<String> = tx
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )
        .optional()?;

    Ok(name.is_some())
}

fn column_exists(tx: &Transaction, table: &str, column: &str) -> Result<bool> {
    let mut stmt = tx.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<Result<Vec<_>, _>>()?;

    Ok(columns.iter().any(|name| name == column))
}

/// Copies legacy rows 1:1 and drops the legacy tables.
///
/// Time rows pointing at a project that no longer exists are skipped, the
/// new table enforces the foreign key.
fn import_legacy_tables(tx: &Transaction) -> Result<(usize, usize)> {
    let mut projects = 0;
    let mut time_intervals = 0;

    if table_exists(tx, LEGACY_PROJECT_TABLE)? {
        projects = tx.execute("INSERT INTO projects (id, name) SELECT _id, name FROM project", [])?;
    }

    if table_exists(tx, LEGACY_TIME_TABLE)? {
        let registered = if column_exists(tx, LEGACY_TIME_TABLE, "registered")? {
            "registered"
        } else {
            "0"
        };
        time_intervals = tx.execute(
            &format!(
                "INSERT INTO time_intervals (id, project_id, start_ms, stop_ms, registered)
                 SELECT _id, project_id, start, NULLIF(stop, 0), {}
                 FROM time
                 WHERE project_id IN (SELECT id FROM projects)",
                registered
            ),
            [],
        )?;
        tx.execute("DROP TABLE time", [])?;
    }

    if table_exists(tx, LEGACY_PROJECT_TABLE)? {
        tx.execute("DROP TABLE project", [])?;
    }

    Ok((projects, time_intervals))
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
