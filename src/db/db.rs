use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "worker.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and brings its schema up to date.
    pub fn new() -> Result<Db> {
        let mut conn = Self::new_without_migrations()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database as it is on disk, for schema inspection.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(conn)
    }
}
