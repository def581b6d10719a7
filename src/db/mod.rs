//! SQLite storage.
//!
//! Each repository owns its own [`rusqlite::Connection`] opened through
//! [`db::Db::new`], which applies pending migrations and enables foreign
//! keys. Time intervals reference their project with `ON DELETE CASCADE`.

pub mod backups;
pub mod db;
pub mod migrations;
pub mod projects;
pub mod time_intervals;
pub mod time_reports;
