//! JSON backups of all projects and their time.
//!
//! A backup is written to a file, uploaded once to the configured server, or
//! both. There is no retry; a failed upload is reported and the file stays
//! on disk. Restoring only works on a database without projects.

use super::config::ServerConfig;
use super::data_storage::DataStorage;
use super::error::WorkerError;
use super::messages::Message;
use super::project::ProjectName;
use super::time_interval::TimeInterval;
use crate::db::backups::Backups;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const BACKUP_DIR_NAME: &str = "backups";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Backup {
    pub projects: Vec<BackupProject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupProject {
    pub id: i64,
    pub name: String,
    pub time_intervals: Vec<BackupTimeInterval>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupTimeInterval {
    pub id: i64,
    pub start_in_milliseconds: i64,
    pub stop_in_milliseconds: Option<i64>,
    pub is_registered: bool,
}

impl From<&TimeInterval> for BackupTimeInterval {
    fn from(time_interval: &TimeInterval) -> Self {
        Self {
            id: time_interval.id,
            start_in_milliseconds: time_interval.start,
            stop_in_milliseconds: time_interval.stop,
            is_registered: time_interval.registered,
        }
    }
}

impl Backup {
    pub fn collect(backups: &mut Backups) -> Result<Self> {
        backups.fetch()
    }

    pub fn time_interval_count(&self) -> usize {
        self.projects.iter().map(|project| project.time_intervals.len()).sum()
    }

    /// `backups/worker-<timestamp>.json` in the data directory.
    pub fn default_path() -> Result<PathBuf> {
        let file_name = format!("worker-{}.json", Local::now().format("%Y%m%d-%H%M%S"));
        DataStorage::new().get_path(&format!("{}/{}", BACKUP_DIR_NAME, file_name))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, self)?;
        tracing::debug!(path = %path.display(), projects = self.projects.len(), "backup written");
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Endpoint the backup is posted to.
    pub fn upload_url(server: &ServerConfig) -> String {
        format!("{}/backup", server.api_url.trim_end_matches('/'))
    }

    /// Posts the backup once, authenticated with the server's bearer token.
    pub async fn upload(&self, server: &ServerConfig) -> Result<String> {
        let url = Self::upload_url(server);
        let res = reqwest::Client::new().post(&url).bearer_auth(&server.auth_token).json(self).send().await?;

        let status = res.status();
        if !status.is_success() {
            msg_bail_anyhow!(Message::BackupUploadFailed(status.to_string()));
        }
        tracing::debug!(%url, %status, "backup uploaded");

        Ok(url)
    }

    /// Rejects data the use cases never write. Names must be non-blank and
    /// unique ignoring case. No interval may stop before it starts, and a
    /// project has at most one running interval.
    pub fn validate(&self) -> Result<(), WorkerError> {
        let mut names: Vec<String> = Vec::with_capacity(self.projects.len());
        for project in &self.projects {
            let name = ProjectName::new(&project.name)?;
            let key = name.as_str().to_lowercase();
            if names.contains(&key) {
                return Err(WorkerError::ProjectAlreadyExists(name.to_string()));
            }
            names.push(key);

            let mut running = 0;
            for time_interval in &project.time_intervals {
                let time_interval = TimeInterval::new(
                    time_interval.id,
                    project.id,
                    time_interval.start_in_milliseconds,
                    time_interval.stop_in_milliseconds,
                    time_interval.is_registered,
                )?;
                if time_interval.is_active() {
                    running += 1;
                }
            }
            if running > 1 {
                return Err(WorkerError::MultipleActiveTimeIntervals(name.to_string()));
            }
        }

        Ok(())
    }

    pub fn restore(&self, backups: &mut Backups) -> Result<(usize, usize)> {
        backups.restore(self)
    }
}
