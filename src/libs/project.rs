use super::error::WorkerError;
use crate::db::projects::Projects;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, trimmed project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(value: &str) -> Result<Self, WorkerError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(WorkerError::InvalidProjectName);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// Creates a project; names are unique ignoring case.
pub fn create_project(projects: &mut Projects, name: &str) -> Result<Project> {
    let name = ProjectName::new(name)?;
    if let Some(existing) = projects.find_by_name(name.as_str())? {
        return Err(WorkerError::ProjectAlreadyExists(existing.name).into());
    }

    let project = projects.insert(&name)?;
    tracing::debug!(id = project.id, name = %project.name, "project created");

    Ok(project)
}

pub fn find_project(projects: &mut Projects, name: &str) -> Result<Option<Project>> {
    projects.find_by_name(name.trim())
}

/// Like [`find_project`], failing with `ProjectNotFound` when absent.
pub fn require_project(projects: &mut Projects, name: &str) -> Result<Project> {
    find_project(projects, name)?.ok_or_else(|| WorkerError::ProjectNotFound(name.trim().to_string()).into())
}

pub fn find_projects(projects: &mut Projects) -> Result<Vec<Project>> {
    projects.fetch_all()
}

pub fn count_projects(projects: &mut Projects) -> Result<i64> {
    projects.count()
}

/// Projects with a running time interval.
pub fn find_active_projects(projects: &mut Projects) -> Result<Vec<Project>> {
    projects.fetch_active()
}

/// Deletes the project together with all of its time intervals.
pub fn remove_project(projects: &mut Projects, project: &Project) -> Result<()> {
    projects.delete(project.id)?;
    tracing::debug!(id = project.id, name = %project.name, "project removed");

    Ok(())
}
