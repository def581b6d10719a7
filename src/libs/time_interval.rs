//! Clock-in to clock-out spans and the use cases that change them.
//!
//! A [`TimeInterval`] without a stop time is running ("active"). Only one
//! interval per project may be active at a time; that rule is enforced by
//! [`clock_in`], not by the storage layer.

use super::error::WorkerError;
use super::project::Project;
use super::time::{HoursMinutes, TimeIntervalStartingPoint};
use crate::db::time_intervals::TimeIntervals;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeIntervalState {
    Active,
    Inactive,
    Registered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub id: i64,
    pub project_id: i64,
    /// Milliseconds since the Unix epoch.
    pub start: i64,
    pub stop: Option<i64>,
    pub registered: bool,
}

impl TimeInterval {
    /// Builds an interval, rejecting a stop that precedes the start.
    pub fn new(id: i64, project_id: i64, start: i64, stop: Option<i64>, registered: bool) -> Result<Self, WorkerError> {
        if matches!(stop, Some(stop) if stop < start) {
            return Err(WorkerError::ClockOutBeforeClockIn);
        }

        Ok(Self {
            id,
            project_id,
            start,
            stop,
            registered,
        })
    }

    /// Registered only applies to finished intervals; a running interval is
    /// always `Active`.
    pub fn state(&self) -> TimeIntervalState {
        match (self.stop, self.registered) {
            (None, _) => TimeIntervalState::Active,
            (Some(_), true) => TimeIntervalState::Registered,
            (Some(_), false) => TimeIntervalState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stop.is_none()
    }

    pub fn is_registered(&self) -> bool {
        self.state() == TimeIntervalState::Registered
    }

    /// Counted duration. Running intervals count as zero until clocked out.
    pub fn time(&self) -> HoursMinutes {
        match self.stop {
            Some(stop) => HoursMinutes::from_milliseconds((stop - self.start).max(0)),
            None => HoursMinutes::EMPTY,
        }
    }

    /// Elapsed time, measuring a running interval up to `now`.
    pub fn interval(&self, now: i64) -> HoursMinutes {
        let stop = self.stop.unwrap_or(now);
        HoursMinutes::from_milliseconds((stop - self.start).max(0))
    }

    pub fn clock_out(&self, stop: i64) -> Result<TimeInterval, WorkerError> {
        if !self.is_active() {
            return Err(WorkerError::InactiveProject);
        }
        TimeInterval::new(self.id, self.project_id, self.start, Some(stop), self.registered)
    }

    pub fn mark_registered(&self) -> TimeInterval {
        TimeInterval {
            registered: true,
            ..self.clone()
        }
    }

    pub fn unmark_registered(&self) -> TimeInterval {
        TimeInterval {
            registered: false,
            ..self.clone()
        }
    }
}

/// An interval that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTimeInterval {
    pub project_id: i64,
    pub start: i64,
}

/// Starts a new interval for `project` at `at`.
pub fn clock_in(time_intervals: &mut TimeIntervals, project: &Project, at: i64) -> Result<TimeInterval> {
    if time_intervals.find_active(project.id)?.is_some() {
        return Err(WorkerError::ActiveProject.into());
    }

    let time_interval = time_intervals.insert(&NewTimeInterval {
        project_id: project.id,
        start: at,
    })?;
    tracing::debug!(project = %project.name, id = time_interval.id, "clocked in");

    Ok(time_interval)
}

/// The running interval of `project`, failing with `InactiveProject` when
/// it is not clocked in.
pub fn require_active(time_intervals: &mut TimeIntervals, project: &Project) -> Result<TimeInterval> {
    Ok(time_intervals.find_active(project.id)?.ok_or(WorkerError::InactiveProject)?)
}

/// Stops the running interval of `project` at `at`.
pub fn clock_out(time_intervals: &mut TimeIntervals, project: &Project, at: i64) -> Result<TimeInterval> {
    let active = require_active(time_intervals, project)?;

    let time_interval = active.clock_out(at)?;
    time_intervals.update(&time_interval)?;
    tracing::debug!(project = %project.name, id = time_interval.id, "clocked out");

    Ok(time_interval)
}

/// Clocks out when `project` is running, otherwise clocks in.
pub fn clock_activity_change(time_intervals: &mut TimeIntervals, project: &Project, at: i64) -> Result<TimeInterval> {
    match time_intervals.find_active(project.id)? {
        Some(_) => clock_out(time_intervals, project, at),
        None => clock_in(time_intervals, project, at),
    }
}

/// Toggles the registered flag of a selection.
///
/// When every selected interval is already registered they are all
/// unmarked, otherwise they are all marked. A selection containing a running
/// interval is refused and nothing is written.
pub fn mark_registered_time(time_intervals: &mut TimeIntervals, selected: &[TimeInterval]) -> Result<Vec<TimeInterval>> {
    if selected.iter().any(TimeInterval::is_active) {
        return Err(WorkerError::UnableToMarkActiveTimeIntervalAsRegistered.into());
    }

    let unmark = !selected.is_empty() && selected.iter().all(|time_interval| time_interval.registered);
    let updated: Vec<TimeInterval> = selected
        .iter()
        .map(|time_interval| {
            if unmark {
                time_interval.unmark_registered()
            } else {
                time_interval.mark_registered()
            }
        })
        .collect();

    time_intervals.update_all(&updated)?;

    Ok(updated)
}

/// Intervals of `project` counted by the time summary: everything started
/// since the beginning of the current week or month, plus a running one.
pub fn get_project_time_since(
    time_intervals: &mut TimeIntervals,
    project: &Project,
    starting_point: TimeIntervalStartingPoint,
    now: i64,
) -> Result<Vec<TimeInterval>> {
    time_intervals.find_since(project.id, starting_point.start_in_milliseconds(now))
}

/// Returns `false` when no interval has the id.
pub fn remove_time_interval(time_intervals: &mut TimeIntervals, id: i64) -> Result<bool> {
    time_intervals.delete(id)
}
