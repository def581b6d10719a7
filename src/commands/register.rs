use crate::{
    db::{projects::Projects, time_intervals::TimeIntervals},
    libs::{
        messages::Message,
        project::require_project,
        time::{local_date, now, parse_date, start_of_day, week_start},
        time_interval::{mark_registered_time, TimeInterval},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Project name, case is ignored
    project: String,
    /// Select every interval started on this day (YYYY-MM-DD or 'today')
    #[arg(short, long, conflicts_with_all = ["week", "ids"])]
    date: Option<String>,
    /// Select every interval of the week containing this day
    #[arg(short, long, conflicts_with = "ids")]
    week: Option<String>,
    /// Select intervals by id
    #[arg(long, value_delimiter = ',')]
    ids: Vec<i64>,
}

/// Marks the selection as registered, or unmarks it when all of it already is.
pub fn cmd(args: RegisterArgs) -> Result<()> {
    let project = require_project(&mut Projects::new()?, &args.project)?;
    let mut time_intervals = TimeIntervals::new()?;
    let today = local_date(now());

    let selected: Vec<TimeInterval> = if let Some(date) = &args.date {
        let Some(date) = parse_date(date, today) else {
            msg_bail_anyhow!(Message::InvalidDate(date.clone()));
        };
        time_intervals.find_between(project.id, start_of_day(date), start_of_day(date + Duration::days(1)))?
    } else if let Some(week) = &args.week {
        let Some(date) = parse_date(week, today) else {
            msg_bail_anyhow!(Message::InvalidDate(week.clone()));
        };
        let monday = week_start(date);
        time_intervals.find_between(project.id, start_of_day(monday), start_of_day(monday + Duration::days(7)))?
    } else {
        let mut selected = Vec::new();
        for id in &args.ids {
            match time_intervals.fetch_by_id(*id)? {
                Some(time_interval) if time_interval.project_id == project.id => selected.push(time_interval),
                _ => msg_bail_anyhow!(Message::TimeIntervalNotFound(*id)),
            }
        }
        selected
    };

    if selected.is_empty() {
        msg_info!(Message::NoTimeIntervalsSelected);
        return Ok(());
    }

    let updated = mark_registered_time(&mut time_intervals, &selected)?;
    if updated.iter().all(|time_interval| time_interval.registered) {
        msg_success!(Message::TimeRegistered(updated.len()));
    } else {
        msg_success!(Message::TimeUnregistered(updated.len()));
    }

    Ok(())
}
