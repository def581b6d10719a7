use crate::{
    db::{projects::Projects, time_intervals::TimeIntervals},
    libs::{
        formatter::{clock_time, TimeReportSummaryFormat},
        messages::Message,
        project::{require_project, Project},
        settings::{FileKeyValueStore, KeyValueStore},
        time::{local_date, now, parse_clock_time},
        time_interval::{clock_activity_change, clock_in, clock_out, require_active, TimeInterval},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClockArgs {
    #[command(subcommand)]
    command: ClockCommand,
}

#[derive(Debug, Args)]
struct ClockTarget {
    /// Project name, case is ignored
    project: String,
    /// Time to record instead of now (HH:MM or 'YYYY-MM-DD HH:MM')
    #[arg(long)]
    at: Option<String>,
    /// Do not ask before clocking out
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Subcommand)]
enum ClockCommand {
    /// Start tracking time
    In(ClockTarget),
    /// Stop tracking time
    Out(ClockTarget),
    /// Clock out when clocked in, otherwise clock in
    Toggle(ClockTarget),
}

pub fn cmd(args: ClockArgs) -> Result<()> {
    match args.command {
        ClockCommand::In(target) => handle_in(&target),
        ClockCommand::Out(target) => handle_out(&target),
        ClockCommand::Toggle(target) => handle_toggle(&target),
    }
}

fn resolve_at(at: &Option<String>) -> Result<i64> {
    let now = now();
    match at {
        None => Ok(now),
        Some(value) => match parse_clock_time(value, local_date(now)) {
            Some(at) => Ok(at),
            None => msg_bail_anyhow!(Message::InvalidClockTime(value.clone())),
        },
    }
}

fn handle_in(target: &ClockTarget) -> Result<()> {
    let project = require_project(&mut Projects::new()?, &target.project)?;
    let at = resolve_at(&target.at)?;

    let time_interval = clock_in(&mut TimeIntervals::new()?, &project, at)?;
    report(&project, &time_interval, at)
}

fn handle_out(target: &ClockTarget) -> Result<()> {
    let project = require_project(&mut Projects::new()?, &target.project)?;
    let at = resolve_at(&target.at)?;
    let mut time_intervals = TimeIntervals::new()?;

    require_active(&mut time_intervals, &project)?;
    if !confirmed(target, &project)? {
        msg_info!(Message::ClockOutCancelled);
        return Ok(());
    }

    let time_interval = clock_out(&mut time_intervals, &project, at)?;
    report(&project, &time_interval, at)
}

fn handle_toggle(target: &ClockTarget) -> Result<()> {
    let project = require_project(&mut Projects::new()?, &target.project)?;
    let at = resolve_at(&target.at)?;
    let mut time_intervals = TimeIntervals::new()?;

    if time_intervals.find_active(project.id)?.is_some() && !confirmed(target, &project)? {
        msg_info!(Message::ClockOutCancelled);
        return Ok(());
    }

    let time_interval = clock_activity_change(&mut time_intervals, &project, at)?;
    report(&project, &time_interval, at)
}

fn report(project: &Project, time_interval: &TimeInterval, at: i64) -> Result<()> {
    if time_interval.is_active() {
        msg_success!(Message::ClockedIn(project.name.clone(), clock_time(at)));
        return Ok(());
    }

    let settings = FileKeyValueStore::new()?;
    let format = TimeReportSummaryFormat::try_from(settings.time_report_summary_format())?;
    msg_success!(Message::ClockedOut(
        project.name.clone(),
        clock_time(at),
        format.formatter().apply(time_interval.time())
    ));
    Ok(())
}

/// Asks before clocking out unless `--yes` is given or the setting is off.
fn confirmed(target: &ClockTarget, project: &Project) -> Result<bool> {
    if target.yes || !FileKeyValueStore::new()?.confirm_clock_out() {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClockOut(project.name.clone()).to_string())
        .default(true)
        .interact()?;

    Ok(confirmed)
}
