use crate::{
    db::{projects::Projects, time_intervals::TimeIntervals},
    libs::{
        formatter::TimeReportSummaryFormat,
        messages::Message,
        project::find_projects,
        settings::{FileKeyValueStore, KeyValueStore},
        time::{local_date, now, Accumulated, TimeIntervalStartingPoint},
        time_interval::{get_project_time_since, TimeInterval},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Override the configured starting point
    #[arg(short, long, value_enum)]
    since: Option<TimeIntervalStartingPoint>,
}

/// Time of every project since the start of the current week or month.
///
/// A running interval counts up to now.
pub fn cmd(args: SumArgs) -> Result<()> {
    let settings = FileKeyValueStore::new()?;
    let starting_point = match args.since {
        Some(starting_point) => starting_point,
        None => TimeIntervalStartingPoint::try_from(settings.starting_point_for_time_summary())?,
    };
    let format = TimeReportSummaryFormat::try_from(settings.time_report_summary_format())?;

    let projects = find_projects(&mut Projects::new()?)?;
    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    let mut time_intervals = TimeIntervals::new()?;
    let now = now();
    let mut summaries = Vec::with_capacity(projects.len());
    for project in projects {
        let project_time = get_project_time_since(&mut time_intervals, &project, starting_point, now)?;
        let time = project_time.iter().map(|time_interval| time_interval.interval(now)).accumulated();
        let active = project_time.iter().any(TimeInterval::is_active);
        summaries.push((project, time, active));
    }

    let since = starting_point.start_date(local_date(now));
    msg_print!(Message::TimeSummaryHeader(since.format("%Y-%m-%d").to_string()), true);
    View::time_summaries(&summaries, format.formatter().as_ref())
}
