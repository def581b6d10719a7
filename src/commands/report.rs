use crate::{
    db::{projects::Projects, time_reports::TimeReports},
    libs::{
        formatter::TimeReportSummaryFormat,
        messages::Message,
        project::require_project,
        settings::{FileKeyValueStore, KeyValueStore},
        time_report::{count_time_report_weeks, count_time_reports, find_time_report_weeks, find_time_reports, LoadRange},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    command: ReportCommand,
}

#[derive(Debug, Args)]
struct PageArgs {
    /// Project name, case is ignored
    project: String,
    /// Zero-based page, newest first
    #[arg(short, long, default_value_t = 0)]
    page: u32,
    /// Days or weeks per page
    #[arg(short, long, default_value_t = 10)]
    size: u32,
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    /// Time grouped by day
    Days(PageArgs),
    /// Time grouped by week
    Weeks(PageArgs),
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let settings = FileKeyValueStore::new()?;
    let format = TimeReportSummaryFormat::try_from(settings.time_report_summary_format())?;
    let time_reports = TimeReports::new()?;

    match args.command {
        ReportCommand::Days(page) => {
            let project = require_project(&mut Projects::new()?, &page.project)?;
            let days = find_time_reports(&settings, &time_reports, &project, LoadRange::page(page.page, page.size))?;
            if days.is_empty() {
                msg_info!(Message::NoTimeReports(project.name));
                return Ok(());
            }

            let total = count_time_reports(&settings, &time_reports, &project)?;
            msg_print!(Message::TimeReportHeader(project.name), true);
            View::days(&days, format.formatter().as_ref())?;
            msg_print!(Message::TimeReportPage(page.page, total));
        }
        ReportCommand::Weeks(page) => {
            let project = require_project(&mut Projects::new()?, &page.project)?;
            let weeks = find_time_report_weeks(&settings, &time_reports, &project, LoadRange::page(page.page, page.size))?;
            if weeks.is_empty() {
                msg_info!(Message::NoTimeReports(project.name));
                return Ok(());
            }

            let total = count_time_report_weeks(&settings, &time_reports, &project)?;
            msg_print!(Message::TimeReportWeeksHeader(project.name), true);
            View::weeks(&weeks, format.formatter().as_ref())?;
            msg_print!(Message::TimeReportPage(page.page, total));
        }
    }

    Ok(())
}
