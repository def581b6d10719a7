use super::deeplink::project_uri;
use super::formatter::{day_summary, FormattedTimeInterval, HoursMinutesFormat};
use super::project::Project;
use super::settings::{AppKey, KeyValueStore};
use super::time::HoursMinutes;
use super::time_report::{TimeReportDay, TimeReportDayState, TimeReportWeek};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn projects(projects: &[Project]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "LINK"]);
        for project in projects {
            table.add_row(row![project.id, project.name, project_uri(project.id)]);
        }
        table.printstd();

        Ok(())
    }

    /// One row per project with the time counted since the starting point.
    pub fn time_summaries(summaries: &[(Project, HoursMinutes, bool)], format: &dyn HoursMinutesFormat) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "TIME", "ACTIVE"]);
        for (project, time, active) in summaries {
            table.add_row(row![project.name, format.apply(*time), if *active { "●" } else { "" }]);
        }
        table.printstd();

        Ok(())
    }

    /// Days with their intervals underneath, newest first.
    pub fn days(days: &[TimeReportDay], format: &dyn HoursMinutesFormat) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "ID", "INTERVAL", "TIME", "REGISTERED"]);
        for day in days {
            let marker = match day.state() {
                TimeReportDayState::Active => " ●",
                TimeReportDayState::Inactive => "",
            };
            table.add_row(row![
                b->format!("{}{}", day.date.format("%a %Y-%m-%d"), marker),
                "",
                "",
                b->day_summary(day, format),
                if day.is_registered() { "✓" } else { "" }
            ]);
            for time_interval in &day.time_intervals {
                let formatted = FormattedTimeInterval::new(time_interval, format);
                table.add_row(row![
                    "",
                    formatted.id,
                    formatted.title,
                    formatted.duration,
                    if formatted.registered { "✓" } else { "" }
                ]);
            }
        }
        table.printstd();

        Ok(())
    }

    pub fn weeks(weeks: &[TimeReportWeek], format: &dyn HoursMinutesFormat) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WEEK", "DAY", "TIME", "REGISTERED"]);
        for week in weeks {
            table.add_row(row![
                b->format!("{} (W{})", week.start.format("%Y-%m-%d"), week.start.format("%V")),
                "",
                b->format.apply(week.time_summary()),
                if week.is_registered() { "✓" } else { "" }
            ]);
            for day in &week.days {
                table.add_row(row![
                    "",
                    day.date.format("%a %Y-%m-%d"),
                    day_summary(day, format),
                    if day.is_registered() { "✓" } else { "" }
                ]);
            }
        }
        table.printstd();

        Ok(())
    }

    pub fn settings(settings: &dyn KeyValueStore) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "VALUE"]);
        for key in AppKey::ALL {
            let value = match key {
                AppKey::HideRegisteredTime => settings.hide_registered_time().to_string(),
                AppKey::ConfirmClockOut => settings.confirm_clock_out().to_string(),
                AppKey::OngoingNotificationEnabled => settings.ongoing_notification().to_string(),
                AppKey::OngoingNotificationChronometerEnabled => settings.ongoing_notification_chronometer().to_string(),
                AppKey::TimeSummary => settings.starting_point_for_time_summary().to_string(),
                AppKey::TimeReportSummaryFormat => settings.time_report_summary_format().to_string(),
            };
            table.add_row(row![key.raw_value(), value]);
        }
        table.printstd();

        Ok(())
    }

    pub fn migrations(history: &[(u32, String, String)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for (version, name, applied_at) in history {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();

        Ok(())
    }
}
