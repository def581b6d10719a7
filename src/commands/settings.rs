use crate::{
    libs::{
        formatter::TimeReportSummaryFormat,
        messages::Message,
        settings::{FileKeyValueStore, KeyValueStore},
        time::TimeIntervalStartingPoint,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: Option<SettingsCommand>,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print every setting with its current value
    Show,
    /// Hide registered time from reports
    HideRegisteredTime {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Ask before clocking out
    ConfirmClockOut {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Show links and details in `worker status`
    OngoingNotification {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Show the elapsed time in `worker status`
    OngoingNotificationChronometer {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// Start of the time summary
    TimeSummary {
        #[arg(value_enum)]
        value: TimeIntervalStartingPoint,
    },
    /// Format of durations in reports
    TimeReportSummaryFormat {
        #[arg(value_enum)]
        value: TimeReportSummaryFormat,
    },
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut settings = FileKeyValueStore::new()?;

    let (key, value) = match args.command {
        None | Some(SettingsCommand::Show) => {
            msg_print!(Message::SettingsHeader, true);
            return View::settings(&settings);
        }
        Some(SettingsCommand::HideRegisteredTime { value }) => {
            settings.set_hide_registered_time(value)?;
            ("hide_registered_time", value.to_string())
        }
        Some(SettingsCommand::ConfirmClockOut { value }) => {
            settings.set_confirm_clock_out(value)?;
            ("confirm_clock_out", value.to_string())
        }
        Some(SettingsCommand::OngoingNotification { value }) => {
            settings.set_ongoing_notification(value)?;
            ("ongoing_notification_enabled", value.to_string())
        }
        Some(SettingsCommand::OngoingNotificationChronometer { value }) => {
            settings.set_ongoing_notification_chronometer(value)?;
            ("ongoing_notification_chronometer_enabled", value.to_string())
        }
        Some(SettingsCommand::TimeSummary { value }) => {
            settings.set_starting_point_for_time_summary(value)?;
            ("time_summary", format!("{:?}", value))
        }
        Some(SettingsCommand::TimeReportSummaryFormat { value }) => {
            settings.set_time_report_summary_format(value)?;
            ("time_report_summary_format", format!("{:?}", value))
        }
    };

    msg_success!(Message::SettingUpdated(key.to_string(), value));
    Ok(())
}
