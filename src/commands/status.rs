use crate::{
    db::{projects::Projects, time_intervals::TimeIntervals},
    libs::{
        deeplink::project_uri,
        formatter::{DigitalHoursMinutesFormat, HoursMinutesFormat},
        messages::Message,
        project::find_active_projects,
        settings::{FileKeyValueStore, KeyValueStore},
        time::now,
    },
    msg_info, msg_print,
};
use anyhow::Result;

/// Lists running projects.
///
/// Links and the elapsed time follow the ongoing status settings.
pub fn cmd() -> Result<()> {
    let projects = find_active_projects(&mut Projects::new()?)?;
    if projects.is_empty() {
        msg_info!(Message::NoActiveProjects);
        return Ok(());
    }

    let settings = FileKeyValueStore::new()?;
    let detailed = settings.ongoing_notification();

    let mut time_intervals = TimeIntervals::new()?;
    let now = now();
    msg_print!(Message::ActiveProjectsHeader, true);
    for project in projects {
        let elapsed = match time_intervals.find_active(project.id)? {
            Some(time_interval) if detailed && settings.ongoing_notification_chronometer() => {
                DigitalHoursMinutesFormat.apply(time_interval.interval(now))
            }
            _ => String::new(),
        };
        msg_print!(Message::ChronometerLine(project.name.clone(), elapsed));
        if detailed {
            msg_print!(Message::ProjectDeepLink(project_uri(project.id)));
        }
    }

    Ok(())
}
