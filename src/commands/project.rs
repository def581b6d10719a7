use crate::{
    db::{projects::Projects, time_intervals::TimeIntervals},
    libs::{
        deeplink::project_uri,
        formatter::TimeReportSummaryFormat,
        messages::Message,
        project::{create_project, find_projects, remove_project, require_project, Project},
        settings::{FileKeyValueStore, KeyValueStore},
        time::{now, Accumulated, TimeIntervalStartingPoint},
        time_interval::{get_project_time_since, TimeInterval},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a project
    Create { name: String },
    /// List all projects
    List,
    /// Show a project with its current time summary
    Show { name: String },
    /// Remove a project and all of its time
    Remove {
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: ProjectArgs) -> Result<()> {
    match args.command {
        ProjectCommand::Create { name } => handle_create(&name),
        ProjectCommand::List => handle_list(),
        ProjectCommand::Show { name } => handle_show(&name),
        ProjectCommand::Remove { name, yes } => handle_remove(&name, yes),
    }
}

fn handle_create(name: &str) -> Result<()> {
    let project = create_project(&mut Projects::new()?, name)?;

    msg_success!(Message::ProjectCreated(project.name.clone()));
    msg_print!(Message::ProjectDeepLink(project_uri(project.id)));
    Ok(())
}

fn handle_list() -> Result<()> {
    let projects = find_projects(&mut Projects::new()?)?;
    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&projects)
}

fn handle_show(name: &str) -> Result<()> {
    let project = require_project(&mut Projects::new()?, name)?;
    show(&project)
}

/// Prints the project with the time counted since the configured starting point.
pub(crate) fn show(project: &Project) -> Result<()> {
    let settings = FileKeyValueStore::new()?;
    let starting_point = TimeIntervalStartingPoint::try_from(settings.starting_point_for_time_summary())?;
    let format = TimeReportSummaryFormat::try_from(settings.time_report_summary_format())?;

    let now = now();
    let time_intervals = get_project_time_since(&mut TimeIntervals::new()?, project, starting_point, now)?;
    let time = time_intervals.iter().map(|time_interval| time_interval.interval(now)).accumulated();
    let active = time_intervals.iter().any(TimeInterval::is_active);

    View::projects(std::slice::from_ref(project))?;
    View::time_summaries(&[(project.clone(), time, active)], format.formatter().as_ref())
}

fn handle_remove(name: &str, yes: bool) -> Result<()> {
    let mut projects = Projects::new()?;
    let project = require_project(&mut projects, name)?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveProject(project.name.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        remove_project(&mut projects, &project)?;
        msg_success!(Message::ProjectRemoved(project.name));
    } else {
        msg_info!(Message::ProjectRemoveCancelled);
    }

    Ok(())
}
