//! Command-line surface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. Domain failures bubble up as `anyhow::Error` and are
//! turned into a message by `main`.

pub mod backup;
pub mod clock;
pub mod init;
pub mod interval;
pub mod migrations;
pub mod open;
pub mod project;
pub mod register;
pub mod report;
pub mod settings;
pub mod status;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the backup server")]
    Init(init::InitArgs),
    #[command(about = "Create, list, show and remove projects", arg_required_else_help = true)]
    Project(project::ProjectArgs),
    #[command(about = "Clock in and out of a project", arg_required_else_help = true)]
    Clock(clock::ClockArgs),
    #[command(about = "Show projects that are clocked in")]
    Status,
    #[command(about = "Show time reports grouped by day or week", arg_required_else_help = true)]
    Report(report::ReportArgs),
    #[command(about = "Mark time intervals as registered, or unmark them", arg_required_else_help = true)]
    Register(register::RegisterArgs),
    #[command(about = "Manage single time intervals", arg_required_else_help = true)]
    Interval(interval::IntervalArgs),
    #[command(about = "Show the time summary of every project")]
    Sum(sum::SumArgs),
    #[command(about = "Show or change settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Write, upload or restore a backup", arg_required_else_help = true)]
    Backup(backup::BackupArgs),
    #[command(about = "Open a project from a worker:// link")]
    Open(open::OpenArgs),
    #[command(about = "Inspect database migrations", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Project(args) => project::cmd(args),
            Commands::Clock(args) => clock::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Report(args) => report::cmd(args),
            Commands::Register(args) => register::cmd(args),
            Commands::Interval(args) => interval::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Settings(args) => settings::cmd(args),
            Commands::Backup(args) => backup::cmd(args).await,
            Commands::Open(args) => open::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
