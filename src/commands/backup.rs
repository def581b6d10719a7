use crate::{
    db::backups::Backups,
    libs::{backup::Backup, config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[command(subcommand)]
    command: BackupCommand,
}

#[derive(Debug, Subcommand)]
enum BackupCommand {
    /// Write a backup file
    Write {
        /// Defaults to the backups directory next to the database
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a backup file and post it to the configured server
    Upload,
    /// Load a backup file into an empty database
    Restore { file: PathBuf },
}

pub async fn cmd(args: BackupArgs) -> Result<()> {
    match args.command {
        BackupCommand::Write { output } => {
            let backup = Backup::collect(&mut Backups::new()?)?;
            let path = match output {
                Some(path) => path,
                None => Backup::default_path()?,
            };
            backup.write(&path)?;
            msg_success!(Message::BackupWritten(path.display().to_string()));
        }
        BackupCommand::Upload => {
            let Some(server) = Config::read()?.server else {
                msg_bail_anyhow!(Message::ServerNotConfigured);
            };

            let backup = Backup::collect(&mut Backups::new()?)?;
            let path = Backup::default_path()?;
            backup.write(&path)?;
            msg_success!(Message::BackupWritten(path.display().to_string()));

            let url = backup.upload(&server).await?;
            msg_success!(Message::BackupUploaded(url));
        }
        BackupCommand::Restore { file } => {
            let backup = Backup::read(&file)?;
            let (projects, time_intervals) = backup.restore(&mut Backups::new()?)?;
            msg_success!(Message::BackupRestored(projects, time_intervals));
        }
    }

    Ok(())
}
