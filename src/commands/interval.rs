use crate::{
    db::time_intervals::TimeIntervals,
    libs::{messages::Message, time_interval::remove_time_interval},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct IntervalArgs {
    #[command(subcommand)]
    command: IntervalCommand,
}

#[derive(Debug, Subcommand)]
enum IntervalCommand {
    /// Remove a time interval by id
    Remove { id: i64 },
}

pub fn cmd(args: IntervalArgs) -> Result<()> {
    match args.command {
        IntervalCommand::Remove { id } => {
            if remove_time_interval(&mut TimeIntervals::new()?, id)? {
                msg_success!(Message::TimeIntervalRemoved(id));
            } else {
                msg_error!(Message::TimeIntervalNotFound(id));
            }
        }
    }

    Ok(())
}
