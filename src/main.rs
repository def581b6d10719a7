use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use worker::commands::Cli;
use worker::libs::messages::{self, macros::is_debug_mode};
use worker::msg_error;

#[tokio::main]
async fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(messages::from_error(&e));
            ExitCode::FAILURE
        }
    }
}
