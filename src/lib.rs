//! # Worker - project time tracking
//!
//! Create projects, clock in and out of them, mark time as registered and
//! review the result grouped by day and week.
//!
//! The aggregation core (durations, day and week grouping, paging) lives in
//! [`libs`], storage in [`db`] and the command-line surface in [`commands`].
//!
//! ```rust,no_run
//! use worker::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
