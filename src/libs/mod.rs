pub mod backup;
pub mod config;
pub mod data_storage;
pub mod deeplink;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod project;
pub mod settings;
pub mod time;
pub mod time_interval;
pub mod time_report;
pub mod view;
