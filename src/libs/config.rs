//! Application configuration stored in `config.json`.
//!
//! The only configurable part today is the backup server. A missing file is
//! not an error: [`Config::read`] returns the default (no server), and the
//! backup upload refuses to run until `worker init` has saved one.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Endpoint that receives backup uploads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL, `/backup` is appended on upload.
    pub api_url: String,
    /// Sent as a bearer token.
    pub auth_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup, prefilled with the current values.
    ///
    /// An empty server URL clears the server configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or(ServerConfig {
            api_url: String::new(),
            auth_token: String::new(),
        });

        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(default.api_url)
            .allow_empty(true)
            .interact_text()?;

        if api_url.trim().is_empty() {
            msg_info!(Message::ConfigServerSkipped);
            config.server = None;
            return Ok(config);
        }

        let auth_token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAuthToken.to_string())
            .default(default.auth_token)
            .interact_text()?;

        config.server = Some(ServerConfig {
            api_url: api_url.trim().to_string(),
            auth_token,
        });
        Ok(config)
    }
}
