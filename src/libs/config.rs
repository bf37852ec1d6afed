//! Configuration management for punchclock.
//!
//! Settings live in a pretty-printed JSON file inside the per-user data
//! directory (see [`DataStorage`]). A missing file is not an error: the
//! defaults point at a local development server and leave the employee id
//! unset until `punchclock init` has run.
//!
//! ## Sources
//!
//! 1. `config.json` in the data directory
//! 2. Environment overrides, usually loaded from a `.env` file:
//!    - `PUNCHCLOCK_API_URL`
//!    - `PUNCHCLOCK_EMPLOYEE_ID`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::libs::config::Config;
//!
//! # fn run() -> anyhow::Result<()> {
//! let config = Config::read()?.with_env();
//! let attendance = config.attendance()?;
//! println!("{} as employee {}", attendance.api_base_url, attendance.employee_id);
//! # Ok(())
//! # }
//! ```

use super::credentials::Credentials;
use super::data_storage::DataStorage;
use crate::libs::attendance::AttendanceConfig;
use crate::libs::lateness::LatenessPolicy;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LATE_CUTOFF: &str = "10:15";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

pub const ENV_API_URL: &str = "PUNCHCLOCK_API_URL";
pub const ENV_EMPLOYEE_ID: &str = "PUNCHCLOCK_EMPLOYEE_ID";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the attendance API, e.g. `http://192.168.1.26:8080/api`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    /// `HH:MM` from which a punch-in counts as late.
    #[serde(default = "default_late_cutoff")]
    pub late_cutoff: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_late_cutoff() -> String {
    DEFAULT_LATE_CUTOFF.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            employee_id: None,
            late_cutoff: default_late_cutoff(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Config {
    /// Loads the configuration file, or the defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file; returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Applies `PUNCHCLOCK_API_URL` and `PUNCHCLOCK_EMPLOYEE_ID` when set.
    pub fn with_env(mut self) -> Self {
        if let Some(api_url) = env::var(ENV_API_URL).ok().filter(|value| !value.trim().is_empty()) {
            self.api_url = api_url.trim().to_string();
        }
        if let Some(employee_id) = env::var(ENV_EMPLOYEE_ID).ok().filter(|value| !value.trim().is_empty()) {
            self.employee_id = Some(employee_id.trim().to_string());
        }
        self
    }

    /// Construction parameters for the attendance helper.
    ///
    /// Fails when the employee id has not been configured yet.
    pub fn attendance(&self) -> Result<AttendanceConfig> {
        let employee_id = match self.employee_id.as_deref().map(str::trim) {
            Some(employee_id) if !employee_id.is_empty() => employee_id,
            _ => msg_bail_anyhow!(Message::EmployeeIdNotSet),
        };
        if self.api_url.trim().is_empty() {
            msg_bail_anyhow!(Message::ApiUrlNotSet);
        }
        Ok(AttendanceConfig::new(self.api_url.trim(), employee_id))
    }

    pub fn lateness(&self) -> Result<LatenessPolicy> {
        LatenessPolicy::parse(&self.late_cutoff).ok_or_else(|| msg_error_anyhow!(Message::InvalidLateCutoff(self.late_cutoff.clone())))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }

    /// Interactive setup wizard, seeded with the current values.
    ///
    /// An entered auth token is written to the credential store, never to the config file.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader);
        let api_url: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(config.api_url)
            .interact_text()?;

        let employee_id: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptEmployeeId.to_string())
            .default(config.employee_id.unwrap_or_default())
            .interact_text()?;

        let late_cutoff: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptLateCutoff.to_string())
            .default(config.late_cutoff)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                LatenessPolicy::parse(input)
                    .map(|_| ())
                    .ok_or_else(|| Message::InvalidLateCutoff(input.clone()).to_string())
            })
            .interact_text()?;

        let request_timeout_ms: u64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptRequestTimeout.to_string())
            .default(config.request_timeout_ms)
            .interact_text()?;

        let token = Password::with_theme(&theme)
            .with_prompt(Message::PromptAuthToken.to_string())
            .allow_empty_password(true)
            .interact()?;
        if !token.trim().is_empty() {
            Credentials::new()?.store(&token)?;
            msg_print!(Message::TokenSaved);
        }

        Ok(Self {
            api_url: api_url.trim().to_string(),
            employee_id: Some(employee_id.trim().to_string()).filter(|id| !id.is_empty()),
            late_cutoff: late_cutoff.trim().to_string(),
            request_timeout_ms,
        })
    }
}
