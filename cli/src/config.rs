// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use eventdash_core::{APP_NAME, UpcomingEvent};
use tokio::fs;

const EVENTDASH_CONFIG_ENV: &str = "EVENTDASH_CONFIG";

/// Locates and parses the configuration file. Precedence: explicit
/// `--config` flag, then the `EVENTDASH_CONFIG` environment variable,
/// then the platform config directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(EVENTDASH_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?
        .parse::<Config>()?;

    config.holidays_path = expand_path(config.holidays_path);
    Ok(config)
}

/// Configuration for the EventDash application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the `holidays.json` catalog.
    pub holidays_path: PathBuf,

    /// User-created events shown alongside the resolved holidays.
    #[serde(default)]
    pub events: Vec<ConfigEvent>,
}

/// A user-created event entry in the configuration file.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ConfigEvent {
    /// Display label.
    pub name: String,

    /// Calendar date of the event, as a "YYYY-MM-DD" string.
    pub date: NaiveDate,

    /// Decorative emoji, if any.
    #[serde(default)]
    pub emoji: Option<String>,
}

impl From<ConfigEvent> for UpcomingEvent {
    fn from(event: ConfigEvent) -> Self {
        UpcomingEvent {
            name: event.name,
            date: event.date,
            emoji: event.emoji,
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {e}").into())
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

/// Handle a leading tilde in the catalog path.
fn expand_path(path: PathBuf) -> PathBuf {
    if let Some(s) = path.to_str()
        && let Some(stripped) = s.strip_prefix("~/")
    {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
        tracing::warn!("Home directory not found, leaving path as-is");
    }
    path
}
