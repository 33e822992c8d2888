//! Configuration handling for the panels

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_OPEN_MS: u64 = 220;
const DEFAULT_CLOSE_MS: u64 = 180;
const DEFAULT_SINK_DELAY_MS: u64 = 1200;

/// Initial values for a freshly opened form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormDefaults {
    pub name: String,
    pub email: String,
    pub feedback_type: String,
    pub message: String,
}

/// User configuration for the panels
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelsConfig {
    /// Pre-filled values for the contact slide-over
    #[serde(default)]
    pub contact_defaults: FormDefaults,
    /// Pre-filled values for the feedback modal
    #[serde(default)]
    pub feedback_defaults: FormDefaults,
    /// Entrance animation length
    pub open_duration_ms: Option<u64>,
    /// Exit animation length
    pub close_duration_ms: Option<u64>,
    /// How long the simulated sink takes to answer
    pub sink_delay_ms: Option<u64>,
    /// Make the simulated sink fail every send
    pub sink_fail: Option<bool>,
}

impl PanelsConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "learnpad", "learnpad-panels")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PanelsConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.open_duration_ms.unwrap_or(DEFAULT_OPEN_MS))
    }

    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms.unwrap_or(DEFAULT_CLOSE_MS))
    }

    pub fn sink_delay(&self) -> Duration {
        Duration::from_millis(self.sink_delay_ms.unwrap_or(DEFAULT_SINK_DELAY_MS))
    }

    pub fn sink_fails(&self) -> bool {
        self.sink_fail.unwrap_or(false)
    }
}
