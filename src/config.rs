use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::domain::{DebugHostPolicy, LevelFilter, LoggerError};

pub const LEVEL_ENV_VAR: &str = "DEVCONSOLE_LEVEL";
pub const TRANSMIT_LEVEL_ENV_VAR: &str = "DEVCONSOLE_TRANSMIT_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerConfig {
    /// Threshold of the normal output path.
    pub level: LevelFilter,
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserConfig {
    /// Write one structured object per event instead of the raw arguments.
    pub as_object: bool,
    pub transmit: Option<TransmitConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransmitConfig {
    /// Threshold of the transmission channel. Falls back to the logger level.
    pub level: Option<LevelFilter>,
    pub debug_host: DebugHostPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Silent,
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            as_object: true,
            transmit: Some(TransmitConfig::default()),
        }
    }
}

impl Default for TransmitConfig {
    fn default() -> Self {
        Self {
            level: Some(LevelFilter::Debug),
            debug_host: DebugHostPolicy::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, LoggerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default configuration with the levels overridden from the environment.
    pub fn from_env() -> Result<Self, LoggerError> {
        let mut config = Self::default();

        if let Ok(level) = env::var(LEVEL_ENV_VAR) {
            config.level = level.parse::<LevelFilter>()?;
        }
        if let Ok(level) = env::var(TRANSMIT_LEVEL_ENV_VAR) {
            let level: LevelFilter = level.parse()?;
            config
                .browser
                .transmit
                .get_or_insert_with(TransmitConfig::default)
                .level = Some(level);
        }

        Ok(config)
    }

    /// Effective threshold of the transmission channel, `None` when no hook
    /// is configured.
    pub fn transmit_level(&self) -> Option<LevelFilter> {
        self.browser
            .transmit
            .as_ref()
            .map(|transmit| transmit.level.unwrap_or(self.level))
    }

    pub fn debug_host(&self) -> DebugHostPolicy {
        self.browser
            .transmit
            .as_ref()
            .map(|transmit| transmit.debug_host.clone())
            .unwrap_or_default()
    }
}

pub static CONFIG: Lazy<LoggerConfig> = Lazy::new(LoggerConfig::default);
