// Tue Jan 13 2026 - Alex

use crate::memory::ByteOrder;
use crate::net::layouts::SOCKADDR_IN6;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Byte order of port, flow info and IPv4 address fields.
    pub wire_order: ByteOrder,
    pub log_level: String,
    pub color: bool,
    /// Layout used by `inspect` when none is given.
    pub default_layout: String,
    /// Bytes per line in hex dumps.
    pub dump_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wire_order: ByteOrder::NETWORK,
            log_level: "warn".to_string(),
            color: true,
            default_layout: SOCKADDR_IN6.to_string(),
            dump_width: 16,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn with_wire_order(mut self, order: ByteOrder) -> Self {
        self.wire_order = order;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_default_layout(mut self, layout: impl Into<String>) -> Self {
        self.default_layout = layout.into();
        self
    }

    pub fn with_dump_width(mut self, width: usize) -> Self {
        self.dump_width = width;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dump_width == 0 {
            return Err(ConfigError::Invalid("dump_width must be greater than 0".to_string()));
        }
        if self.default_layout.is_empty() {
            return Err(ConfigError::Invalid("default_layout must not be empty".to_string()));
        }
        if crate::utils::logging::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::Invalid(format!("unknown log level: {}", self.log_level)));
        }
        Ok(())
    }
}
