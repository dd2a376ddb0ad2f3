//! # Configuration Management Module
//!
//! All runtime settings for evebot live in one TOML file. Every section has
//! defaults so a partially filled file (or none, via `evebot init`) is usable.
//!
//! ## Configuration Structure
//!
//! - [`BotConfig`] - Bot identity and public command prefix
//! - [`SdeConfig`] - Location of the static data export (SQLite)
//! - [`EsiConfig`] - ESI endpoint, datasource and price cache TTL
//! - [`ZkillConfig`] - zKillboard endpoint
//! - [`HttpConfig`] - Shared HTTP client settings
//! - [`LoggingConfig`] - Logging level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [bot]
//! name = "sbot"
//! command_prefix = "!"
//! user_agent = "sbot"
//!
//! [sde]
//! path = "data/sde.sqlite"
//!
//! [esi]
//! base_url = "https://esi.evetech.net/latest"
//! datasource = "tranquility"
//! price_ttl_minutes = 120
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::fs;

/// Prefix characters accepted for chat commands.
pub const ALLOWED_PREFIXES: [char; 6] = ['!', '^', '.', '$', '/', '>'];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub sde: SdeConfig,
    #[serde(default)]
    pub esi: EsiConfig,
    #[serde(default)]
    pub zkill: ZkillConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub name: String,
    /// Single-character command prefix. Must be one of [`ALLOWED_PREFIXES`];
    /// anything else falls back to `!`.
    #[serde(default = "default_prefix")]
    pub command_prefix: String,
    /// Sent as `User-Agent` on every outbound request. zKillboard rejects
    /// anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_user_agent() -> String {
    "sbot".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "sbot".to_string(),
            command_prefix: default_prefix(),
            user_agent: default_user_agent(),
        }
    }
}

impl BotConfig {
    /// Resolve the configured prefix, falling back to `!` when unset or not allowed.
    pub fn prefix_char(&self) -> char {
        let mut chars = self.command_prefix.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if ALLOWED_PREFIXES.contains(&c) => c,
            _ => '!',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdeConfig {
    /// Path to the SQLite static data export containing `invTypes` and `mapSolarSystems`.
    pub path: String,
}

impl Default for SdeConfig {
    fn default() -> Self {
        Self {
            path: "data/sde.sqlite".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsiConfig {
    pub base_url: String,
    pub datasource: String,
    /// Maximum age of the bulk market price snapshot, in minutes.
    pub price_ttl_minutes: u64,
}

impl Default for EsiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://esi.evetech.net/latest".to_string(),
            datasource: "tranquility".to_string(),
            price_ttl_minutes: 120,
        }
    }
}

impl EsiConfig {
    pub fn price_ttl(&self) -> Duration {
        Duration::from_secs(self.price_ttl_minutes * 60)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZkillConfig {
    pub base_url: String,
}

impl Default for ZkillConfig {
    fn default() -> Self {
        Self {
            base_url: "https://zkillboard.com/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout. Unset means the client default (no timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("evebot.log".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
