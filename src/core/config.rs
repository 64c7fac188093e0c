//! Configuration management for the MCP server and CLI.
//!
//! Values come from defaults, overridden by `MCP_*` environment variables
//! (optionally loaded from a `.env` file). Invalid values are logged and the
//! default is kept.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

use super::transport::TransportConfig;
use crate::domains::accounting::Pricing;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Token price used for cost figures.
    pub pricing: Pricing,

    /// Token accounting configuration.
    pub accounting: AccountingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl LoggingConfig {
    /// Read only the log level, so logging can start before the rest of the
    /// configuration is parsed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

/// Token accounting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountingConfig {
    /// Frozen token table to load instead of the one bundled in the binary.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "rc-mcp-gen".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            pricing: Pricing::default(),
            accounting: AccountingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`,
    /// `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH`, `MCP_HTTP_CORS`,
    /// `MCP_PRICE_PER_MILLION`, `MCP_PRICE_LABEL`, `MCP_TOKEN_SNAPSHOT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env();

        if let Ok(raw) = std::env::var("MCP_PRICE_PER_MILLION") {
            match Decimal::from_str(raw.trim()) {
                Ok(price) if !price.is_sign_negative() => {
                    config.pricing.per_million = price;
                    info!("Token price set to ${} per 1M tokens", price);
                }
                _ => warn!(
                    value = %raw,
                    "Invalid MCP_PRICE_PER_MILLION, using ${}",
                    config.pricing.per_million
                ),
            }
        }

        if let Ok(label) = std::env::var("MCP_PRICE_LABEL") {
            config.pricing.label = label;
        }

        if let Ok(path) = std::env::var("MCP_TOKEN_SNAPSHOT") {
            if path.trim().is_empty() {
                warn!("MCP_TOKEN_SNAPSHOT is empty, using the bundled token table");
            } else {
                config.accounting.snapshot_path = Some(PathBuf::from(path));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "MCP_SERVER_NAME",
        "MCP_PRICE_PER_MILLION",
        "MCP_PRICE_LABEL",
        "MCP_TOKEN_SNAPSHOT",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "rc-mcp-gen");
        assert_eq!(config.pricing, Pricing::default());
        assert!(config.accounting.snapshot_path.is_none());
    }

    #[test]
    fn test_pricing_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_PRICE_PER_MILLION", "0.15");
            std::env::set_var("MCP_PRICE_LABEL", "GPT-4o mini");
        }
        let config = Config::from_env();
        assert_eq!(config.pricing.per_million, Decimal::new(15, 2));
        assert_eq!(config.pricing.label, "GPT-4o mini");
        clear_env();
    }

    #[test]
    fn test_invalid_price_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_PRICE_PER_MILLION", "cheap");
        }
        assert_eq!(Config::from_env().pricing, Pricing::default());

        unsafe {
            std::env::set_var("MCP_PRICE_PER_MILLION", "-1");
        }
        assert_eq!(Config::from_env().pricing, Pricing::default());
        clear_env();
    }

    #[test]
    fn test_snapshot_path_and_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "rocketchat-tools");
            std::env::set_var("MCP_TOKEN_SNAPSHOT", "/tmp/token_counts.json");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "rocketchat-tools");
        assert_eq!(
            config.accounting.snapshot_path,
            Some(PathBuf::from("/tmp/token_counts.json"))
        );
        clear_env();
    }

    #[test]
    fn test_blank_snapshot_path_is_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_TOKEN_SNAPSHOT", "  ");
        }
        assert!(Config::from_env().accounting.snapshot_path.is_none());
        clear_env();
    }
}
