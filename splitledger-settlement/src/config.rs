//! Configuration for the settlement engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Balances with magnitude below this count as settled
    pub tolerance: Decimal,

    /// Notification title for a confirmed settlement
    pub notification_title: String,

    /// Notification category (routes the message in the host app)
    pub notification_category: String,

    /// Deep link attached to settlement notifications
    pub deep_link: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(1, 2), // 0.01
            notification_title: "Balance settled".to_string(),
            notification_category: "settlement".to_string(),
            deep_link: "app://ledger".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("Failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(tolerance) = std::env::var("SPLITLEDGER_SETTLEMENT_TOLERANCE") {
            config.tolerance = tolerance
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid tolerance: {}", e)))?;
        }

        if let Ok(title) = std::env::var("SPLITLEDGER_NOTIFICATION_TITLE") {
            config.notification_title = title;
        }

        if let Ok(category) = std::env::var("SPLITLEDGER_NOTIFICATION_CATEGORY") {
            config.notification_category = category;
        }

        if let Ok(deep_link) = std::env::var("SPLITLEDGER_DEEP_LINK") {
            config.deep_link = deep_link;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the planner cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.tolerance <= Decimal::ZERO {
            return Err(crate::Error::Config(
                "tolerance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
