//! Configuration for the ledger

use crate::types::{Currency, Parties};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ledger configuration
///
/// The two party names live here, not in the engine: the core only ever
/// sees `Party::A` and `Party::B`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory for RocksDB
    pub data_dir: PathBuf,

    /// Display names for the two parties
    pub parties: Parties,

    /// Single reporting currency for the ledger
    pub currency: Currency,

    /// RocksDB configuration
    pub rocksdb: RocksDbConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/ledger"),
            parties: Parties::new("Party A", "Party B"),
            currency: Currency::USD,
            rocksdb: RocksDbConfig::default(),
        }
    }
}

/// RocksDB configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocksDbConfig {
    /// Write buffer size (MB)
    pub write_buffer_size_mb: usize,

    /// Max background jobs (compaction + flush)
    pub max_background_jobs: i32,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            write_buffer_size_mb: 64,
            max_background_jobs: 2,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(data_dir) = std::env::var("SPLITLEDGER_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(name) = std::env::var("SPLITLEDGER_PARTY_A") {
            config.parties.a = name;
        }

        if let Ok(name) = std::env::var("SPLITLEDGER_PARTY_B") {
            config.parties.b = name;
        }

        if let Ok(code) = std::env::var("SPLITLEDGER_CURRENCY") {
            config.currency = Currency::parse(&code)
                .ok_or_else(|| crate::Error::Config(format!("Unknown currency: {}", code)))?;
        }

        Ok(config)
    }
}
