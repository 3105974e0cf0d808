use crate::core::Transaction;
use crate::error::{BlockchainError, Result};
use log::info;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub const DEFAULT_FEE_THRESHOLD: i64 = 10;

const FEE_THRESHOLD_KEY: &str = "FEE_THRESHOLD";
const LOOKUP_TRANSACTION_KEY: &str = "LOOKUP_TRANSACTION";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

/// Optional settings read from a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    fee_threshold: Option<i64>,
    lookup: Option<String>,
    log_level: Option<String>,
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut map = HashMap::new();
        for key in [FEE_THRESHOLD_KEY, LOOKUP_TRANSACTION_KEY, LOG_LEVEL_KEY] {
            if let Some(value) = lookup(key) {
                map.insert(String::from(key), value);
            }
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    /// Merge settings from a TOML file; values already set from the environment win
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BlockchainError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let file: ConfigFile = toml::from_str(&contents)?;

        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        if let Some(threshold) = file.fee_threshold {
            inner
                .entry(String::from(FEE_THRESHOLD_KEY))
                .or_insert_with(|| threshold.to_string());
        }
        if let Some(lookup) = file.lookup {
            inner
                .entry(String::from(LOOKUP_TRANSACTION_KEY))
                .or_insert(lookup);
        }
        if let Some(level) = file.log_level {
            inner.entry(String::from(LOG_LEVEL_KEY)).or_insert(level);
        }

        info!("Loaded configuration from {}", path.display());
        Ok(())
    }

    pub fn get_fee_threshold(&self) -> Result<Option<i64>> {
        match self.get(FEE_THRESHOLD_KEY) {
            Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|e| {
                BlockchainError::Config(format!("Invalid fee threshold '{raw}': {e}"))
            }),
            None => Ok(None),
        }
    }

    pub fn fee_threshold_or_default(&self) -> Result<i64> {
        Ok(self.get_fee_threshold()?.unwrap_or(DEFAULT_FEE_THRESHOLD))
    }

    pub fn set_fee_threshold(&self, threshold: i64) {
        self.set(FEE_THRESHOLD_KEY, threshold.to_string());
    }

    pub fn get_lookup_transaction(&self) -> Result<Option<Transaction>> {
        match self.get(LOOKUP_TRANSACTION_KEY) {
            Some(raw) => raw
                .parse::<Transaction>()
                .map(Some)
                .map_err(|e| BlockchainError::Config(format!("Invalid lookup transaction: {e}"))),
            None => Ok(None),
        }
    }

    pub fn set_lookup_transaction(&self, transaction: &Transaction) {
        self.set(LOOKUP_TRANSACTION_KEY, transaction.to_string());
    }

    /// Command-line values win over the environment and the config file
    pub fn apply_overrides(&self, threshold: Option<i64>, lookup: Option<&Transaction>) {
        if let Some(threshold) = threshold {
            self.set_fee_threshold(threshold);
        }
        if let Some(transaction) = lookup {
            self.set_lookup_transaction(transaction);
        }
    }

    pub fn get_log_level(&self) -> Option<String> {
        self.get(LOG_LEVEL_KEY)
    }

    fn get(&self, key: &str) -> Option<String> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(key), value);
    }
}
