//! Configuration management
//!
//! This module handles process-wide settings: the default fee threshold,
//! the transaction to look up in every block and the log level.
//!
//! Values come from the environment first, then an optional TOML file.

pub mod settings;

pub use settings::{Config, DEFAULT_FEE_THRESHOLD, GLOBAL_CONFIG};
