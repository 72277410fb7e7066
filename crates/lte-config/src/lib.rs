//! eNB configuration management
//!
//! This crate provides configuration loading and parsing for the eNB control plane:
//! - TOML configuration file parsing
//! - Stack configuration structures (MAC, CQI, PUSCH and cell table)

pub mod stack_config;
pub mod toml_config;

pub use stack_config::*;
pub use toml_config::*;
