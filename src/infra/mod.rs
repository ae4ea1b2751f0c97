//! Infrastructure - configuration
//!
//! This module contains infrastructure concerns:
//! - `config` - Engine configuration (TOML loading, defaults)

pub mod config;

// Re-export commonly used types
pub use config::Config;
