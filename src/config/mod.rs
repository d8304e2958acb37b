//! Configuration module.
//!
//! Provides:
//! - TOML configuration loading and saving
//! - Progress reporting mode selection
//! - Configuration and thread-URL validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, NetworkConfig, OptionsConfig};
pub use modes::ProgressMode;
pub use validation::{parse_thread_url, validate_config, ThreadLink};
