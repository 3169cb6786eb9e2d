//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration.
//! Configuration is stored in `<config dir>/config.json` with atomic writes
//! to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::{CONFIG_DIR_ENV, ConfigManager};
pub use models::{AnimationConfig, AppConfig, ContactConfig, FormConfig, WindowState};
