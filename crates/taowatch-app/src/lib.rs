//! taowatch - subnet statistics monitor.
//!
//! Wires the pieces together:
//! - Configuration loading (toml file + environment overrides)
//! - Structured logging initialization
//! - The `taowatch` binary running the gateway server
//! - The `snapshot` binary driving the client view model once

pub mod config;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
