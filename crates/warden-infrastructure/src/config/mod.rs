//! Configuration
//!
//! Typed configuration sections and the Figment-based loader. Configuration
//! is built once at startup and handed to components by reference; nothing
//! mutates it afterwards.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, AuthConfig, GateConfig, GatePolicy, LoggingConfig, LoginAttemptConfig,
    SecurityWarning, TokenConfig, WarningSeverity,
};
