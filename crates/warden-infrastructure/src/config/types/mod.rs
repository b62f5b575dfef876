//! Configuration types

pub mod app;
pub mod auth;
pub mod logging;

pub use app::AppConfig;
pub use auth::{
    AuthConfig, GateConfig, GatePolicy, LoginAttemptConfig, SecurityWarning, TokenConfig,
    WarningSeverity,
};
pub use logging::LoggingConfig;
