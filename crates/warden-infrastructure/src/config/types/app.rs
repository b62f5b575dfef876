//! Main application configuration

use super::auth::AuthConfig;
use super::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Authentication core settings
    pub auth: AuthConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
