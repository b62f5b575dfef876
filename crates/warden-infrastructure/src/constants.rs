//! Infrastructure layer constants
//!
//! Contains defaults and protocol constants of the infrastructure
//! implementation. Authority names and user-facing messages are defined in
//! `warden_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "warden.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "warden";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WARDEN";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Default token lifetime in seconds (5 hours)
pub const TOKEN_DEFAULT_TTL_SECS: u64 = 5 * 60 * 60;

/// Minimum signing secret length in bytes
pub const TOKEN_MIN_SECRET_LENGTH: usize = 32;

/// Default issuer claim
pub const TOKEN_DEFAULT_ISSUER: &str = "warden";

/// Default audience claim
pub const TOKEN_DEFAULT_AUDIENCE: &str = "warden-portal";

/// Registered claims every token must carry (`iat` is enforced by the claims type)
pub const TOKEN_REQUIRED_CLAIMS: &[&str] = &["iss", "aud", "sub", "exp"];

// ============================================================================
// GATE CONSTANTS
// ============================================================================

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

/// Response header carrying a freshly issued token
pub const TOKEN_RESPONSE_HEADER: &str = "Jwt-Token";

// ============================================================================
// LOGIN ATTEMPT CONSTANTS
// ============================================================================

/// Failed logins allowed before the account is locked
pub const LOGIN_MAX_ATTEMPTS: u32 = 5;

/// How long a failure record is retained after the last failure (15 minutes)
pub const LOGIN_ATTEMPT_RETENTION_SECS: u64 = 15 * 60;

/// Interval of the background sweep of stale failure records
pub const LOGIN_ATTEMPT_SWEEP_INTERVAL_SECS: u64 = 60;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WARDEN_LOG";

/// File stem used by the rolling file appender
pub const LOG_FILE_STEM: &str = "warden";
