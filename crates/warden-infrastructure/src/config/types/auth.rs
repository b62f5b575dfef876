//! Authentication configuration types

use crate::constants::{
    AUTHORIZATION_HEADER, BEARER_PREFIX, LOGIN_ATTEMPT_RETENTION_SECS,
    LOGIN_ATTEMPT_SWEEP_INTERVAL_SECS, LOGIN_MAX_ATTEMPTS, TOKEN_DEFAULT_AUDIENCE,
    TOKEN_DEFAULT_ISSUER, TOKEN_DEFAULT_TTL_SECS, TOKEN_MIN_SECRET_LENGTH,
    TOKEN_RESPONSE_HEADER,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use warden_domain::error::{Error, Result};

/// Token lifetimes above this trigger a security warning (1 day)
const LONG_TTL_WARNING_SECS: u64 = 24 * 60 * 60;

/// Lockout thresholds above this trigger a security warning
const LENIENT_LOCKOUT_WARNING_ATTEMPTS: u32 = 10;

/// Secrets with fewer distinct bytes than this are flagged as guessable
const MIN_DISTINCT_SECRET_BYTES: usize = 8;

/// Token signing configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// HMAC signing secret
    ///
    /// **REQUIRED**. Configure via `WARDEN__AUTH__TOKEN__SECRET` or
    /// `auth.token.secret` in the config file. At least 32 bytes.
    pub secret: String,

    /// Token lifetime in seconds
    pub ttl_secs: u64,

    /// Issuer claim embedded in and required from every token
    pub issuer: String,

    /// Audience claim embedded in and required from every token
    pub audience: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            // Empty by default - MUST be configured, validation rejects it
            secret: String::new(),
            ttl_secs: TOKEN_DEFAULT_TTL_SECS,
            issuer: TOKEN_DEFAULT_ISSUER.to_string(),
            audience: TOKEN_DEFAULT_AUDIENCE.to_string(),
        }
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl TokenConfig {
    /// Token config with the given secret and default claims/TTL
    pub fn with_secret<S: Into<String>>(secret: S) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Reject configurations the codec can not safely run with
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(Error::configuration("token signing secret is not configured"));
        }
        if self.secret.len() < TOKEN_MIN_SECRET_LENGTH {
            return Err(Error::configuration(format!(
                "token signing secret must be at least {TOKEN_MIN_SECRET_LENGTH} bytes, got {}",
                self.secret.len()
            )));
        }
        if self.ttl_secs == 0 {
            return Err(Error::configuration("token TTL cannot be 0"));
        }
        if self.issuer.trim().is_empty() {
            return Err(Error::configuration("token issuer cannot be empty"));
        }
        if self.audience.trim().is_empty() {
            return Err(Error::configuration("token audience cannot be empty"));
        }
        Ok(())
    }
}

/// Brute-force lockout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginAttemptConfig {
    /// Failures at which an account counts as exceeding its attempts
    pub max_attempts: u32,

    /// Seconds a failure record survives after its latest failure
    pub retention_secs: u64,

    /// Seconds between background sweeps of stale records
    pub sweep_interval_secs: u64,
}

impl Default for LoginAttemptConfig {
    fn default() -> Self {
        Self {
            max_attempts: LOGIN_MAX_ATTEMPTS,
            retention_secs: LOGIN_ATTEMPT_RETENTION_SECS,
            sweep_interval_secs: LOGIN_ATTEMPT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl LoginAttemptConfig {
    /// Reject zero thresholds and windows
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::configuration("max login attempts cannot be 0"));
        }
        if self.retention_secs == 0 {
            return Err(Error::configuration(
                "login attempt retention window cannot be 0",
            ));
        }
        if self.sweep_interval_secs == 0 {
            return Err(Error::configuration(
                "login attempt sweep interval cannot be 0",
            ));
        }
        Ok(())
    }
}

/// What the authorization gate does with a presented but invalid credential
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// Leave the request anonymous; downstream authorization rejects it
    #[default]
    DeferToAuthorization,
    /// Reject the request at the gate
    FailFast,
}

/// Authorization gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Request header carrying the credential
    pub header: String,

    /// Scheme prefix in front of the token, including the separator
    pub scheme_prefix: String,

    /// Response header a freshly issued token is returned in
    pub token_response_header: String,

    /// Handling of invalid credentials
    pub policy: GatePolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            header: AUTHORIZATION_HEADER.to_string(),
            scheme_prefix: BEARER_PREFIX.to_string(),
            token_response_header: TOKEN_RESPONSE_HEADER.to_string(),
            policy: GatePolicy::default(),
        }
    }
}

impl GateConfig {
    /// Reject empty header names and prefixes
    pub fn validate(&self) -> Result<()> {
        if self.header.trim().is_empty() {
            return Err(Error::configuration("credential header name cannot be empty"));
        }
        if self.scheme_prefix.is_empty() {
            return Err(Error::configuration("credential scheme prefix cannot be empty"));
        }
        Ok(())
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Token signing
    pub token: TokenConfig,

    /// Brute-force lockout
    pub attempts: LoginAttemptConfig,

    /// Authorization gate
    pub gate: GateConfig,
}

impl AuthConfig {
    /// Validate every section
    ///
    /// Fails with `Error::Configuration`; callers treat that as fatal at
    /// startup.
    pub fn validate(&self) -> Result<()> {
        self.token.validate()?;
        self.attempts.validate()?;
        self.gate.validate()
    }

    /// Non-fatal findings an operator should know about
    pub fn security_warnings(&self) -> Vec<SecurityWarning> {
        let mut warnings = Vec::new();

        let distinct = self
            .token
            .secret
            .bytes()
            .collect::<std::collections::BTreeSet<u8>>()
            .len();
        if !self.token.secret.is_empty() && distinct < MIN_DISTINCT_SECRET_BYTES {
            warnings.push(SecurityWarning {
                code: "LOW_ENTROPY_SECRET",
                message: format!(
                    "Signing secret uses only {distinct} distinct bytes; generate a random secret"
                ),
                severity: WarningSeverity::Critical,
            });
        }

        if self.token.ttl_secs > LONG_TTL_WARNING_SECS {
            warnings.push(SecurityWarning {
                code: "LONG_TOKEN_TTL",
                message: format!(
                    "Tokens live for {}s; stolen tokens stay usable for over a day",
                    self.token.ttl_secs
                ),
                severity: WarningSeverity::Medium,
            });
        }

        if self.attempts.max_attempts > LENIENT_LOCKOUT_WARNING_ATTEMPTS {
            warnings.push(SecurityWarning {
                code: "LENIENT_LOCKOUT",
                message: format!(
                    "Accounts lock only after {} failed logins",
                    self.attempts.max_attempts
                ),
                severity: WarningSeverity::High,
            });
        }

        if self.attempts.retention_secs < self.attempts.sweep_interval_secs {
            warnings.push(SecurityWarning {
                code: "SWEEP_SLOWER_THAN_RETENTION",
                message: format!(
                    "Sweep interval {}s exceeds retention window {}s; stale records linger",
                    self.attempts.sweep_interval_secs, self.attempts.retention_secs
                ),
                severity: WarningSeverity::Medium,
            });
        }

        warnings
    }

    /// Log all security warnings at startup
    pub fn log_security_warnings(&self) {
        for warning in self.security_warnings() {
            match warning.severity {
                WarningSeverity::Critical => {
                    tracing::error!("[SECURITY] {}: {}", warning.code, warning.message);
                }
                WarningSeverity::High => {
                    tracing::warn!("[SECURITY] {}: {}", warning.code, warning.message);
                }
                WarningSeverity::Medium => {
                    tracing::info!("[SECURITY] {}: {}", warning.code, warning.message);
                }
            }
        }
    }
}

/// Security warning from configuration validation
#[derive(Debug, Clone)]
pub struct SecurityWarning {
    /// Warning code for programmatic handling
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
    /// Severity level
    pub severity: WarningSeverity,
}

/// Warning severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    /// Critical - should not run in production
    Critical,
    /// High - significant security risk
    High,
    /// Medium - potential security concern
    Medium,
}
