//! Token claims structure
//!
//! Defines the signed payload of a session token. Field order is the
//! serialization order, which keeps the encoding canonical.

use serde::{Deserialize, Serialize};
use warden_domain::value_objects::Identity;

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at timestamp (seconds since epoch)
    pub iat: u64,
    /// Subject (username)
    pub sub: String,
    /// Granted authorities, sorted
    pub authorities: Vec<String>,
    /// Expiration timestamp (seconds since epoch)
    pub exp: u64,
}

impl Claims {
    /// Build claims for an identity issued at `now`
    pub fn for_identity(
        identity: &Identity,
        issuer: &str,
        audience: &str,
        now: u64,
        ttl_secs: u64,
    ) -> Self {
        Self {
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: now,
            sub: identity.username().to_string(),
            authorities: identity.authorities().iter().cloned().collect(),
            exp: now.saturating_add(ttl_secs),
        }
    }

    /// Check expiry against `now`; a token is dead at its expiry instant
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.exp <= now
    }

    /// Seconds of validity left at `now` (0 if expired)
    pub fn remaining_secs_at(&self, now: u64) -> u64 {
        self.exp.saturating_sub(now)
    }
}
