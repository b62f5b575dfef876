//! Login service
//!
//! Ties the user directory, the login-attempt tracker and the token codec
//! together into the login flow:
//!
//! 1. look the account up (unknown usernames are bad credentials, and are
//!    not tracked)
//! 2. reconcile the lock flag with the tracker: an unlocked account over the
//!    threshold gets locked; an already locked account has its counter reset
//! 3. refuse locked and disabled accounts
//! 4. check the password, recording a failure on mismatch
//! 5. on success, reset the counter and issue a token

use super::attempts::LoginAttemptTracker;
use super::token::{IssuedToken, TokenCodec};
use std::sync::Arc;
use tracing::{debug, info, warn};
use warden_domain::error::{Error, Result};
use warden_domain::ports::{DirectoryEntry, UserDirectory};
use warden_domain::value_objects::Identity;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    /// Authenticated identity
    pub identity: Identity,
    /// Token issued for the identity
    pub token: IssuedToken,
}

/// Username/password login with brute-force lockout
#[derive(Clone)]
pub struct LoginService {
    directory: Arc<dyn UserDirectory>,
    attempts: Arc<LoginAttemptTracker>,
    codec: Arc<TokenCodec>,
}

impl std::fmt::Debug for LoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginService")
            .field("attempts", &self.attempts)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl LoginService {
    /// Create a login service
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        attempts: Arc<LoginAttemptTracker>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            directory,
            attempts,
            codec,
        }
    }

    /// The tracker this service records failures in
    pub fn attempts(&self) -> &Arc<LoginAttemptTracker> {
        &self.attempts
    }

    /// Authenticate a username/password pair and issue a token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSuccess> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::bad_credentials());
        }

        let mut entry = match self.directory.lookup(username).await {
            Ok(entry) => entry,
            Err(Error::NotFound { .. }) => {
                debug!(username, "Login for unknown username");
                return Err(Error::bad_credentials());
            }
            Err(e) => return Err(e),
        };

        self.reconcile_lock_state(username, &mut entry).await?;

        if !entry.non_locked {
            return Err(Error::account_locked(username));
        }
        if !entry.active {
            return Err(Error::account_disabled(username));
        }

        if !self.directory.verify_password(username, password).await? {
            let failures = self.attempts.record_failure(username);
            debug!(username, failures, "Login rejected: bad password");
            return Err(Error::bad_credentials());
        }

        self.attempts.evict(username);
        let token = self.codec.issued(&entry.identity)?;
        info!(username, expires_at = token.expires_at, "Login succeeded");

        Ok(LoginSuccess {
            identity: entry.identity,
            token,
        })
    }

    /// Apply the tracker's verdict to the directory's lock flag
    async fn reconcile_lock_state(&self, username: &str, entry: &mut DirectoryEntry) -> Result<()> {
        if entry.non_locked {
            if self.attempts.has_exceeded_max_attempts(username) {
                self.directory.set_non_locked(username, false).await?;
                entry.non_locked = false;
                warn!(username, "Account locked after too many failed logins");
            }
        } else {
            self.attempts.evict(username);
        }
        Ok(())
    }
}
