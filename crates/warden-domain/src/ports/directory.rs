//! User Directory Port
//!
//! The directory owns user records: identities, password verification and the
//! `non_locked` flag. The authentication core only reads identities and
//! toggles the lock flag after consulting its login-attempt tracker.

use crate::error::Result;
use crate::value_objects::Identity;
use async_trait::async_trait;

/// Directory view of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Identity to embed in issued tokens
    pub identity: Identity,
    /// False once the account has been locked
    pub non_locked: bool,
    /// False once the account has been deactivated
    pub active: bool,
}

impl DirectoryEntry {
    /// Entry for an active, unlocked account
    pub fn active(identity: Identity) -> Self {
        Self {
            identity,
            non_locked: true,
            active: true,
        }
    }
}

/// External user directory
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up an account; `Error::NotFound` when it does not exist
    async fn lookup(&self, username: &str) -> Result<DirectoryEntry>;

    /// Check a password against the stored credential
    async fn verify_password(&self, username: &str, password: &str) -> Result<bool>;

    /// Set the account's `non_locked` flag
    async fn set_non_locked(&self, username: &str, non_locked: bool) -> Result<()>;
}
