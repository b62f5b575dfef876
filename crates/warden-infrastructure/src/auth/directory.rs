//! In-memory user directory
//!
//! A [`UserDirectory`] backed by a [`DashMap`], used by tests and the CLI.
//! Passwords are stored as Argon2 hashes, never in clear.

use super::password::{hash_password, verify_password};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::info;
use warden_domain::error::{Error, Result};
use warden_domain::ports::{DirectoryEntry, UserDirectory};
use warden_domain::value_objects::Identity;

#[derive(Debug, Clone)]
struct StoredUser {
    entry: DirectoryEntry,
    password_hash: String,
}

/// Concurrent in-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<String, StoredUser>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an active, unlocked account
    pub fn add_user(&self, identity: Identity, password: &str) -> Result<()> {
        let password_hash = hash_password(password)?;
        let username = identity.username().to_string();
        self.users.insert(
            username,
            StoredUser {
                entry: DirectoryEntry::active(identity),
                password_hash,
            },
        );
        Ok(())
    }

    /// Mark an account active or inactive
    pub fn set_active(&self, username: &str, active: bool) -> Result<()> {
        self.update(username, |entry| entry.active = active)
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no accounts
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn update(&self, username: &str, apply: impl FnOnce(&mut DirectoryEntry)) -> Result<()> {
        let mut user = self
            .users
            .get_mut(username)
            .ok_or_else(|| Error::not_found(format!("user '{username}'")))?;
        apply(&mut user.entry);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn lookup(&self, username: &str) -> Result<DirectoryEntry> {
        self.users
            .get(username)
            .map(|user| user.entry.clone())
            .ok_or_else(|| Error::not_found(format!("user '{username}'")))
    }

    async fn verify_password(&self, username: &str, password: &str) -> Result<bool> {
        let hash = self
            .users
            .get(username)
            .map(|user| user.password_hash.clone())
            .ok_or_else(|| Error::not_found(format!("user '{username}'")))?;
        verify_password(password, &hash)
    }

    async fn set_non_locked(&self, username: &str, non_locked: bool) -> Result<()> {
        self.update(username, |entry| entry.non_locked = non_locked)?;
        info!(username, non_locked, "Account lock state changed");
        Ok(())
    }
}
