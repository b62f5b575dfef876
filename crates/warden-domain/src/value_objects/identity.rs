//! Identity value object

use crate::error::{Error, Result};
use crate::value_objects::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered, de-duplicated set of authority strings
///
/// Ordering makes the authority claim array of an issued token canonical.
pub type Authorities = BTreeSet<String>;

/// Authenticated subject with an associated authority set
///
/// Supplied by the user directory; the core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    username: String,
    authorities: Authorities,
}

impl Identity {
    /// Create an identity, rejecting an empty username
    pub fn new<U, I, A>(username: U, authorities: I) -> Result<Self>
    where
        U: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(Error::invalid_argument("username cannot be empty"));
        }

        Ok(Self {
            username,
            authorities: authorities.into_iter().map(Into::into).collect(),
        })
    }

    /// Create an identity carrying the authorities granted to `role`
    pub fn for_role<U: Into<String>>(username: U, role: Role) -> Result<Self> {
        Self::new(username, role.authorities().iter().copied())
    }

    /// Unique username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Granted authorities
    pub fn authorities(&self) -> &Authorities {
        &self.authorities
    }

    /// Consume the identity into its username and authorities
    pub fn into_parts(self) -> (String, Authorities) {
        (self.username, self.authorities)
    }

    /// Check whether a single authority is granted
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }
}
