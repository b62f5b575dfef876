//! Role catalogue
//!
//! Roles are a convenience for building identities; the core itself only
//! ever checks authority strings.

use crate::constants::{
    AUTHORITY_USER_CREATE, AUTHORITY_USER_DELETE, AUTHORITY_USER_READ, AUTHORITY_USER_UPDATE,
};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const USER_AUTHORITIES: &[&str] = &[AUTHORITY_USER_READ];
const HR_AUTHORITIES: &[&str] = &[AUTHORITY_USER_READ, AUTHORITY_USER_UPDATE];
const MANAGER_AUTHORITIES: &[&str] = &[AUTHORITY_USER_READ, AUTHORITY_USER_UPDATE];
const ADMIN_AUTHORITIES: &[&str] = &[
    AUTHORITY_USER_READ,
    AUTHORITY_USER_CREATE,
    AUTHORITY_USER_UPDATE,
];
const SUPER_USER_AUTHORITIES: &[&str] = &[
    AUTHORITY_USER_READ,
    AUTHORITY_USER_CREATE,
    AUTHORITY_USER_UPDATE,
    AUTHORITY_USER_DELETE,
];

/// User roles with fixed authority sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular user - read only
    #[serde(rename = "ROLE_USER")]
    User,
    /// Human resources - read and update
    #[serde(rename = "ROLE_HR")]
    Hr,
    /// Manager - read and update
    #[serde(rename = "ROLE_MGR", alias = "ROLE_MANAGER")]
    Manager,
    /// Administrator - everything but delete
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Super user - full control
    #[serde(rename = "ROLE_SU", alias = "ROLE_SUPER_ADMIN", alias = "ROLE_SUPER_USER")]
    SuperUser,
}

impl Role {
    /// All roles, least privileged first
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Hr,
        Role::Manager,
        Role::Admin,
        Role::SuperUser,
    ];

    /// Authorities granted by this role
    pub fn authorities(self) -> &'static [&'static str] {
        match self {
            Role::User => USER_AUTHORITIES,
            Role::Hr => HR_AUTHORITIES,
            Role::Manager => MANAGER_AUTHORITIES,
            Role::Admin => ADMIN_AUTHORITIES,
            Role::SuperUser => SUPER_USER_AUTHORITIES,
        }
    }

    /// Canonical string form (`ROLE_*`)
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Hr => "ROLE_HR",
            Role::Manager => "ROLE_MGR",
            Role::Admin => "ROLE_ADMIN",
            Role::SuperUser => "ROLE_SU",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Accepts the canonical form or the bare, case-insensitive role name,
    /// including the spelled-out `MANAGER` and `SUPER_ADMIN`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let name = normalized.strip_prefix("ROLE_").unwrap_or(&normalized);
        match name {
            "USER" => Ok(Role::User),
            "HR" => Ok(Role::Hr),
            "MGR" | "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            "SU" | "SUPER_ADMIN" | "SUPER_USER" => Ok(Role::SuperUser),
            _ => Err(Error::invalid_argument(format!("unknown role: {s}"))),
        }
    }
}
