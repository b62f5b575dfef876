//! # Domain Layer
//!
//! Core types and contracts of the Warden request-time authentication core.
//!
//! This crate owns everything that does not depend on a concrete crypto
//! library, clock, or user store:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`value_objects`] | Identities, roles, authentication and request contexts |
//! | [`ports`] | Contracts implemented by infrastructure (directory, clock) |
//! | [`constants`] | Authority names, user-facing messages, protocol constants |
//!
//! ## Example
//!
//! ```
//! use warden_domain::value_objects::{AuthenticationContext, Identity, Role};
//!
//! let identity = Identity::for_role("alice", Role::Hr).unwrap();
//! let context = AuthenticationContext::from(&identity);
//! assert!(context.has_authority("user:update"));
//! assert!(!context.has_authority("user:delete"));
//! ```

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result, TokenError};
pub use ports::{Clock, DirectoryEntry, UserDirectory};
pub use value_objects::{AuthenticationContext, Identity, RequestContext, Role};
