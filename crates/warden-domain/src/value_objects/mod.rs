//! Value Objects
//!
//! Immutable values flowing through the authentication core.

/// Request-scoped authentication and request contexts
pub mod context;
/// Authenticated subject with its authority set
pub mod identity;
/// Role catalogue mapping roles to authority sets
pub mod role;

pub use context::{AuthenticationContext, RequestContext};
pub use identity::{Authorities, Identity};
pub use role::Role;
