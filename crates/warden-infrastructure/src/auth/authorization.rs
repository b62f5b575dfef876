//! Downstream authority checks
//!
//! Handlers call these after the gate ran. An anonymous request and an
//! authenticated request lacking an authority fail with different errors
//! (`Unauthenticated` vs `InsufficientAuthority`), which the boundary maps to
//! 401 and 403.

use warden_domain::error::{Error, Result, TokenError};
use warden_domain::value_objects::{AuthenticationContext, RequestContext};

/// Require an authenticated request
///
/// When the gate refused a presented credential, the failure reflects that:
/// an expired token yields `Error::Expired`, any other rejection
/// `Error::InvalidCredential`.
pub fn require_authenticated(context: &RequestContext) -> Result<&AuthenticationContext> {
    if let Some(authentication) = context.authentication() {
        return Ok(authentication);
    }

    Err(match context.rejection() {
        Some(TokenError::Expired { expired_at }) => Error::Expired {
            expired_at: *expired_at,
        },
        Some(other) => Error::from(other.clone()),
        None => Error::Unauthenticated,
    })
}

/// Require every listed authority
pub fn require_all<'c>(
    context: &'c RequestContext,
    required: &[&str],
) -> Result<&'c AuthenticationContext> {
    let authentication = require_authenticated(context)?;
    let missing = authentication.missing(required);
    if missing.is_empty() {
        Ok(authentication)
    } else {
        Err(Error::insufficient_authority(
            authentication.subject(),
            missing.into_iter().map(str::to_string).collect(),
        ))
    }
}

/// Require at least one of the listed authorities
///
/// An empty candidate list only requires authentication.
pub fn require_any<'c>(
    context: &'c RequestContext,
    candidates: &[&str],
) -> Result<&'c AuthenticationContext> {
    let authentication = require_authenticated(context)?;
    if candidates.is_empty() || authentication.has_any(candidates) {
        Ok(authentication)
    } else {
        Err(Error::insufficient_authority(
            authentication.subject(),
            candidates.iter().map(|authority| authority.to_string()).collect(),
        ))
    }
}
