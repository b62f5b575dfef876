//! Request-scoped authentication state
//!
//! An [`AuthenticationContext`] is the verified subject and authority set of
//! one request. It lives inside a [`RequestContext`] that the request
//! boundary creates per request and threads explicitly through the pipeline;
//! neither is ever stored in shared or ambient state.

use crate::error::TokenError;
use crate::value_objects::identity::{Authorities, Identity};
use serde::{Deserialize, Serialize};

/// Subject and authorities extracted from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationContext {
    subject: String,
    authorities: Authorities,
}

impl AuthenticationContext {
    /// Create a context from verified claims
    pub fn new(subject: String, authorities: Authorities) -> Self {
        Self {
            subject,
            authorities,
        }
    }

    /// Authenticated username
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Authorities carried by the token
    pub fn authorities(&self) -> &Authorities {
        &self.authorities
    }

    /// Check a single authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Required authorities this context does not hold, in request order
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|authority| !self.has_authority(authority))
            .collect()
    }

    /// Check that every required authority is held
    pub fn has_all(&self, required: &[&str]) -> bool {
        required.iter().all(|authority| self.has_authority(authority))
    }

    /// Check that at least one of the listed authorities is held
    pub fn has_any(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|authority| self.has_authority(authority))
    }
}

impl From<Identity> for AuthenticationContext {
    fn from(identity: Identity) -> Self {
        let (subject, authorities) = identity.into_parts();
        Self::new(subject, authorities)
    }
}

impl From<&Identity> for AuthenticationContext {
    fn from(identity: &Identity) -> Self {
        Self::new(
            identity.username().to_string(),
            identity.authorities().clone(),
        )
    }
}

/// Per-request state owned by the request boundary
///
/// No authentication context means the request is anonymous. When the
/// authorization gate rejected a presented credential, the rejection is kept
/// so downstream checks can report "expired" rather than a bare
/// "unauthenticated".
#[derive(Debug, Default)]
pub struct RequestContext {
    authentication: Option<AuthenticationContext>,
    rejection: Option<TokenError>,
}

impl RequestContext {
    /// Create an anonymous request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached authentication context, if any
    pub fn authentication(&self) -> Option<&AuthenticationContext> {
        self.authentication.as_ref()
    }

    /// Whether an authentication context is attached
    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }

    /// Credential rejection recorded during this request, if any
    pub fn rejection(&self) -> Option<&TokenError> {
        self.rejection.as_ref()
    }

    /// Attach an authentication context
    ///
    /// A request is authenticated at most once: returns `false` and leaves
    /// the existing context untouched when one is already attached.
    pub fn install(&mut self, context: AuthenticationContext) -> bool {
        if self.authentication.is_some() {
            return false;
        }
        self.authentication = Some(context);
        self.rejection = None;
        true
    }

    /// Drop any attached context and record why the credential was refused
    pub fn reject(&mut self, reason: TokenError) {
        self.authentication = None;
        self.rejection = Some(reason);
    }
}
