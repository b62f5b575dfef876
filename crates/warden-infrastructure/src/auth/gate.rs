//! Authorization gate
//!
//! Per-request pipeline stage: extracts a bearer credential, verifies it
//! with the [`TokenCodec`] and installs the resulting
//! [`AuthenticationContext`] into the request's [`RequestContext`].
//!
//! The gate is transport neutral. The request boundary hands it the method
//! and the raw credential header value through [`InboundRequest`] and acts
//! on the returned [`GateDecision`].
//!
//! # Invalid credentials
//!
//! With the default [`GatePolicy::DeferToAuthorization`] a credential that
//! fails verification leaves the request anonymous; the rejection reason is
//! recorded on the request context and downstream authorization rejects the
//! request if it needs an identity. [`GatePolicy::FailFast`] rejects at the
//! gate instead.

use super::token::TokenCodec;
use crate::config::{GateConfig, GatePolicy};
use std::sync::Arc;
use tracing::{debug, trace};
use warden_domain::constants::OPTIONS_HTTP_METHOD;
use warden_domain::error::Error;
use warden_domain::value_objects::{AuthenticationContext, RequestContext};

/// The parts of an inbound request the gate looks at
#[derive(Debug, Clone, Copy)]
pub struct InboundRequest<'a> {
    /// Request method, e.g. `GET` or `OPTIONS`
    pub method: &'a str,
    /// Raw value of the credential header, if present
    pub credential: Option<&'a str>,
}

impl<'a> InboundRequest<'a> {
    /// Request without a credential header
    pub fn anonymous(method: &'a str) -> Self {
        Self {
            method,
            credential: None,
        }
    }

    /// Request carrying a credential header value
    pub fn with_credential(method: &'a str, credential: &'a str) -> Self {
        Self {
            method,
            credential: Some(credential),
        }
    }
}

/// What the request boundary should do next
#[derive(Debug)]
pub enum GateDecision {
    /// Pre-flight request: answer with success, skip the rest of the pipeline
    Preflight,
    /// Continue the pipeline; the request context may or may not be
    /// authenticated
    Proceed,
    /// Fail the request (only under [`GatePolicy::FailFast`])
    Reject(Error),
}

impl GateDecision {
    /// Whether the pipeline continues past the gate
    pub fn proceeds(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Token-enforcing pipeline stage
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    codec: Arc<TokenCodec>,
    config: GateConfig,
}

impl AuthorizationGate {
    /// Create a gate over a shared codec
    pub fn new(codec: Arc<TokenCodec>, config: GateConfig) -> Self {
        Self { codec, config }
    }

    /// Gate configuration
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Name of the header the gate reads credentials from
    pub fn header_name(&self) -> &str {
        &self.config.header
    }

    /// Run the gate for one request
    ///
    /// Only `context` is mutated; the gate holds no shared mutable state.
    pub fn filter(
        &self,
        request: &InboundRequest<'_>,
        context: &mut RequestContext,
    ) -> GateDecision {
        if request.method.eq_ignore_ascii_case(OPTIONS_HTTP_METHOD) {
            trace!("Pre-flight request bypasses authentication");
            return GateDecision::Preflight;
        }

        let Some(token) = request.credential.and_then(|value| self.strip_scheme(value)) else {
            trace!("No bearer credential, request proceeds anonymously");
            return GateDecision::Proceed;
        };

        match self.codec.verify(token) {
            Ok(identity) => {
                let subject = identity.username().to_string();
                if context.install(AuthenticationContext::from(identity)) {
                    debug!(subject = %subject, "Request authenticated");
                } else {
                    trace!(subject = %subject, "Request already authenticated");
                }
                GateDecision::Proceed
            }
            Err(reason) => {
                debug!(reason = %reason, policy = ?self.config.policy, "Credential rejected");
                context.reject(reason.clone());
                match self.config.policy {
                    GatePolicy::DeferToAuthorization => GateDecision::Proceed,
                    GatePolicy::FailFast => GateDecision::Reject(reason.into()),
                }
            }
        }
    }

    /// Header name and value carrying a freshly issued token back to the
    /// caller
    pub fn token_response_header(&self, token: &str) -> (String, String) {
        (self.config.token_response_header.clone(), token.to_string())
    }

    /// Token part of a credential, or `None` for a foreign scheme
    fn strip_scheme<'v>(&self, value: &'v str) -> Option<&'v str> {
        value
            .strip_prefix(self.config.scheme_prefix.as_str())
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
