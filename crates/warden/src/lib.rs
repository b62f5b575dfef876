//! # Warden
//!
//! Request-time authentication core: signed session tokens, a per-request
//! authorization gate and brute-force login lockout.
//!
//! This crate is the public facade. It re-exports the domain and
//! infrastructure layers and hosts the `warden` command line tool.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use warden::domain::{Identity, RequestContext};
//! use warden::infrastructure::auth::{AuthorizationGate, InboundRequest, TokenCodec};
//! use warden::infrastructure::config::{GateConfig, TokenConfig};
//!
//! let codec = Arc::new(
//!     TokenCodec::with_system_clock(&TokenConfig::with_secret(
//!         "a-long-random-secret-of-at-least-32-bytes",
//!     ))
//!     .unwrap(),
//! );
//! let gate = AuthorizationGate::new(codec.clone(), GateConfig::default());
//!
//! let token = codec.issue(&Identity::new("alice", ["user:read"]).unwrap()).unwrap();
//! let credential = format!("Bearer {token}");
//!
//! let mut context = RequestContext::new();
//! gate.filter(&InboundRequest::with_credential("GET", &credential), &mut context);
//! assert_eq!(context.authentication().unwrap().subject(), "alice");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identities, roles, contexts, error taxonomy and ports
//! - `infrastructure` - token codec, gate, tracker, login, config, logging
//! - `cli` - the `warden` command line tool

/// Domain layer - core types and contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use warden_domain::*;
}

/// Infrastructure layer - codec, gate, lockout and ambient services
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use warden_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::{AuthenticationContext, Error, Identity, RequestContext, Result, Role};

// Re-export the request-time components
pub use infrastructure::auth::{
    AuthorizationGate, GateDecision, InboundRequest, LoginAttemptTracker, LoginService, TokenCodec,
};
