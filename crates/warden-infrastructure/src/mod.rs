//! # Infrastructure Layer
//!
//! Concrete implementations behind the domain contracts: the token codec,
//! the authorization gate, login-attempt tracking and the ambient stack
//! (configuration, logging, clocks).
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Token codec, gate, authority checks, lockout, login |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Support
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`utils`] | System and manual clocks |

pub mod auth;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use auth::{AuthorizationGate, LoginAttemptTracker, LoginService, TokenCodec};
pub use error_ext::ErrorContext;
pub use utils::{ManualClock, SystemClock};
