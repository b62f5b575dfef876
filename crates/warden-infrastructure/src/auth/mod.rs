//! Request-time authentication
//!
//! | Module | Role |
//! |--------|------|
//! | [`token`] | Signs and verifies session tokens |
//! | [`gate`] | Installs the authentication context per request |
//! | [`authorization`] | Downstream authority checks |
//! | [`attempts`] | Concurrent failed-login counter and sweeper |
//! | [`login`] | Login flow with lockout |
//! | [`directory`] | In-memory user directory |
//! | [`password`] | Argon2 password hashing |

pub mod attempts;
pub mod authorization;
pub mod claims;
pub mod directory;
pub mod gate;
pub mod login;
pub mod password;
pub mod token;

pub use attempts::{AttemptRecord, LoginAttemptTracker, spawn_sweeper};
pub use authorization::{require_all, require_any, require_authenticated};
pub use claims::Claims;
pub use directory::InMemoryUserDirectory;
pub use gate::{AuthorizationGate, GateDecision, InboundRequest};
pub use login::{LoginService, LoginSuccess};
pub use password::{hash_password, verify_password};
pub use token::{IssuedToken, TOKEN_ALGORITHM, TokenCodec};
