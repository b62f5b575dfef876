//! Domain Port Interfaces
//!
//! Contracts the authentication core depends on but does not implement.
//!
//! - **clock** - wall-clock source for token timestamps and attempt windows
//! - **directory** - the external user directory owning identities and lock state

/// Time source port
pub mod clock;
/// User directory port
pub mod directory;

pub use clock::Clock;
pub use directory::{DirectoryEntry, UserDirectory};
