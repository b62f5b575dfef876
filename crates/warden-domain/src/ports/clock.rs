//! Clock Port
//!
//! Token issue/expiry and login-attempt windows read time only through this
//! trait so they can be evaluated at exact instants.

/// Source of the current time in whole seconds since the Unix epoch
pub trait Clock: Send + Sync {
    /// Current instant, seconds since the Unix epoch
    fn now_unix_secs(&self) -> u64;
}
