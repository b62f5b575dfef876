//! Domain constants
//!
//! Authority names, protocol constants and the user-facing messages returned
//! at the request boundary. Infrastructure defaults (TTL, thresholds, header
//! names) live in `warden_infrastructure::constants`.

// ============================================================================
// AUTHORITIES
// ============================================================================

/// Read user records
pub const AUTHORITY_USER_READ: &str = "user:read";

/// Update user records
pub const AUTHORITY_USER_UPDATE: &str = "user:update";

/// Create user records
pub const AUTHORITY_USER_CREATE: &str = "user:create";

/// Delete user records
pub const AUTHORITY_USER_DELETE: &str = "user:delete";

// ============================================================================
// PROTOCOL
// ============================================================================

/// Method of pre-flight requests, which never carry a credential
pub const OPTIONS_HTTP_METHOD: &str = "OPTIONS";

// ============================================================================
// USER-FACING MESSAGES
// ============================================================================

/// Returned when the account is locked after too many failed logins
pub const ACCOUNT_LOCKED_MESSAGE: &str =
    "Your account has been locked. Please contact administration.";

/// Returned when the account has been deactivated
pub const ACCOUNT_DISABLED_MESSAGE: &str =
    "Your account has been disabled. Please contact administration.";

/// Returned on a bad username/password pair
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Username/Password incorrect. Please try again";

/// Returned when an authenticated caller lacks a required authority
pub const NOT_ENOUGH_PERMISSION_MESSAGE: &str = "You do not have enough permission.";

/// Returned when a protected resource is requested anonymously
pub const LOGIN_REQUIRED_MESSAGE: &str = "You need to log in to access this page";

/// Returned when a presented token can not be verified
pub const TOKEN_CANNOT_BE_VERIFIED_MESSAGE: &str = "Token cannot be verified";

/// Returned when a presented token is past its expiry
pub const TOKEN_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Returned for a missing resource
pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found.";

/// Returned for server-side faults
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "An error occurred while processing the request.";
