//! Error handling types

use crate::constants::{
    ACCOUNT_DISABLED_MESSAGE, ACCOUNT_LOCKED_MESSAGE, INCORRECT_CREDENTIALS_MESSAGE,
    INTERNAL_SERVER_ERROR_MESSAGE, LOGIN_REQUIRED_MESSAGE, NOT_ENOUGH_PERMISSION_MESSAGE,
    NOT_FOUND_MESSAGE, TOKEN_CANNOT_BE_VERIFIED_MESSAGE, TOKEN_EXPIRED_MESSAGE,
};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Warden
///
/// Every per-request failure is a recoverable, structured outcome for the
/// request boundary to translate. Only [`Error::Configuration`] is fatal and
/// it is raised at startup, never while serving a request.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration (startup-time, fatal)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Username/password pair rejected at login
    #[error("Bad credentials")]
    BadCredentials,

    /// Malformed token, bad signature or claim mismatch
    #[error("Invalid credential: {message}")]
    InvalidCredential {
        /// Caller-safe description of the rejected credential
        message: String,
    },

    /// Token past its expiry
    #[error("Token expired at {expired_at}")]
    Expired {
        /// Expiry instant carried by the token (seconds since epoch)
        expired_at: u64,
    },

    /// No authentication context attached to the request
    #[error("Authentication required")]
    Unauthenticated,

    /// Account locked after too many failed logins
    #[error("Account locked: {username}")]
    AccountLocked {
        /// The locked account
        username: String,
    },

    /// Account deactivated by an administrator
    #[error("Account disabled: {username}")]
    AccountDisabled {
        /// The disabled account
        username: String,
    },

    /// Authenticated, but without a required authority
    #[error("Insufficient authority for '{subject}': missing {}", .missing.join(", "))]
    InsufficientAuthority {
        /// Subject of the authentication context
        subject: String,
        /// Required authorities the subject does not hold
        missing: Vec<String>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Failure reported by the user directory collaborator
    #[error("Directory error: {message}")]
    Directory {
        /// Description of the directory error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

/// Reasons a token fails verification
///
/// Kept apart from [`Error`] so the codec's contract stays small and
/// `Clone`-able; the request context stores the last rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature mismatch or malformed token structure
    #[error("Token signature is invalid or the token is malformed")]
    InvalidSignature,

    /// Token past its expiry
    #[error("Token expired at {expired_at}")]
    Expired {
        /// Expiry instant carried by the token (seconds since epoch)
        expired_at: u64,
    },

    /// Issuer, audience or required claim mismatch
    #[error("Token claims are invalid: {message}")]
    InvalidClaims {
        /// Which claim failed
        message: String,
    },
}

impl From<TokenError> for Error {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired { expired_at } => Self::Expired { expired_at },
            TokenError::InvalidSignature | TokenError::InvalidClaims { .. } => {
                Self::InvalidCredential {
                    message: TOKEN_CANNOT_BE_VERIFIED_MESSAGE.to_string(),
                }
            }
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create the error returned for a bad username/password pair
    pub fn bad_credentials() -> Self {
        Self::BadCredentials
    }

    /// Create an invalid credential error
    pub fn invalid_credential<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredential {
            message: message.into(),
        }
    }

    /// Create an account locked error
    pub fn account_locked<S: Into<String>>(username: S) -> Self {
        Self::AccountLocked {
            username: username.into(),
        }
    }

    /// Create an account disabled error
    pub fn account_disabled<S: Into<String>>(username: S) -> Self {
        Self::AccountDisabled {
            username: username.into(),
        }
    }

    /// Create an insufficient authority error
    pub fn insufficient_authority<S: Into<String>>(subject: S, missing: Vec<String>) -> Self {
        Self::InsufficientAuthority {
            subject: subject.into(),
            missing,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Request boundary translation
impl Error {
    /// HTTP-style status the request boundary should answer with
    ///
    /// Anonymous and "authenticated but insufficient" are distinct: 401 vs
    /// 403. A rejected username/password pair answers 400.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredential { .. }
            | Self::Expired { .. }
            | Self::Unauthenticated
            | Self::AccountLocked { .. } => 401,
            Self::InsufficientAuthority { .. } => 403,
            Self::BadCredentials
            | Self::AccountDisabled { .. }
            | Self::InvalidArgument { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Configuration { .. } | Self::Directory { .. } | Self::Internal { .. } => 500,
        }
    }

    /// Message safe to show to the caller
    pub fn user_message(&self) -> &str {
        match self {
            Self::BadCredentials => INCORRECT_CREDENTIALS_MESSAGE,
            Self::InvalidCredential { message } => message,
            Self::Expired { .. } => TOKEN_EXPIRED_MESSAGE,
            Self::Unauthenticated => LOGIN_REQUIRED_MESSAGE,
            Self::AccountLocked { .. } => ACCOUNT_LOCKED_MESSAGE,
            Self::AccountDisabled { .. } => ACCOUNT_DISABLED_MESSAGE,
            Self::InsufficientAuthority { .. } => NOT_ENOUGH_PERMISSION_MESSAGE,
            Self::NotFound { .. } => NOT_FOUND_MESSAGE,
            Self::InvalidArgument { .. }
            | Self::Configuration { .. }
            | Self::Directory { .. }
            | Self::Internal { .. } => INTERNAL_SERVER_ERROR_MESSAGE,
        }
    }

    /// True for recoverable per-request outcomes, false for server faults
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
