//! Unit tests for domain error types

use warden_domain::constants::{
    ACCOUNT_LOCKED_MESSAGE, INCORRECT_CREDENTIALS_MESSAGE, LOGIN_REQUIRED_MESSAGE,
    NOT_ENOUGH_PERMISSION_MESSAGE, TOKEN_CANNOT_BE_VERIFIED_MESSAGE,
};
use warden_domain::{Error, TokenError};

#[test]
fn test_configuration_error() {
    let error = Error::configuration("signing secret is missing");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "signing secret is missing");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert_eq!(error.status_code(), 500);
    assert!(!error.is_client_error());
}

#[test]
fn test_token_error_maps_to_request_errors() {
    let invalid: Error = TokenError::InvalidSignature.into();
    assert!(matches!(invalid, Error::InvalidCredential { .. }));
    assert_eq!(invalid.user_message(), TOKEN_CANNOT_BE_VERIFIED_MESSAGE);

    let claims: Error = TokenError::InvalidClaims {
        message: "issuer".to_string(),
    }
    .into();
    assert!(matches!(claims, Error::InvalidCredential { .. }));

    let expired: Error = TokenError::Expired { expired_at: 42 }.into();
    match expired {
        Error::Expired { expired_at } => assert_eq!(expired_at, 42),
        _ => panic!("Expected Expired error"),
    }
}

#[test]
fn test_unauthenticated_and_forbidden_are_distinct() {
    let anonymous = Error::Unauthenticated;
    let forbidden = Error::insufficient_authority("alice", vec!["user:delete".to_string()]);

    assert_eq!(anonymous.status_code(), 401);
    assert_eq!(forbidden.status_code(), 403);
    assert_eq!(anonymous.user_message(), LOGIN_REQUIRED_MESSAGE);
    assert_eq!(forbidden.user_message(), NOT_ENOUGH_PERMISSION_MESSAGE);
}

#[test]
fn test_insufficient_authority_display_lists_missing() {
    let error = Error::insufficient_authority(
        "bob",
        vec!["user:create".to_string(), "user:delete".to_string()],
    );
    let display = error.to_string();
    assert!(display.contains("'bob'"));
    assert!(display.contains("user:create, user:delete"));
}

#[test]
fn test_account_locked_message() {
    let error = Error::account_locked("bob");
    assert_eq!(error.status_code(), 401);
    assert_eq!(error.user_message(), ACCOUNT_LOCKED_MESSAGE);
    assert!(error.is_client_error());
}

#[test]
fn test_bad_credentials_message() {
    let error = Error::bad_credentials();
    assert!(matches!(error, Error::BadCredentials));
    assert_eq!(error.status_code(), 400);
    assert_eq!(error.user_message(), INCORRECT_CREDENTIALS_MESSAGE);
    assert!(error.is_client_error());
}

#[test]
fn test_rejected_login_and_rejected_token_answer_differently() {
    let login = Error::bad_credentials();
    let token: Error = TokenError::InvalidSignature.into();

    assert_eq!(login.status_code(), 400);
    assert_eq!(token.status_code(), 401);
    assert_ne!(login.user_message(), token.user_message());
}

#[test]
fn test_not_found_error() {
    let error = Error::not_found("user carol");
    match &error {
        Error::NotFound { resource } => assert_eq!(resource, "user carol"),
        _ => panic!("Expected NotFound error"),
    }
    assert_eq!(error.status_code(), 404);
}

#[test]
fn test_configuration_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error = Error::configuration_with_source("could not read config", io);
    assert!(std::error::Error::source(&error).is_some());
}
