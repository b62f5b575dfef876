//! Unit tests for the session token codec

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use std::sync::Arc;
use warden_domain::error::{Error, TokenError};
use warden_domain::value_objects::Identity;
use warden_infrastructure::auth::{Claims, TokenCodec};
use warden_infrastructure::config::TokenConfig;
use warden_infrastructure::utils::ManualClock;

const SECRET: &str = "token-tests-signing-secret-0123456789-abcdef";
const T0: u64 = 1_700_000_000;

fn config(ttl_secs: u64) -> TokenConfig {
    TokenConfig {
        ttl_secs,
        ..TokenConfig::with_secret(SECRET)
    }
}

fn codec_at(clock: &Arc<ManualClock>, ttl_secs: u64) -> TokenCodec {
    TokenCodec::new(&config(ttl_secs), clock.clone()).unwrap()
}

fn alice() -> Identity {
    Identity::new("alice", ["user:read"]).unwrap()
}

/// Replace one character in the middle of the signature segment
fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    let middle = chars.len() / 2;
    chars[middle] = if chars[middle] == 'A' { 'B' } else { 'A' };
    format!("{head}.{}", chars.into_iter().collect::<String>())
}

#[test]
fn test_round_trip_returns_identity() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);
    let identity = Identity::new("hr", ["user:update", "user:read"]).unwrap();

    let token = codec.issue(&identity).unwrap();
    let verified = codec.verify(&token).unwrap();

    assert_eq!(verified, identity);
}

#[test]
fn test_claims_carry_configured_issuer_and_audience() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);

    let claims = codec.verify_claims(&codec.issue(&alice()).unwrap()).unwrap();

    assert_eq!(claims.iss, "warden");
    assert_eq!(claims.aud, "warden-portal");
    assert_eq!(claims.iat, T0);
    assert_eq!(claims.exp, T0 + 3_600);
    assert_eq!(claims.authorities, vec!["user:read"]);
}

#[test]
fn test_expiry_boundary() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);
    let token = codec.issue(&alice()).unwrap();

    clock.set(T0 + 3_599);
    assert!(codec.verify(&token).is_ok());

    clock.set(T0 + 3_600);
    assert_eq!(
        codec.verify(&token),
        Err(TokenError::Expired {
            expired_at: T0 + 3_600
        })
    );
}

#[test]
fn test_tampered_signature_is_rejected() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);
    let token = codec.issue(&alice()).unwrap();

    assert_eq!(
        codec.verify(&tamper_signature(&token)),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_malformed_tokens_are_rejected() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);

    for token in ["", "not-a-token", "a.b", "a.b.c", "...."] {
        assert_eq!(codec.verify(token), Err(TokenError::InvalidSignature));
    }
}

#[test]
fn test_issue_is_deterministic() {
    let clock = Arc::new(ManualClock::new(T0));
    let first = codec_at(&clock, 3_600);
    let second = codec_at(&clock, 3_600);
    let identity = Identity::new("manager", ["user:update", "user:read"]).unwrap();

    assert_eq!(
        first.issue(&identity).unwrap(),
        second.issue(&identity).unwrap()
    );
}

#[test]
fn test_foreign_secret_is_invalid_signature() {
    let clock = Arc::new(ManualClock::new(T0));
    let ours = codec_at(&clock, 3_600);
    let theirs = TokenCodec::new(
        &TokenConfig::with_secret("some-other-secret-that-is-long-enough-123"),
        clock.clone(),
    )
    .unwrap();

    let token = theirs.issue(&alice()).unwrap();
    assert_eq!(ours.verify(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_issuer_and_audience_mismatch_are_invalid_claims() {
    let clock = Arc::new(ManualClock::new(T0));
    let ours = codec_at(&clock, 3_600);

    let other_issuer = TokenCodec::new(
        &TokenConfig {
            issuer: "elsewhere".to_string(),
            ..config(3_600)
        },
        clock.clone(),
    )
    .unwrap();
    let other_audience = TokenCodec::new(
        &TokenConfig {
            audience: "another-portal".to_string(),
            ..config(3_600)
        },
        clock.clone(),
    )
    .unwrap();

    for token in [
        other_issuer.issue(&alice()).unwrap(),
        other_audience.issue(&alice()).unwrap(),
    ] {
        assert!(matches!(
            ours.verify(&token),
            Err(TokenError::InvalidClaims { .. })
        ));
    }
}

#[test]
fn test_empty_subject_is_invalid_claims() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);
    let claims = Claims {
        iss: "warden".to_string(),
        aud: "warden-portal".to_string(),
        iat: T0,
        sub: String::new(),
        authorities: vec![],
        exp: T0 + 60,
    };
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert!(matches!(
        codec.verify(&token),
        Err(TokenError::InvalidClaims { .. })
    ));
}

#[test]
fn test_other_algorithm_is_rejected() {
    let clock = Arc::new(ManualClock::new(T0));
    let codec = codec_at(&clock, 3_600);
    let claims = Claims::for_identity(&alice(), "warden", "warden-portal", T0, 60);
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(codec.verify(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_missing_secret_is_configuration_error() {
    let clock = Arc::new(ManualClock::new(T0));

    let missing = TokenCodec::new(&TokenConfig::default(), clock.clone());
    assert!(matches!(missing, Err(Error::Configuration { .. })));

    let short = TokenCodec::new(&TokenConfig::with_secret("too-short"), clock);
    assert!(matches!(short, Err(Error::Configuration { .. })));
}

#[test]
fn test_verification_errors_map_to_request_errors() {
    let expired: Error = TokenError::Expired { expired_at: 5 }.into();
    assert_eq!(expired.status_code(), 401);
    assert!(matches!(expired, Error::Expired { expired_at: 5 }));

    let tampered: Error = TokenError::InvalidSignature.into();
    assert!(matches!(tampered, Error::InvalidCredential { .. }));
    assert_eq!(tampered.user_message(), "Token cannot be verified");
}
