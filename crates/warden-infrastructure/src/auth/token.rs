//! Session token codec
//!
//! Signs and verifies compact, self-contained session tokens
//! (`header.claims.signature`, each base64url-encoded) with HMAC-SHA-512.
//!
//! The codec is stateless apart from its keys and clock: issuing is
//! deterministic for a given identity, instant and secret, and verification
//! is pure computation with no side effects. The MAC comparison runs in
//! constant time (RustCrypto `hmac` `verify_slice` under `jsonwebtoken`).
//!
//! Expiry is evaluated here against the injected [`Clock`] rather than by the
//! library, so a token is rejected exactly at `iat + ttl`.

use super::claims::Claims;
use crate::config::TokenConfig;
use crate::constants::TOKEN_REQUIRED_CLAIMS;
use crate::error_ext::ErrorContext;
use crate::utils::SystemClock;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use warden_domain::error::{Result, TokenError};
use warden_domain::ports::Clock;
use warden_domain::value_objects::Identity;

/// Signing algorithm of every token
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS512;

/// A freshly issued token with its validity window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact token string
    pub token: String,
    /// Issued-at instant (seconds since epoch)
    pub issued_at: u64,
    /// Expiry instant (seconds since epoch)
    pub expires_at: u64,
}

/// Issues and verifies session tokens
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_secs: u64,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &TOKEN_ALGORITHM)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Build a codec from validated configuration
    ///
    /// Fails with `Error::Configuration` when the secret is missing or too
    /// short; this is a startup error, never a per-request one.
    pub fn new(config: &TokenConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        let mut validation = Validation::new(TOKEN_ALGORITHM);
        // Expiry is checked against the injected clock in verify_claims
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(TOKEN_REQUIRED_CLAIMS);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(TOKEN_ALGORITHM),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl_secs: config.ttl_secs,
            clock,
        })
    }

    /// Build a codec reading the wall clock
    pub fn with_system_clock(config: &TokenConfig) -> Result<Self> {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Token lifetime in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a token for `identity`, valid from now for the configured TTL
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        self.issued(identity).map(|issued| issued.token)
    }

    /// Issue a token and report its validity window
    pub fn issued(&self, identity: &Identity) -> Result<IssuedToken> {
        let now = self.clock.now_unix_secs();
        let claims = Claims::for_identity(
            identity,
            &self.issuer,
            &self.audience,
            now,
            self.ttl_secs,
        );

        let token = encode(&self.header, &claims, &self.encoding_key)
            .context("Token generation failed")?;

        debug!(
            subject = identity.username(),
            expires_at = claims.exp,
            "Issued session token"
        );

        Ok(IssuedToken {
            token,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }

    /// Verify a token and return the identity it proves
    pub fn verify(&self, token: &str) -> std::result::Result<Identity, TokenError> {
        let claims = self.verify_claims(token)?;
        Identity::new(claims.sub, claims.authorities).map_err(|_| TokenError::InvalidClaims {
            message: "subject is empty".to_string(),
        })
    }

    /// Verify a token and return its raw claims
    pub fn verify_claims(&self, token: &str) -> std::result::Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            let reason = classify(e.kind());
            debug!(error = %e, reason = %reason, "Token verification failed");
            reason
        })?;
        let claims = data.claims;

        if claims.sub.trim().is_empty() {
            debug!("Token verification failed: empty subject");
            return Err(TokenError::InvalidClaims {
                message: "subject is empty".to_string(),
            });
        }

        let now = self.clock.now_unix_secs();
        if claims.is_expired_at(now) {
            debug!(
                subject = %claims.sub,
                expired_at = claims.exp,
                now,
                "Token verification failed: expired"
            );
            return Err(TokenError::Expired {
                expired_at: claims.exp,
            });
        }

        Ok(claims)
    }
}

/// Map library failures onto the codec's error kinds
///
/// Claim mismatches are `InvalidClaims`; everything else (bad signature,
/// base64, JSON, algorithm) means the token was not produced by this codec.
fn classify(kind: &ErrorKind) -> TokenError {
    let message = match kind {
        ErrorKind::InvalidIssuer => "issuer mismatch".to_string(),
        ErrorKind::InvalidAudience => "audience mismatch".to_string(),
        ErrorKind::InvalidSubject => "subject mismatch".to_string(),
        ErrorKind::MissingRequiredClaim(claim) => format!("missing required claim '{claim}'"),
        _ => return TokenError::InvalidSignature,
    };
    TokenError::InvalidClaims { message }
}
