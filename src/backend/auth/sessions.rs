/**
 * Session Tokens
 *
 * HS256 JWTs carrying an `admin_id` claim and a 24-hour expiry.
 *
 * The signing key lives in a `SessionKeys` value built once at startup and
 * shared through application state. Verification is stateless: signature
 * and `exp` only, with zero leeway. Every failure (malformed, tampered,
 * wrong algorithm, expired, bad claim) surfaces as the same authentication
 * error; the cause is only logged at debug level.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;

/// Canonical admin identifier carried in tokens
pub type AdminId = u64;

/// Token lifetime
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Message for every rejected token
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Claims written when issuing a token
#[derive(Debug, Serialize)]
struct IssuedClaims {
    admin_id: AdminId,
    exp: i64,
    iat: i64,
}

/// Claims read when verifying a token
#[derive(Debug, Clone, Deserialize)]
struct Claims {
    admin_id: AdminIdClaim,
    #[allow(dead_code)]
    exp: i64,
}

/// The shapes an `admin_id` claim may arrive in
///
/// Tokens minted by other services encode the id as a JSON number (possibly
/// a float) or as a decimal string. Anything else fails to deserialize and
/// the token is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdminIdClaim {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl AdminIdClaim {
    /// Normalize to the canonical id, or `None` for unsupported values
    pub fn normalize(&self) -> Option<AdminId> {
        match self {
            Self::Integer(id) => Some(*id),
            Self::Float(id) => {
                if id.is_finite() && *id >= 0.0 && id.fract() == 0.0 && *id <= u64::MAX as f64 {
                    Some(*id as u64)
                } else {
                    None
                }
            }
            Self::Text(id) => id.trim().parse::<u64>().ok(),
        }
    }
}

/// Signing and verification keys for session tokens
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionKeys {
    /// Build keys from the configured HMAC secret
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `admin_id`, valid for 24 hours from now
    pub fn issue(&self, admin_id: AdminId) -> Result<String, BackendError> {
        self.issue_at(admin_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(
        &self,
        admin_id: AdminId,
        issued_at: DateTime<Utc>,
    ) -> Result<String, BackendError> {
        let claims = IssuedClaims {
            admin_id,
            exp: (issued_at + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::infrastructure("Could not generate token")
        })
    }

    /// Verify a token and return the admin id it carries
    pub fn verify(&self, token: &str) -> Result<AdminId, BackendError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!("Token rejected: {:?}", e);
            BackendError::authentication(INVALID_TOKEN_MESSAGE)
        })?;

        token_data.claims.admin_id.normalize().ok_or_else(|| {
            tracing::debug!(
                "Token rejected: unsupported admin_id {:?}",
                token_data.claims.admin_id
            );
            BackendError::authentication(INVALID_TOKEN_MESSAGE)
        })
    }
}
