use crate::model::{ModelValidationError, user::UserId};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token could not be verified: {0}")]
    Verification(#[from] jsonwebtoken::errors::Error),
    #[error("Token payload has no subject id")]
    MissingSubject,
    #[error("Token subject is invalid: {0}")]
    InvalidSubject(#[from] ModelValidationError),
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
struct Claims {
    #[serde(default)]
    id: Value,
}

/// Verifies HS256 signed tokens against a shared secret and extracts the `id`
/// claim as the authenticated subject.
///
/// `exp` and `nbf` are checked when present but not required.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let claims = decode::<Claims>(token, &self.key, &self.validation)?.claims;

        let subject = match claims.id {
            Value::Null => return Err(TokenError::MissingSubject),
            Value::String(id) => id,
            other => other.to_string(),
        };

        UserId::new(subject).map_err(|err| TokenError::InvalidSubject(err.into()))
    }
}

impl Debug for TokenVerifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("key", &"[redacted]")
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}
