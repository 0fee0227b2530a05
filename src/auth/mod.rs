//! Bearer tokens: HS256 signing, validation and the access policies built on
//! the `admin` / `trusted_member` claims.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    #[serde(default, deserialize_with = "flag")]
    pub admin: bool,
    #[serde(default, deserialize_with = "flag")]
    pub trusted_member: bool,
}

impl Claims {
    pub fn satisfies(&self, policy: Policy) -> bool {
        match policy {
            Policy::Anonymous | Policy::Authenticated => true,
            Policy::Trusted => self.admin || self.trusted_member,
            Policy::Admin => self.admin,
        }
    }
}

/// Boolean claims arrive either as JSON booleans or as "true"/"false"
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!("invalid boolean claim '{}'", other))),
        },
    }
}

/// Access required by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Anonymous,
    Authenticated,
    /// `trusted_member` or `admin`
    Trusted,
    Admin,
}

/// What a freshly minted token should grant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenRequest {
    pub is_admin: bool,
    pub is_trusted: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT signing key is not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Signing and validation material derived from [`SecurityConfig`]
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    lifetime: Duration,
    leeway: u64,
}

impl JwtKeys {
    pub fn from_config(security: &SecurityConfig) -> Result<Self, JwtError> {
        if security.jwt_secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }
        let secret = security.jwt_secret.as_bytes();
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            issuer: security.jwt_issuer.clone(),
            audience: security.jwt_audience.clone(),
            lifetime: Duration::minutes(security.jwt_expiry_minutes as i64),
            leeway: security.jwt_clock_skew_secs,
        })
    }

    pub fn issue(&self, request: &TokenRequest) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: request
                .user_id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            email: request
                .email
                .clone()
                .unwrap_or_else(|| "tester@golfleague.local".to_string()),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
            admin: request.is_admin,
            trusted_member: request.is_trusted,
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Check signature, issuer, audience, expiry and not-before
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud", "sub"]);
        validation.validate_nbf = true;
        validation.leeway = self.leeway;

        Ok(decode::<Claims>(token, &self.decoding, &validation)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn keys() -> JwtKeys {
        JwtKeys::from_config(&AppConfig::development().security).unwrap()
    }

    #[test]
    fn issued_token_validates() {
        let keys = keys();
        let token = keys
            .issue(&TokenRequest {
                is_trusted: true,
                email: Some("pro@club.example".into()),
                ..TokenRequest::default()
            })
            .unwrap();

        let claims = keys.validate(&token).unwrap();
        assert!(claims.trusted_member);
        assert!(!claims.admin);
        assert_eq!(claims.email, "pro@club.example");
        assert!(claims.satisfies(Policy::Trusted));
        assert!(!claims.satisfies(Policy::Admin));
    }

    #[test]
    fn admin_satisfies_trusted() {
        let keys = keys();
        let token = keys
            .issue(&TokenRequest {
                is_admin: true,
                ..TokenRequest::default()
            })
            .unwrap();
        let claims = keys.validate(&token).unwrap();
        assert!(claims.satisfies(Policy::Trusted));
        assert!(claims.satisfies(Policy::Admin));
    }

    #[test]
    fn string_flags_accepted() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "u", "email": "e", "jti": "j", "iss": "i", "aud": "a",
            "iat": 0, "nbf": 0, "exp": 0,
            "admin": "false", "trusted_member": "True"
        }))
        .unwrap();
        assert!(!claims.admin);
        assert!(claims.trusted_member);
    }

    #[test]
    fn expired_token_rejected() {
        let keys = keys();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "u".into(),
            email: "e".into(),
            jti: "j".into(),
            iss: keys.issuer.clone(),
            aud: keys.audience.clone(),
            iat: now - 7200,
            nbf: now - 7200,
            exp: now - 3600,
            admin: true,
            trusted_member: true,
        };
        let token = keys.sign(&claims).unwrap();
        assert!(matches!(keys.validate(&token), Err(JwtError::Invalid(_))));
    }

    #[test]
    fn foreign_audience_rejected() {
        let mut security = AppConfig::development().security;
        security.jwt_audience = "https://someone-else.example".into();
        let foreign = JwtKeys::from_config(&security).unwrap();
        let token = foreign.issue(&TokenRequest::default()).unwrap();

        assert!(keys().validate(&token).is_err());
    }

    #[test]
    fn empty_secret_refused() {
        let mut security = AppConfig::development().security;
        security.jwt_secret.clear();
        assert!(matches!(JwtKeys::from_config(&security), Err(JwtError::MissingSecret)));
    }
}
