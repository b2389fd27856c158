// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::{Claims, parse_claims};
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::Duration;

/// HS256 JSON Web Token issuer and verifier.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    issuer: Option<String>,
    audience: Option<String>,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::infrastructure("JWT secret not configured"));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            issuer: None,
            audience: None,
        })
    }

    pub fn with_issuer(mut self, issuer: Option<String>) -> Self {
        self.issuer = issuer;
        self
    }

    pub fn with_audience(mut self, audience: Option<String>) -> Self {
        self.audience = audience;
        self
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        let mut required = vec!["exp"];
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match &self.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        // A configured iss/aud must be present in the token, not only match when present.
        validation.set_required_spec_claims(&required);
        validation
    }
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let ttl = ChronoDuration::from_std(self.ttl)
            .map_err(|_| ApplicationError::infrastructure("token expiration overflow"))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let mut caps: Vec<String> = subject.capabilities.iter().map(ToString::to_string).collect();
        caps.sort();

        let claims = Claims {
            sub: subject.subject,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            caps,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation())
            .map_err(|err| ApplicationError::unauthorized(format!("invalid token: {err}")))?;

        parse_claims(data.claims)
    }
}
