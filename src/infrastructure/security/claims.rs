// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{AuthenticatedUser, Capability},
    error::{ApplicationError, ApplicationResult},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Registered claims plus the `caps` list of `resource:action` grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default)]
    pub caps: Vec<String>,
}

pub fn parse_claims(claims: Claims) -> ApplicationResult<AuthenticatedUser> {
    if claims.sub.trim().is_empty() {
        return Err(ApplicationError::unauthorized("missing subject"));
    }

    let issued_at = timestamp(claims.iat, "iat")?;
    let expires_at = timestamp(claims.exp, "exp")?;

    let capabilities = claims
        .caps
        .iter()
        .map(|raw| raw.parse::<Capability>())
        .collect::<Result<HashSet<_>, _>>()
        .map_err(ApplicationError::unauthorized)?;

    Ok(AuthenticatedUser {
        subject: claims.sub,
        capabilities,
        issued_at,
        expires_at,
    })
}

fn timestamp(seconds: i64, claim: &str) -> ApplicationResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| ApplicationError::unauthorized(format!("invalid {claim} claim")))
}
