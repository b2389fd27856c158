// src/application/policy.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// A named authorization policy satisfied by holding one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub name: &'static str,
    pub resource: &'static str,
    pub action: &'static str,
}

/// Guards listing and every participant mutation except registration.
pub const AUTHORIZED: Policy = Policy {
    name: "authorized",
    resource: "participants",
    action: "manage",
};

pub fn ensure_policy(actor: &AuthenticatedUser, policy: &Policy) -> ApplicationResult<()> {
    if actor.has_capability(policy.resource, policy.action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "policy '{}' requires capability {}:{}",
            policy.name, policy.resource, policy.action
        )))
    }
}
