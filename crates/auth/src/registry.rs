use std::collections::HashSet;

use thiserror::Error;

use depot_core::{ActorId, DomainError};

use crate::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: actor {actor} is not an authorized {role}")]
    Forbidden { actor: ActorId, role: Role },

    #[error("forbidden: actor {actor} holds none of the required roles")]
    ForbiddenAny { actor: ActorId },
}

impl From<AuthzError> for DomainError {
    fn from(_: AuthzError) -> Self {
        DomainError::Unauthorized
    }
}

/// Authorized-actor sets, one per role.
///
/// - No IO
/// - No panics
/// - Grant/revoke are idempotent
#[derive(Debug, Clone, Default)]
pub struct AuthorizationRegistry {
    employees: HashSet<ActorId>,
    couriers: HashSet<ActorId>,
}

impl AuthorizationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, role: Role) -> &HashSet<ActorId> {
        match role {
            Role::Employee => &self.employees,
            Role::Courier => &self.couriers,
        }
    }

    fn set_mut(&mut self, role: Role) -> &mut HashSet<ActorId> {
        match role {
            Role::Employee => &mut self.employees,
            Role::Courier => &mut self.couriers,
        }
    }

    /// Grant `role` to `actor`. Returns whether the actor was newly added.
    pub fn grant(&mut self, role: Role, actor: ActorId) -> bool {
        let added = self.set_mut(role).insert(actor);
        if !added {
            tracing::debug!(%actor, %role, "authorization already granted");
        }
        added
    }

    /// Withdraw `role` from `actor`. Returns whether the actor was present.
    pub fn revoke(&mut self, role: Role, actor: ActorId) -> bool {
        let removed = self.set_mut(role).remove(&actor);
        if !removed {
            tracing::debug!(%actor, %role, "authorization was not held");
        }
        removed
    }

    pub fn is_authorized(&self, role: Role, actor: ActorId) -> bool {
        self.set(role).contains(&actor)
    }

    /// Require `actor` to hold `role`.
    pub fn require(&self, role: Role, actor: ActorId) -> Result<(), AuthzError> {
        if self.is_authorized(role, actor) {
            Ok(())
        } else {
            Err(AuthzError::Forbidden { actor, role })
        }
    }

    /// Require `actor` to hold at least one of `roles`.
    pub fn require_any(&self, roles: &[Role], actor: ActorId) -> Result<(), AuthzError> {
        if roles.iter().any(|role| self.is_authorized(*role, actor)) {
            Ok(())
        } else {
            Err(AuthzError::ForbiddenAny { actor })
        }
    }

    /// Members of a role, sorted for stable output.
    pub fn members(&self, role: Role) -> Vec<ActorId> {
        let mut ids: Vec<ActorId> = self.set(role).iter().copied().collect();
        ids.sort();
        ids
    }
}
