//! The authorization decision procedure.

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use jobportal_core::error::AppError;
use jobportal_entity::Owned;

use super::rules::{Action, PolicyTable, ResourceKind, Rule};
use crate::identity::Identity;

/// Why a request was denied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denial {
    /// No identity, and anonymous callers are not allowed here.
    #[error("authentication required")]
    Unauthenticated,
    /// The caller's role may never perform this action.
    #[error("role may not {action} {kind}")]
    RoleForbidden { kind: ResourceKind, action: Action },
    /// The caller does not own the resource.
    #[error("not the owner of this {kind}")]
    NotOwner { kind: ResourceKind },
    /// An ownership check was required but no resource was loaded.
    #[error("{kind} not found")]
    NotFound { kind: ResourceKind },
}

impl From<Denial> for AppError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => AppError::unauthorized("Authentication required"),
            Denial::RoleForbidden { kind, action } => {
                AppError::forbidden(format!("Not allowed to {action} {kind}"))
            }
            Denial::NotOwner { kind } => {
                AppError::forbidden(format!("Not allowed to access this {kind}"))
            }
            Denial::NotFound { kind } => AppError::not_found(format!("{kind} not found")),
        }
    }
}

/// Which records a list query may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every record of the kind.
    All,
    /// Only records owned by this user.
    OwnedBy(Uuid),
}

/// Evaluates requests against a [`PolicyTable`].
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    table: PolicyTable,
}

impl PolicyEngine {
    /// Create an engine with the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over a custom table.
    pub fn with_table(table: PolicyTable) -> Self {
        Self { table }
    }

    /// The rule that applies to the caller, without looking at any resource.
    pub fn rule_for(&self, identity: Option<&Identity>, kind: ResourceKind, action: Action) -> Rule {
        self.table.rule(identity.map(|i| i.role), kind, action)
    }

    /// Role gate: decide everything that can be decided before loading.
    ///
    /// Returns the rule still to be applied (`AlwaysAllow` or `OwnerOnly`).
    pub fn check_role(
        &self,
        identity: Option<&Identity>,
        kind: ResourceKind,
        action: Action,
    ) -> Result<Rule, Denial> {
        let rule = self.rule_for(identity, kind, action);
        match (identity, rule) {
            (_, Rule::AlwaysAllow) => Ok(rule),
            (None, _) => Err(self.deny(Denial::Unauthenticated, identity, kind, action)),
            (Some(_), Rule::AlwaysDeny) => {
                Err(self.deny(Denial::RoleForbidden { kind, action }, identity, kind, action))
            }
            (Some(_), Rule::OwnerOnly) => Ok(rule),
        }
    }

    /// Full decision, given the resource when one was loaded.
    pub fn decide(
        &self,
        identity: Option<&Identity>,
        kind: ResourceKind,
        action: Action,
        loaded: Option<&dyn Owned>,
    ) -> Result<(), Denial> {
        match self.check_role(identity, kind, action)? {
            Rule::OwnerOnly => {
                let Some(resource) = loaded else {
                    return Err(self.deny(Denial::NotFound { kind }, identity, kind, action));
                };
                let owner = resource.owner_id();
                if identity.is_some_and(|i| i.owns(owner)) {
                    Ok(())
                } else {
                    Err(self.deny(Denial::NotOwner { kind }, identity, kind, action))
                }
            }
            _ => Ok(()),
        }
    }

    /// Which records of `kind` the caller may list.
    pub fn list_scope(
        &self,
        identity: Option<&Identity>,
        kind: ResourceKind,
    ) -> Result<Scope, Denial> {
        match (self.check_role(identity, kind, Action::List)?, identity) {
            (Rule::OwnerOnly, Some(identity)) => Ok(Scope::OwnedBy(identity.subject_id)),
            (Rule::OwnerOnly, None) => Err(Denial::Unauthenticated),
            _ => Ok(Scope::All),
        }
    }

    fn deny(
        &self,
        denial: Denial,
        identity: Option<&Identity>,
        kind: ResourceKind,
        action: Action,
    ) -> Denial {
        debug!(
            subject = ?identity.map(|i| i.subject_id),
            role = ?identity.map(|i| i.role),
            %kind,
            %action,
            reason = %denial,
            "Policy denied request"
        );
        denial
    }
}
