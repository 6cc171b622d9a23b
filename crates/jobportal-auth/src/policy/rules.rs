//! Resource kinds, actions, rules and the default policy table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use jobportal_entity::user::Role;

/// A kind of resource guarded by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Job,
    Application,
    Interview,
    Mail,
    Kanban,
    Employee,
    Sheet,
}

impl ResourceKind {
    /// Every resource kind.
    pub const ALL: [ResourceKind; 7] = [
        Self::Job,
        Self::Application,
        Self::Interview,
        Self::Mail,
        Self::Kanban,
        Self::Employee,
        Self::Sheet,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Job => "job",
            Self::Application => "application",
            Self::Interview => "interview",
            Self::Mail => "mail",
            Self::Kanban => "kanban",
            Self::Employee => "employee",
            Self::Sheet => "sheet",
        };
        f.write_str(s)
    }
}

/// An operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    List,
    Update,
    Delete,
    Accept,
    Reject,
}

impl Action {
    /// Every action.
    pub const ALL: [Action; 7] = [
        Self::Create,
        Self::Read,
        Self::List,
        Self::Update,
        Self::Delete,
        Self::Accept,
        Self::Reject,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Accept => "accept",
            Self::Reject => "reject",
        };
        f.write_str(s)
    }
}

/// What the table says about one `(subject, kind, action)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AlwaysAllow,
    AlwaysDeny,
    /// Allowed only when the loaded resource's owner is the caller.
    OwnerOnly,
}

/// `None` is the anonymous subject.
type Subject = Option<Role>;

/// The role → rule mapping.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: HashMap<(Subject, ResourceKind, Action), Rule>,
}

impl PolicyTable {
    /// An empty table that denies everything.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Set the rule for a role (or anonymous, with `None`).
    pub fn set(
        &mut self,
        subject: Option<Role>,
        kind: ResourceKind,
        actions: &[Action],
        rule: Rule,
    ) -> &mut Self {
        for action in actions {
            self.rules.insert((subject, kind, *action), rule);
        }
        self
    }

    /// Look up a rule. Absent entries are [`Rule::AlwaysDeny`].
    pub fn rule(&self, subject: Option<Role>, kind: ResourceKind, action: Action) -> Rule {
        self.rules
            .get(&(subject, kind, action))
            .copied()
            .unwrap_or(Rule::AlwaysDeny)
    }
}

impl Default for PolicyTable {
    /// The portal's access policy.
    fn default() -> Self {
        use Action::*;
        use ResourceKind as K;
        use Rule::*;

        let admin = Some(Role::Admin);
        let employee = Some(Role::Employee);
        let user = Some(Role::User);
        let anonymous: Subject = None;
        let everyone = [admin, employee, user, anonymous];

        let mut t = Self::empty();

        // Jobs: public reads; admin manages all, employees their own postings.
        for s in everyone {
            t.set(s, K::Job, &[Read, List], AlwaysAllow);
        }
        t.set(admin, K::Job, &[Create, Update, Delete], AlwaysAllow);
        t.set(employee, K::Job, &[Update, Delete], OwnerOnly);

        // Interviews are scheduled by employees.
        t.set(employee, K::Interview, &[Create], AlwaysAllow);
        t.set(admin, K::Interview, &[Read, List, Update, Delete], AlwaysAllow);
        t.set(employee, K::Interview, &[Read, List, Update, Delete], OwnerOnly);

        // Mail is private to its sender, admins included.
        for s in [admin, employee] {
            t.set(s, K::Mail, &[Create], AlwaysAllow);
            t.set(s, K::Mail, &[Read, List, Update, Delete], OwnerOnly);
        }

        // Kanban: admins assign, employees see and move their own cards.
        t.set(admin, K::Kanban, &[Create, Read, List, Update, Delete], AlwaysAllow);
        t.set(employee, K::Kanban, &[Read, List, Update], OwnerOnly);

        // Applications: candidates apply and see their own; staff review.
        t.set(user, K::Application, &[Create], AlwaysAllow);
        t.set(user, K::Application, &[Read, List], OwnerOnly);
        for s in [admin, employee] {
            t.set(s, K::Application, &[Read, List, Accept, Reject], AlwaysAllow);
        }

        t.set(admin, K::Employee, &[Create, Read, List, Update, Delete], AlwaysAllow);

        // Sheets are open to every caller.
        for s in everyone {
            t.set(s, K::Sheet, &[Create, Read, List, Update, Delete], AlwaysAllow);
        }

        t
    }
}
