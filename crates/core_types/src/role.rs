//! Viewer roles and role-scoped visibility.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// The kind of viewer using the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Classroom staff
    Teacher,
    /// Family member of an enrolled child
    #[default]
    Parent,
}

impl Role {
    /// Both roles, teacher first.
    pub const ALL: [Role; 2] = [Role::Teacher, Role::Parent];

    /// Wire name used in transition payloads and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Parent => "parent",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
        }
    }

    /// Suffix appended to the brand in the header, e.g. `- Teacher`.
    pub fn header_suffix(self) -> &'static str {
        match self {
            Role::Teacher => "- Teacher",
            Role::Parent => "- Parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "teacher" => Ok(Role::Teacher),
            "parent" => Ok(Role::Parent),
            _ => Err(CoreError::UnknownRole(s.to_string())),
        }
    }
}

/// Which roles may see an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    All,
    Teacher,
    Parent,
}

impl Applicability {
    /// Tag for items only `role` may see.
    pub fn from_role(role: Role) -> Self {
        match role {
            Role::Teacher => Applicability::Teacher,
            Role::Parent => Applicability::Parent,
        }
    }

    /// Whether a viewer with `role` may see the item.
    pub fn admits(self, role: Role) -> bool {
        match self {
            Applicability::All => true,
            Applicability::Teacher => role == Role::Teacher,
            Applicability::Parent => role == Role::Parent,
        }
    }
}

/// Items carrying an applicability tag.
pub trait RoleScoped {
    fn applicability(&self) -> Applicability;
}

/// Keep the items visible to `role`, in their original order.
///
/// Items tagged [`Applicability::All`] are always kept. Filtering an
/// already filtered list with the same role returns it unchanged.
pub fn filter_by_role<T: RoleScoped + Clone>(items: &[T], role: Role) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.applicability().admits(role))
        .cloned()
        .collect()
}

/// Shared holder for the viewer's role.
///
/// Starts without a selection and reports [`Role::Parent`] until a role is
/// chosen at login. The explicit selection is tracked separately so role
/// resolution can tell a chosen role from the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleHolder {
    selected: Option<Role>,
}

impl RoleHolder {
    /// Create a holder with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current role, falling back to the default.
    pub fn role(&self) -> Role {
        self.selected.unwrap_or_default()
    }

    /// The role chosen at login, if any.
    pub fn selected(&self) -> Option<Role> {
        self.selected
    }

    /// Record a role choice.
    pub fn set_role(&mut self, role: Role) {
        tracing::debug!(role = role.as_str(), "role holder updated");
        self.selected = Some(role);
    }

    /// Forget the selection (logout).
    pub fn clear(&mut self) {
        tracing::debug!("role holder cleared");
        self.selected = None;
    }
}

/// Unwrap a role scope looked up from the surrounding provider.
///
/// A missing scope is a wiring bug, so it is reported as
/// [`CoreError::OutsideRoleScope`] instead of silently defaulting.
pub fn require_role_scope<T>(scope: Option<T>) -> Result<T> {
    scope.ok_or(CoreError::OutsideRoleScope)
}
