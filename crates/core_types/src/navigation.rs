//! Pages, navigation payloads, and role resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RoleResolution;
use crate::role::{Applicability, Role, RoleHolder, RoleScoped, filter_by_role};
use crate::{CoreError, Result};

/// Top-level pages of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Login and module grid
    Landing,
    /// Student portfolio
    Portfolios,
    /// Game Central catalog
    Games,
    /// Teacher dashboard
    TeacherDashboard,
    /// Parent portal
    ParentPortal,
    /// WhatsUp! class feed
    WhatsUp,
}

impl Page {
    /// Every page in route-table order.
    pub const ALL: [Page; 6] = [
        Page::Landing,
        Page::Portfolios,
        Page::Games,
        Page::TeacherDashboard,
        Page::ParentPortal,
        Page::WhatsUp,
    ];

    /// Route path.
    pub fn path(self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Portfolios => "/portfolios",
            Page::Games => "/games",
            Page::TeacherDashboard => "/teacher",
            Page::ParentPortal => "/parent",
            Page::WhatsUp => "/whatsup",
        }
    }

    /// Look up a page by its exact route path.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Title shown in breadcrumbs.
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Portfolios => "Student Portfolio",
            Page::Games => "Game Central",
            Page::TeacherDashboard => "Teacher Dashboard",
            Page::ParentPortal => "Parent Portal",
            Page::WhatsUp => "WhatsUp!",
        }
    }

    /// Role assumed when a page is reached without one.
    pub fn default_role(self) -> Role {
        match self {
            Page::TeacherDashboard => Role::Teacher,
            Page::Landing
            | Page::Portfolios
            | Page::Games
            | Page::ParentPortal
            | Page::WhatsUp => Role::Parent,
        }
    }

    /// Whether the page renders inside the header/menu shell.
    pub fn uses_shell(self) -> bool {
        !matches!(self, Page::Landing)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        let page = match key.as_str() {
            "/" | "landing" | "home" => Page::Landing,
            "/portfolios" | "portfolios" | "portfolio" => Page::Portfolios,
            "/games" | "games" => Page::Games,
            "/teacher" | "teacher" => Page::TeacherDashboard,
            "/parent" | "parent" => Page::ParentPortal,
            "/whatsup" | "whatsup" => Page::WhatsUp,
            _ => return Err(CoreError::UnknownPage(s.to_string())),
        };
        Ok(page)
    }
}

/// State attached to every in-app navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPayload {
    /// Role of the viewer making the transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl TransitionPayload {
    /// Payload carrying `role`.
    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Payload for a trip home from outside the module pages.
    ///
    /// Only a role chosen at login travels; the landing page treats any
    /// arriving role as a login.
    pub fn from_selection(holder: &RoleHolder) -> Option<Self> {
        holder.selected().map(Self::with_role)
    }
}

/// Decide which role a page renders for.
///
/// The payload role wins. Under [`RoleResolution::PayloadThenHolder`] an
/// explicit selection in the holder comes next. The page default is the
/// last resort.
pub fn resolve_role(
    payload: Option<&TransitionPayload>,
    holder: Option<&RoleHolder>,
    page: Page,
    policy: RoleResolution,
) -> Role {
    if let Some(role) = payload.and_then(|p| p.role) {
        return role;
    }

    if policy == RoleResolution::PayloadThenHolder
        && let Some(role) = holder.and_then(RoleHolder::selected)
    {
        return role;
    }

    page.default_role()
}

/// An entry in the navigation menu or the landing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavModule {
    /// Menu title
    pub title: &'static str,
    /// One-line blurb shown on landing cards
    pub description: &'static str,
    /// Destination page
    pub target: Page,
    /// Who may see the entry
    pub applicability: Applicability,
}

impl NavModule {
    /// Title as shown to `role`; parents see the portfolio as "MyKid!".
    pub fn display_title(&self, role: Option<Role>) -> &'static str {
        match (self.target, role) {
            (Page::Portfolios, Some(Role::Parent)) => "MyKid!",
            _ => self.title,
        }
    }
}

impl RoleScoped for NavModule {
    fn applicability(&self) -> Applicability {
        self.applicability
    }
}

/// Entries of the collapsible shell menu.
pub const SHELL_MODULES: [NavModule; 6] = [
    NavModule {
        title: "Home",
        description: "Back to the start page",
        target: Page::Landing,
        applicability: Applicability::All,
    },
    NavModule {
        title: "Portfolios",
        description: "View and manage student portfolios",
        target: Page::Portfolios,
        applicability: Applicability::All,
    },
    NavModule {
        title: "Game Central",
        description: "Educational games and activities",
        target: Page::Games,
        applicability: Applicability::All,
    },
    NavModule {
        title: "Teacher Dashboard",
        description: "Teacher tools and resources",
        target: Page::TeacherDashboard,
        applicability: Applicability::Teacher,
    },
    NavModule {
        title: "Parent Portal",
        description: "Parent resources and updates",
        target: Page::ParentPortal,
        applicability: Applicability::Parent,
    },
    NavModule {
        title: "WhatsUP!",
        description: "Latest news and updates",
        target: Page::WhatsUp,
        applicability: Applicability::All,
    },
];

/// Cards on the landing page once logged in.
pub const LANDING_MODULES: [NavModule; 5] = [
    SHELL_MODULES[1],
    SHELL_MODULES[2],
    SHELL_MODULES[3],
    SHELL_MODULES[4],
    SHELL_MODULES[5],
];

/// Shell menu entries visible to `role`.
pub fn shell_menu(role: Role) -> Vec<NavModule> {
    filter_by_role(&SHELL_MODULES, role)
}

/// Landing grid cards visible to `role`.
pub fn landing_grid(role: Role) -> Vec<NavModule> {
    filter_by_role(&LANDING_MODULES, role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(modules: &[NavModule]) -> Vec<&'static str> {
        modules.iter().map(|m| m.title).collect()
    }

    #[rstest]
    #[case(Page::TeacherDashboard, Role::Teacher)]
    #[case(Page::ParentPortal, Role::Parent)]
    #[case(Page::Portfolios, Role::Parent)]
    #[case(Page::Games, Role::Parent)]
    #[case(Page::WhatsUp, Role::Parent)]
    fn test_missing_payload_uses_page_default(
        #[case] page: Page,
        #[case] expected: Role,
        #[values(RoleResolution::PayloadOnly, RoleResolution::PayloadThenHolder)]
        policy: RoleResolution,
    ) {
        let fresh = RoleHolder::new();
        assert_eq!(resolve_role(None, Some(&fresh), page, policy), expected);
        assert_eq!(
            resolve_role(Some(&TransitionPayload::default()), None, page, policy),
            expected
        );
    }

    #[rstest]
    fn test_payload_role_wins(
        #[values(Page::TeacherDashboard, Page::ParentPortal, Page::Games)] page: Page,
        #[values(Role::Teacher, Role::Parent)] role: Role,
    ) {
        let mut holder = RoleHolder::new();
        holder.set_role(match role {
            Role::Teacher => Role::Parent,
            Role::Parent => Role::Teacher,
        });
        let payload = TransitionPayload::with_role(role);
        assert_eq!(
            resolve_role(
                Some(&payload),
                Some(&holder),
                page,
                RoleResolution::PayloadThenHolder
            ),
            role
        );
    }

    #[test]
    fn test_holder_selection_beats_page_default() {
        let mut holder = RoleHolder::new();
        holder.set_role(Role::Parent);
        let role = resolve_role(
            None,
            Some(&holder),
            Page::TeacherDashboard,
            RoleResolution::PayloadThenHolder,
        );
        assert_eq!(role, Role::Parent);
    }

    #[test]
    fn test_payload_only_ignores_holder() {
        let mut holder = RoleHolder::new();
        holder.set_role(Role::Teacher);
        let role = resolve_role(None, Some(&holder), Page::WhatsUp, RoleResolution::PayloadOnly);
        assert_eq!(role, Role::Parent);
    }

    #[test]
    fn test_shell_menu_per_role() {
        assert_eq!(
            titles(&shell_menu(Role::Teacher)),
            vec!["Home", "Portfolios", "Game Central", "Teacher Dashboard", "WhatsUP!"]
        );
        assert_eq!(
            titles(&shell_menu(Role::Parent)),
            vec!["Home", "Portfolios", "Game Central", "Parent Portal", "WhatsUP!"]
        );
    }

    #[rstest]
    fn test_grids_contain_exactly_admitted_modules(
        #[values(Role::Teacher, Role::Parent)] role: Role,
    ) {
        let expected: Vec<NavModule> = LANDING_MODULES
            .iter()
            .copied()
            .filter(|m| {
                m.applicability == Applicability::All
                    || m.applicability == Applicability::from_role(role)
            })
            .collect();
        assert_eq!(landing_grid(role), expected);
        assert!(landing_grid(role).iter().all(|m| m.target != Page::Landing));
    }

    #[test]
    fn test_parent_sees_portfolio_as_mykid() {
        let portfolio = SHELL_MODULES[1];
        assert_eq!(portfolio.display_title(Some(Role::Parent)), "MyKid!");
        assert_eq!(portfolio.display_title(Some(Role::Teacher)), "Portfolios");
        assert_eq!(portfolio.display_title(None), "Portfolios");
        assert_eq!(SHELL_MODULES[2].display_title(Some(Role::Parent)), "Game Central");
    }

    #[test]
    fn test_page_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
            assert_eq!(page.path().parse::<Page>().unwrap(), page);
        }
        assert_eq!(Page::from_path("/games/phonics"), None);
        assert!(matches!("/nowhere".parse::<Page>(), Err(CoreError::UnknownPage(_))));
    }

    #[test]
    fn test_only_landing_skips_shell() {
        let bare: Vec<Page> = Page::ALL.into_iter().filter(|p| !p.uses_shell()).collect();
        assert_eq!(bare, vec![Page::Landing]);
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = TransitionPayload::with_role(Role::Teacher);
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"role":"teacher"}"#);
        assert_eq!(serde_json::to_string(&TransitionPayload::default()).unwrap(), "{}");

        let parsed: TransitionPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.role, None);
    }

    #[test]
    fn test_anonymous_holder_sends_no_payload_home() {
        assert_eq!(TransitionPayload::from_selection(&RoleHolder::new()), None);
    }

    #[rstest]
    fn test_selected_role_travels_home(#[values(Role::Teacher, Role::Parent)] role: Role) {
        let mut holder = RoleHolder::new();
        holder.set_role(role);
        assert_eq!(
            TransitionPayload::from_selection(&holder),
            Some(TransitionPayload::with_role(role))
        );

        holder.clear();
        assert_eq!(TransitionPayload::from_selection(&holder), None);
    }
}
