//! Contexts shared by every page: the role holder and the app services.

use std::rc::Rc;

use core_types::{
    AppConfig, Page, Role, RoleHolder, RoleResolution, TransitionPayload, require_role_scope,
    resolve_role,
};
use services::Services;
use tracing::{info, warn};
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

/// Login and logout, the only writes to the role holder.
pub enum RoleAction {
    Login(Role),
    Logout,
}

#[derive(Debug, Default, PartialEq)]
pub struct RoleStore {
    pub holder: RoleHolder,
}

impl Reducible for RoleStore {
    type Action = RoleAction;

    fn reduce(self: Rc<Self>, action: RoleAction) -> Rc<Self> {
        let mut holder = self.holder;
        match action {
            RoleAction::Login(role) => holder.set_role(role),
            RoleAction::Logout => holder.clear(),
        }
        if holder == self.holder {
            return self;
        }
        Rc::new(RoleStore { holder })
    }
}

/// Handle to the role holder.
pub type RoleContext = UseReducerHandle<RoleStore>;

#[derive(Properties, PartialEq)]
pub struct RoleProviderProps {
    pub children: Html,
}

/// Owns the role holder for everything rendered inside it.
#[function_component(RoleProvider)]
pub fn role_provider(props: &RoleProviderProps) -> Html {
    let store = use_reducer(RoleStore::default);

    html! {
        <ContextProvider<RoleContext> context={store}>
            { props.children.clone() }
        </ContextProvider<RoleContext>>
    }
}

/// Read the role holder.
///
/// # Panics
///
/// Panics when called outside a [`RoleProvider`]; that is a wiring bug in
/// the component tree, not a runtime condition.
#[hook]
pub fn use_role() -> RoleContext {
    match require_role_scope(use_context::<RoleContext>()) {
        Ok(store) => store,
        Err(err) => panic!("{err}"),
    }
}

/// Configuration and collaborators.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub services: Services,
}

impl AppContext {
    /// Placeholder collaborators configured from `config`.
    pub fn new(config: AppConfig) -> Self {
        let services = Services::placeholder(&config);
        Self {
            config: Rc::new(config),
            services,
        }
    }

    /// Default config with collaborators that refuse every call.
    pub fn unwired() -> Self {
        Self {
            config: Rc::new(AppConfig::default()),
            services: Services::unwired(),
        }
    }
}

/// Read the app context. Without a provider, service calls fail as
/// unavailable instead of pretending to succeed.
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(AppContext::unwired)
}

/// Resolve the role for `page`. Fails when no role holder is in scope.
fn page_role(
    payload: Option<&TransitionPayload>,
    roles: Option<&RoleStore>,
    page: Page,
    policy: RoleResolution,
) -> core_types::Result<Role> {
    let store = require_role_scope(roles)?;
    Ok(resolve_role(payload, Some(&store.holder), page, policy))
}

/// The role `page` renders for, from the navigation payload, the holder
/// and the page default.
///
/// # Panics
///
/// Panics outside a [`RoleProvider`], like [`use_role`].
#[hook]
pub fn use_page_role(page: Page) -> Role {
    let app = use_app();
    let roles = use_context::<RoleContext>();
    let location = use_location();

    let payload = location
        .as_ref()
        .and_then(|location| location.state::<TransitionPayload>());
    match page_role(
        payload.as_deref(),
        roles.as_deref(),
        page,
        app.config.role_resolution,
    ) {
        Ok(role) => role,
        Err(err) => panic!("{err}"),
    }
}

/// Navigate to a path carrying `role` in the transition payload.
#[hook]
pub fn use_role_navigator(role: Role) -> Callback<String> {
    let navigator = use_navigator();

    Callback::from(move |path: String| {
        let Some(navigator) = &navigator else {
            warn!(%path, "navigation requested outside a router");
            return;
        };
        info!(%path, role = role.as_str(), "navigate");
        navigator.push_with_state(&AnyRoute::new(path), TransitionPayload::with_role(role));
    })
}

/// Navigate to the landing page from outside the module pages.
///
/// The role travels only when one was chosen at login, so an anonymous
/// visitor still lands on the login form.
#[hook]
pub fn use_home_navigator() -> Callback<()> {
    let roles = use_role();
    let navigator = use_navigator();

    Callback::from(move |()| {
        let Some(navigator) = &navigator else {
            warn!("navigation requested outside a router");
            return;
        };
        let home = AnyRoute::new(Page::Landing.path());
        match TransitionPayload::from_selection(&roles.holder) {
            Some(payload) => navigator.push_with_state(&home, payload),
            None => navigator.push(&home),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use services::MessageDelivery;

    fn reduce(store: Rc<RoleStore>, action: RoleAction) -> Rc<RoleStore> {
        Reducible::reduce(store, action)
    }

    #[test]
    fn test_login_sets_selection() {
        let store = reduce(Rc::default(), RoleAction::Login(Role::Teacher));
        assert_eq!(store.holder.selected(), Some(Role::Teacher));
    }

    #[test]
    fn test_logout_clears_selection() {
        let store = reduce(Rc::default(), RoleAction::Login(Role::Teacher));
        let store = reduce(store, RoleAction::Logout);
        assert_eq!(store.holder.selected(), None);
        assert_eq!(store.holder.role(), Role::Parent);
    }

    #[test]
    fn test_repeated_login_keeps_same_store() {
        let store = reduce(Rc::default(), RoleAction::Login(Role::Parent));
        let again = reduce(store.clone(), RoleAction::Login(Role::Parent));
        assert!(Rc::ptr_eq(&store, &again));
    }

    #[test]
    fn test_page_role_outside_scope_fails() {
        let err = page_role(None, None, Page::Games, RoleResolution::default()).unwrap_err();
        assert!(matches!(err, core_types::CoreError::OutsideRoleScope));
    }

    #[test]
    fn test_page_role_inside_scope() {
        let store = reduce(Rc::default(), RoleAction::Login(Role::Teacher));
        let payload = TransitionPayload::with_role(Role::Parent);

        let role = page_role(Some(&payload), Some(&store), Page::Games, RoleResolution::default());
        assert_eq!(role.unwrap(), Role::Parent);

        let role = page_role(None, Some(&store), Page::Games, RoleResolution::PayloadOnly);
        assert_eq!(role.unwrap(), Role::Parent);

        let role = page_role(None, Some(&store), Page::Games, RoleResolution::PayloadThenHolder);
        assert_eq!(role.unwrap(), Role::Teacher);
    }

    #[test]
    fn test_context_without_provider_refuses_service_calls() {
        let message = core_types::OutgoingMessage {
            content: "Hello".to_string(),
            language: "en".to_string(),
        };

        let fallback = AppContext::unwired();
        assert_eq!(
            fallback.services.delivery.deliver(&message),
            Err(services::ServiceError::Unavailable("message delivery"))
        );

        let provided = AppContext::new(AppConfig::default());
        assert_eq!(provided.services.delivery.deliver(&message), Ok(()));
    }
}
