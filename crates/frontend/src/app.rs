//! Main application component with routing.

use core_types::{AppConfig, Page};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::context::{AppContext, RoleProvider, use_home_navigator};
use crate::pages::{
    GamesPage, LandingPage, ParentPortalPage, PortfolioPage, TeacherDashboardPage, WhatsUpPage,
};

/// Application routes.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/portfolios")]
    Portfolios,
    #[at("/games")]
    Games,
    #[at("/teacher")]
    Teacher,
    #[at("/parent")]
    Parent,
    #[at("/whatsup")]
    WhatsUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page this route renders, if any.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Landing => Some(Page::Landing),
            Route::Portfolios => Some(Page::Portfolios),
            Route::Games => Some(Page::Games),
            Route::Teacher => Some(Page::TeacherDashboard),
            Route::Parent => Some(Page::ParentPortal),
            Route::WhatsUp => Some(Page::WhatsUp),
            Route::NotFound => None,
        }
    }
}

/// Route switch function.
fn switch(route: Route) -> Html {
    let Some(page) = route.page() else {
        return html! { <NotFound /> };
    };

    let content = match page {
        Page::Landing => return html! { <LandingPage /> },
        Page::Portfolios => html! { <PortfolioPage /> },
        Page::Games => html! { <GamesPage /> },
        Page::TeacherDashboard => html! { <TeacherDashboardPage /> },
        Page::ParentPortal => html! { <ParentPortalPage /> },
        Page::WhatsUp => html! { <WhatsUpPage /> },
    };

    html! {
        <Layout {page}>
            { content }
        </Layout>
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let app = use_memo((), |_| AppContext::new(AppConfig::default()));

    html! {
        <ContextProvider<AppContext> context={(*app).clone()}>
            <RoleProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </RoleProvider>
        </ContextProvider<AppContext>>
    }
}

/// Shown for paths outside the route table, including game links.
#[function_component(NotFound)]
fn not_found() -> Html {
    let go_home = use_home_navigator().reform(|_: MouseEvent| ());

    html! {
        <main class="main-content">
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
                <button class="link" onclick={go_home}>{"Back to Home"}</button>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_routes_match_page_paths() {
        for page in Page::ALL {
            let route = Route::recognize(page.path()).unwrap();
            assert_eq!(route.page(), Some(page));
            assert_eq!(route.to_path(), page.path());
        }
    }

    #[test]
    fn test_game_paths_fall_through_to_not_found() {
        for path in ["/games/phonics", "/games/numbers", "/nowhere"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound));
        }
    }
}
