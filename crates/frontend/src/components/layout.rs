//! Header and navigation drawer around every module page.

use core_types::{Page, shell_menu};
use yew::prelude::*;

use crate::context::{use_app, use_page_role, use_role_navigator};

/// Properties for Layout component.
#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub page: Page,
    pub children: Html,
}

/// Header with the role suffix and a collapsible, role-filtered menu.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let app = use_app();
    let role = use_page_role(props.page);
    let navigate = use_role_navigator(role);
    let drawer_open = use_state(|| false);

    let toggle = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(!*drawer_open))
    };

    let entries = shell_menu(role).into_iter().map(|module| {
        let navigate = navigate.clone();
        let drawer_open = drawer_open.clone();
        let path = module.target.path().to_string();
        let onclick = Callback::from(move |_: MouseEvent| {
            drawer_open.set(false);
            navigate.emit(path.clone());
        });
        html! {
            <li key={module.title}>
                <button class="link" {onclick}>{ module.display_title(Some(role)) }</button>
            </li>
        }
    });

    html! {
        <div class="app-shell">
            <header class="app-header">
                <button aria-label="open drawer" onclick={toggle.clone()}>{"☰"}</button>
                <span class="brand">
                    { format!("🐑 {} ", app.config.school_name) }
                    <small>{ role.header_suffix() }</small>
                </span>
            </header>

            if *drawer_open {
                <aside class="drawer">
                    <h3>{"🐑 Navigation"}</h3>
                    <ul>{ for entries }</ul>
                    <button class="secondary" onclick={toggle}>{"Close"}</button>
                </aside>
            }

            <main class="main-content">
                { props.children.clone() }
            </main>
        </div>
    }
}
