//! Landing page: placeholder login, then the module grid.

use core_types::{Credentials, LoginState, TransitionPayload, landing_grid};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::ModuleCard;
use crate::context::{RoleAction, use_app, use_role, use_role_navigator};

/// Landing page component.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let app = use_app();
    let roles = use_role();
    let navigator = use_navigator();
    let location = use_location();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);

    // Coming back from a module page with a role counts as logged in.
    {
        let roles = roles.clone();
        let arrival = location
            .as_ref()
            .and_then(|location| location.state::<TransitionPayload>())
            .and_then(|payload| payload.role);
        use_effect_with(arrival, move |arrival| {
            if let Some(role) = *arrival {
                roles.dispatch(RoleAction::Login(role));
            }
        });
    }

    let login = LoginState::from_arrival(roles.holder.selected());
    let navigate = use_role_navigator(roles.holder.role());

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_submit = {
        let roles = roles.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials::new((*username).clone(), (*password).clone());
            if let Some(role) = LoginState::login(&credentials).role() {
                roles.dispatch(RoleAction::Login(role));
            }
        })
    };

    let on_logout = {
        let roles = roles.clone();
        Callback::from(move |_: MouseEvent| {
            login.logout();
            roles.dispatch(RoleAction::Logout);
            // Drop the arrival payload so the page does not log back in.
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Landing);
            }
        })
    };

    let title = login.welcome_title(&app.config.school_name);

    html! {
        <div>
            <header class="app-header">
                <span class="brand">
                    { format!("🐑 {} ", app.config.school_name) }
                    if let Some(role) = login.role() {
                        <small>{ role.header_suffix() }</small>
                    }
                </span>
                <span style="flex-grow: 1;"></span>
                if login.role().is_some() {
                    <button class="secondary" onclick={on_logout}>{"Logout"}</button>
                }
            </header>

            <main class="main-content">
                if let Some(role) = login.role() {
                    <>
                    <h1>{ title }</h1>
                    <div class="grid">
                        { for landing_grid(role).into_iter().map(|module| html! {
                            <ModuleCard key={module.title} {module} {role} on_open={navigate.clone()} />
                        })}
                    </div>
                    <h2>{"Announcements"}</h2>
                    <div class="grid">
                        { for mock_data::load_announcements().into_iter().map(|item| html! {
                            <div class="card" key={item.title.clone()}>
                                <h3>{ &item.title }</h3>
                                <p>{ &item.content }</p>
                                <p class="meta">{ item.date.format("%B %-d, %Y").to_string() }</p>
                            </div>
                        })}
                    </div>
                    </>
                } else {
                    <form class="card login-form" onsubmit={on_submit}>
                        <h1>{ title }</h1>
                        <input
                            type="text"
                            placeholder="Username"
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                        <div style="display: flex; gap: 0.5rem;">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                placeholder="Password"
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                            <button type="button" class="secondary" onclick={toggle_password}>
                                { if *show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>
                        <button type="submit">{"Login"}</button>
                    </form>
                }
            </main>
        </div>
    }
}
