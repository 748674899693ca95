//! Breadcrumb trail.

use core_types::{Page, Role};
use yew::prelude::*;

use crate::context::use_role_navigator;

/// Properties for Breadcrumb component.
#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub page: Page,
    pub role: Role,
}

/// "Home › Page" trail; Home keeps the current role.
#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let navigate = use_role_navigator(props.role);
    let go_home = Callback::from(move |_: MouseEvent| navigate.emit(Page::Landing.path().to_string()));

    html! {
        <nav class="breadcrumb">
            <button class="link" onclick={go_home}>{ Page::Landing.title() }</button>
            <span>{"›"}</span>
            <span>{ props.page.title() }</span>
        </nav>
    }
}
