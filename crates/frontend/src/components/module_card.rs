//! Landing grid card.

use core_types::{NavModule, Role};
use yew::prelude::*;

/// Properties for ModuleCard component.
#[derive(Properties, PartialEq)]
pub struct ModuleCardProps {
    pub module: NavModule,
    pub role: Role,
    pub on_open: Callback<String>,
}

#[function_component(ModuleCard)]
pub fn module_card(props: &ModuleCardProps) -> Html {
    let module = props.module;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(module.target.path().to_string()))
    };

    html! {
        <div class="card module-card" {onclick}>
            <h3>{ module.display_title(Some(props.role)) }</h3>
            <p>{ module.description }</p>
        </div>
    }
}
