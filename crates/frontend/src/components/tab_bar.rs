//! Tab strip.

use yew::prelude::*;

/// Properties for TabBar component.
#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: &'static [&'static str],
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs">
            { for props.tabs.iter().enumerate().map(|(index, label)| {
                let on_select = props.on_select.clone();
                let class = if index == props.active { "active" } else { "" };
                html! {
                    <button key={*label} {class} onclick={move |_: MouseEvent| on_select.emit(index)}>
                        { *label }
                    </button>
                }
            })}
        </div>
    }
}
