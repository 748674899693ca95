//! Game Central catalog page.

use core_types::{CategoryFilter, Page, filter_by_category};
use yew::prelude::*;

use crate::components::{Breadcrumb, GameCard};
use crate::context::{use_page_role, use_role_navigator};

/// Game Central page component.
#[function_component(GamesPage)]
pub fn games_page() -> Html {
    let role = use_page_role(Page::Games);
    let navigate = use_role_navigator(role);
    let filter = use_state(CategoryFilter::default);
    let catalog = use_memo((), |_| mock_data::load_games());

    let games = filter_by_category(&catalog, *filter);

    let chips = CategoryFilter::chips().into_iter().map(|chip| {
        let filter = filter.clone();
        let class = if *filter == chip { "chip selected" } else { "chip" };
        let onclick = Callback::from(move |_: MouseEvent| {
            tracing::debug!(filter = %chip, "category selected");
            filter.set(chip);
        });
        html! {
            <button key={chip.to_string()} {class} {onclick}>{ chip.label() }</button>
        }
    });

    html! {
        <div>
            <Breadcrumb page={Page::Games} {role} />
            <h1>{"Game Central"}</h1>

            <div class="card">
                <h3>{"Categories"}</h3>
                { for chips }
            </div>

            if games.is_empty() {
                <div class="card">
                    <p>{"No games in this category yet."}</p>
                </div>
            } else {
                <div class="grid">
                    { for games.into_iter().map(|game| {
                        let key = game.id.clone();
                        html! { <GameCard key={key} {game} on_play={navigate.clone()} /> }
                    })}
                </div>
            }
        </div>
    }
}
