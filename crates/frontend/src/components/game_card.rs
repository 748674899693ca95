//! Game Central card.

use core_types::Game;
use yew::prelude::*;

/// Properties for GameCard component.
#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: Game,
    /// Emits the game's path when played.
    pub on_play: Callback<String>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;
    let onclick = {
        let on_play = props.on_play.clone();
        let path = game.path.clone();
        Callback::from(move |_: MouseEvent| on_play.emit(path.clone()))
    };

    html! {
        <div class="card game-card" {onclick}>
            <h3>{ &game.title }</h3>
            <p>{ &game.description }</p>
            <span class="chip" style={format!("background: {};", game.difficulty.color())}>
                { game.difficulty.as_str() }
            </span>
            <div>
                { for game.learning_goals.iter().enumerate().map(|(index, goal)| html! {
                    <span class="chip" key={goal.clone()} title={goal.clone()}>
                        { format!("Goal {}", index + 1) }
                    </span>
                })}
            </div>
        </div>
    }
}
