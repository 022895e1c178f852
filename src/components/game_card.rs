use crate::model::GameEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: GameEntry,
    /// Receives the game's URL when the card is clicked.
    pub on_select: Callback<String>,
}

#[function_component]
pub fn GameCard(props: &GameCardProps) -> Html {
    let game = &props.game;
    let onclick = {
        let url = game.game_url.clone();
        let cb = props.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(url.clone()))
    };
    html! {
        <div
            class={classes!("game-card", game.is_external.then_some("external"))}
            title={format!("{} by {}", game.name, game.author)}
            data-game-id={game.id.clone()}
            data-game-url={game.game_url.clone()}
            {onclick}
        >
            <div class="game-image">
                <img src={game.cover_url.clone()} alt={format!("{} Cover", game.name)} />
            </div>
            <div class="game-info">
                <h2>{ game.name.clone() }</h2>
                <p>{ game.description.clone() }</p>
            </div>
        </div>
    }
}
