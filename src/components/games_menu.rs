use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::GameCard;
use crate::config::MenuConfig;
use crate::dom;
use crate::model::{GameEntry, filter_games, search_placeholder};
use crate::net::{self, HttpCatalogSource};
use crate::state::{CatalogLoader, Debouncer, MenuAction, MenuPhase, MenuState, Scheduler, TimeoutScheduler};
use crate::util::cerr;

#[derive(Properties, PartialEq, Clone)]
pub struct GamesMenuProps {
    pub config: MenuConfig,
}

#[function_component(GamesMenu)]
pub fn games_menu(props: &GamesMenuProps) -> Html {
    let menu = use_reducer(MenuState::default);
    let loaded_count = use_state(|| None::<usize>);
    let visible = use_state(|| Rc::new(Vec::<GameEntry>::new()));
    let search_ref = use_node_ref();
    let loader = use_memo(props.config.catalog_url.clone(), |url| {
        CatalogLoader::new(HttpCatalogSource::new(url.as_str()))
    });
    let debouncer = {
        let delay_ms = props.config.debounce_ms;
        use_mut_ref(move || Debouncer::new(TimeoutScheduler, delay_ms))
    };
    let transition_timer = use_mut_ref(|| None::<Timeout>);

    // Re-filter the grid from whatever the search box holds right now.
    let render: Rc<dyn Fn()> = {
        let loader = loader.clone();
        let search_ref = search_ref.clone();
        let visible = visible.clone();
        Rc::new(move || {
            let query = search_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let games = loader.games().unwrap_or_default();
            visible.set(Rc::new(filter_games(&games, &query)));
        })
    };

    // Page wiring and catalog warm-up, once.
    {
        let dispatcher = menu.dispatcher();
        let loader = loader.clone();
        let loaded_count = loaded_count.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let show = {
                let d = dispatcher.clone();
                move || d.dispatch(MenuAction::Show)
            };
            let hide = {
                let d = dispatcher.clone();
                move || d.dispatch(MenuAction::Hide)
            };
            dom::install_globals(show.clone(), hide.clone());
            dom::bind_launcher(&config.launcher_id, show);
            dom::bind_backdrop(hide);

            // Failure is already logged by the loader; opening the menu retries.
            let pending = loader.load();
            spawn_local(async move {
                if let Ok(games) = pending.await {
                    loaded_count.set(Some(games.len()));
                }
            });
            || ()
        });
    }

    // Phase side effects.
    {
        let dispatcher = menu.dispatcher();
        let search_ref = search_ref.clone();
        let visible = visible.clone();
        let loader = loader.clone();
        let loaded_count = loaded_count.clone();
        let render = render.clone();
        let debouncer = debouncer.clone();
        let transition_timer = transition_timer.clone();
        let config = props.config.clone();
        use_effect_with(menu.phase, move |phase| {
            let phase = *phase;
            dom::set_root_visible(phase.root_visible());
            dom::set_overlay_shown(&config.overlay_id, phase.overlay_visible());

            transition_timer.borrow_mut().take();
            if phase.is_transitioning() {
                let d = dispatcher.clone();
                *transition_timer.borrow_mut() = Some(TimeoutScheduler.schedule(
                    config.transition_fallback_ms,
                    Box::new(move || d.dispatch(MenuAction::TransitionEnd)),
                ));
            }

            if phase == MenuPhase::Opening {
                debouncer.borrow_mut().cancel();
                if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                    let _ = input.focus();
                }
                visible.set(Rc::new(Vec::new()));
                if loader.is_loaded() {
                    render();
                } else {
                    let pending = loader.load();
                    spawn_local(async move {
                        match pending.await {
                            Ok(games) => {
                                loaded_count.set(Some(games.len()));
                                render();
                            }
                            Err(_) => dom::alert("Error loading games"),
                        }
                    });
                }
            }
            || ()
        });
    }

    let oninput = {
        let debouncer = debouncer.clone();
        let render = render.clone();
        Callback::from(move |_: InputEvent| {
            let render = render.clone();
            debouncer.borrow_mut().trigger(move || render());
        })
    };
    let onanimationend = {
        let d = menu.dispatcher();
        Callback::from(move |_: AnimationEvent| d.dispatch(MenuAction::TransitionEnd))
    };
    let on_close = {
        let d = menu.dispatcher();
        Callback::from(move |_: MouseEvent| d.dispatch(MenuAction::Hide))
    };
    let on_select = Callback::from(|url: String| {
        spawn_local(async move {
            if let Err(err) = net::launch_game(&url).await {
                cerr!("could not launch {url}: {err}");
                dom::alert(&format!("Error loading game: {err}"));
            }
        });
    });

    let placeholder = search_placeholder(*loaded_count);
    let grid_style = if visible.is_empty() {
        "display:none;"
    } else {
        "display:grid;"
    };

    html! {
        <div class={classes!("games-menu-content", menu.phase.content_class())} {onanimationend}>
            <div class="games-menu-header">
                <input id="gamesSearchInput" type="text" autocomplete="off" ref={search_ref} {placeholder} {oninput} />
                <button id="close-games-menu" aria-label="Close" onclick={on_close}>{"×"}</button>
            </div>
            <div class="games-grid-container" style={grid_style}>
                <div class="games-grid">
                    { for visible.iter().map(|game| html! {
                        <GameCard game={game.clone()} on_select={on_select.clone()} />
                    }) }
                </div>
            </div>
        </div>
    }
}
