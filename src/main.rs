mod components;
mod config;
mod dom;
mod error;
mod model;
mod net;
mod state;
mod util;

use components::{GamesMenu, GamesMenuProps};
use config::{MENU_ROOT_ID, MenuConfig};
use util::clog;

fn main() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    // Pages without the menu container simply don't get a menu.
    let Some(root) = dom::menu_root() else {
        clog!("#{MENU_ROOT_ID} not found; games menu disabled");
        return;
    };
    let config = MenuConfig::from_attribute(root.get_attribute("data-config").as_deref());
    // The component owns everything inside the root.
    root.set_inner_html("");
    yew::Renderer::<GamesMenu>::with_root_and_props(root, GamesMenuProps { config }).render();
}
