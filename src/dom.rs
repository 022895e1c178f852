//! Glue to the host page: elements the menu does not render itself, window
//! globals and blocking alerts. Missing optional elements are skipped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};

use crate::config::MENU_ROOT_ID;
use crate::util::cwarn;

fn element(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn menu_root() -> Option<Element> {
    element(MENU_ROOT_ID)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Shows or hides the mount root (`display` + `open` class).
pub fn set_root_visible(visible: bool) {
    let Some(root) = menu_root() else {
        return;
    };
    let _ = root.class_list().toggle_with_force("open", visible);
    if let Some(root) = root.dyn_ref::<HtmlElement>() {
        let _ = root
            .style()
            .set_property("display", if visible { "flex" } else { "none" });
    }
}

pub fn set_overlay_shown(overlay_id: &str, shown: bool) {
    if let Some(overlay) = element(overlay_id) {
        let _ = overlay.class_list().toggle_with_force("show", shown);
    }
}

/// Exposes `window.showGamesMenu()` / `window.hideGamesMenu()`.
pub fn install_globals(show: impl Fn() + 'static, hide: impl Fn() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    for (name, f) in [
        ("showGamesMenu", Box::new(show) as Box<dyn Fn()>),
        ("hideGamesMenu", Box::new(hide)),
    ] {
        let closure = Closure::wrap(f);
        if js_sys::Reflect::set(&window, &name.into(), closure.as_ref()).is_err() {
            cwarn!("could not install window.{name}");
        }
        closure.forget();
    }
}

/// Opens the menu from the page's launcher link instead of following it.
pub fn bind_launcher(launcher_id: &str, open: impl Fn() + 'static) {
    let Some(link) = element(launcher_id) else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |evt: web_sys::MouseEvent| {
        evt.prevent_default();
        open();
    });
    let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Closes the menu on clicks that land on the root backdrop itself.
pub fn bind_backdrop(close: impl Fn() + 'static) {
    let Some(root) = menu_root() else {
        return;
    };
    let target_root = root.clone();
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |evt: web_sys::MouseEvent| {
        let on_backdrop = evt
            .target()
            .is_some_and(|t| js_sys::Object::is(&t, &target_root));
        if on_backdrop {
            close();
        }
    });
    let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
