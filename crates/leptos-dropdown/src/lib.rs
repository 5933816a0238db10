//! Leptos Dropdown Utilities
//!
//! Helpers for popup lists anchored to an input: dismissal when the user
//! clicks anywhere outside the anchor's wrapper element.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Returns true when `target` is not inside `container`.
///
/// A missing container (not mounted yet) counts as "outside" so stale
/// popups never get stuck open.
pub fn is_outside(container: Option<&web_sys::Node>, target: Option<&web_sys::Node>) -> bool {
    match (container, target) {
        (Some(container), Some(target)) => !container.contains(Some(target)),
        (Some(_), None) => true,
        (None, _) => true,
    }
}

/// Call `on_outside` for every click that lands outside `wrapper`.
///
/// The listener sits on the window, so each open dropdown is handled
/// independently. It is removed when the calling component's owner is
/// cleaned up.
pub fn on_click_outside<F>(wrapper: NodeRef<Div>, on_outside: F)
where
    F: Fn() + 'static,
{
    let handle = window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        let container = wrapper.get_untracked();
        let container_node = container.as_ref().map(|el| el.unchecked_ref::<web_sys::Node>());
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());

        if is_outside(container_node, target.as_ref()) {
            on_outside();
        }
    });

    on_cleanup(move || handle.remove());
}
