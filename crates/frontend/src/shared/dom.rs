//! The live document, seen through the narrow traits the controllers need.
//!
//! Controllers never call `web_sys` directly; they go through
//! [`MenuDocument`] / [`NavDocument`] so they run unchanged against a fake
//! document in host tests. Every call degrades to a no-op when the element
//! or browser object it needs is absent.

use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Document operations used by the menu tab controller.
pub trait MenuDocument {
    /// Current `location.hash`, including the leading `#` when present.
    fn fragment(&self) -> String;

    /// Overwrites the fragment without adding a history entry.
    fn replace_fragment(&self, fragment: &str);

    /// Smoothly scrolls so element `id` sits `header_offset` px below the
    /// top of the viewport. Returns `false` if the element does not exist.
    fn scroll_to_element(&self, id: &str, header_offset: f64) -> bool;

    /// Moves keyboard focus to the tab button for `token`.
    fn focus_tab(&self, token: &str);
}

/// Document operations used by the navigation panel controller.
pub trait NavDocument {
    /// Suppresses or restores scrolling of the page body.
    fn set_scroll_locked(&self, locked: bool);

    fn scroll_to_element(&self, id: &str, header_offset: f64) -> bool;
}

/// The browser document. Stateless: every call looks the window up again.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDocument;

fn element_by_id(id: &str) -> Option<Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

fn smooth_scroll_to(id: &str, header_offset: f64) -> bool {
    let Some(w) = window() else {
        return false;
    };
    let Some(element) = element_by_id(id) else {
        log::debug!("scroll target '#{}' not found", id);
        return false;
    };
    let page_y = w.scroll_y().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + page_y - header_offset;

    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    // Не ждём окончания анимации: следующий запрос просто перебивает текущий.
    w.scroll_to_with_scroll_to_options(&options);
    true
}

impl MenuDocument for WebDocument {
    fn fragment(&self) -> String {
        window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    fn replace_fragment(&self, fragment: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(fragment),
                );
            }
        }
    }

    fn scroll_to_element(&self, id: &str, header_offset: f64) -> bool {
        smooth_scroll_to(id, header_offset)
    }

    fn focus_tab(&self, token: &str) {
        let selector = format!("[data-tab=\"{}\"]", token);
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }
}

impl NavDocument for WebDocument {
    fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn scroll_to_element(&self, id: &str, header_offset: f64) -> bool {
        smooth_scroll_to(id, header_offset)
    }
}

/// `true` if the event target sits inside any `[data-dropdown]` container.
pub fn is_inside_dropdown(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("[data-dropdown]").ok().flatten())
        .is_some()
}

/// Raw JSON of the `<script id="site-config">` element, if the page has one.
pub fn site_config_json() -> Option<String> {
    element_by_id("site-config").and_then(|el| el.text_content())
}
