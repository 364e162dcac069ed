use super::controller::NavController;
use crate::shared::dom::{is_inside_dropdown, WebDocument};
use contracts::nav::DropdownId;
use contracts::SiteConfig;
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct NavContext {
    pub nav: RwSignal<NavController<WebDocument>>,
}

impl NavContext {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            nav: RwSignal::new(NavController::new(config, WebDocument)),
        }
    }

    pub fn is_mobile_open(&self) -> bool {
        self.nav.with(|c| c.is_mobile_open())
    }

    pub fn is_dropdown_open(&self, id: &DropdownId) -> bool {
        self.nav.with(|c| c.is_dropdown_open(id))
    }

    pub fn toggle_mobile_menu(&self) {
        self.nav.update(|c| c.toggle_mobile_menu());
    }

    pub fn close_mobile_menu(&self) {
        self.nav.update(|c| c.close_mobile_menu());
    }

    pub fn toggle_dropdown(&self, id: &DropdownId) {
        self.nav.update(|c| c.toggle_dropdown(id));
    }

    pub fn close_all_dropdowns(&self) {
        self.nav.update(|c| {
            c.close_all_dropdowns();
        });
    }

    pub fn follow_anchor(&self, href: &str) -> bool {
        self.nav
            .try_update(|c| c.follow_anchor(href))
            .unwrap_or(false)
    }

    /// Escape key and outside clicks. Registered once per context.
    pub fn wire(&self) {
        let first = self
            .nav
            .try_update_untracked(|c| c.mark_wired())
            .unwrap_or(false);
        if !first {
            leptos::logging::log!("NavContext::wire called twice, skipped");
            return;
        }

        let nav = self.nav;
        let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
            let key = ev.key();
            let consumed = nav
                .try_update_untracked(|c| c.on_key(&key))
                .unwrap_or(false);
            if consumed {
                nav.notify();
            }
        });

        // Клик вне всех выпадающих меню закрывает их
        let _ = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
            if is_inside_dropdown(&ev) {
                return;
            }
            let closed = nav
                .try_update_untracked(|c| c.close_all_dropdowns())
                .unwrap_or(false);
            if closed {
                nav.notify();
            }
        });
    }
}
