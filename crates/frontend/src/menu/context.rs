use super::controller::TabController;
use crate::shared::dom::WebDocument;
use contracts::menu::TabId;
use contracts::SiteConfig;
use leptos::ev;
use leptos::prelude::*;

/// Tab controller shared with the menu components via context.
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub tabs: RwSignal<TabController<WebDocument>>,
    container_id: StoredValue<String>,
}

impl MenuContext {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            tabs: RwSignal::new(TabController::new(config, WebDocument)),
            container_id: StoredValue::new(config.menu_container.clone()),
        }
    }

    pub fn container_id(&self) -> String {
        self.container_id.get_value()
    }

    pub fn registered(&self) -> Vec<TabId> {
        self.tabs.with_untracked(|c| c.state().registered().to_vec())
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.tabs.with(|c| c.state().is_active(tab))
    }

    pub fn activate(&self, tab: TabId) {
        self.tabs.update(|c| {
            c.activate(tab);
        });
    }

    /// Keydown on the button of tab `from`. Subscribers are notified only
    /// when the key moved the selection.
    pub fn on_key(&self, from: TabId, key: &str) -> bool {
        let consumed = self
            .tabs
            .try_update_untracked(|c| c.on_key(from, key))
            .unwrap_or(false);
        if consumed {
            self.tabs.notify();
        }
        consumed
    }

    /// Syncs with the address once and starts listening for `hashchange`.
    /// Later calls do nothing.
    pub fn wire(&self) {
        let first = self
            .tabs
            .try_update_untracked(|c| c.mark_wired())
            .unwrap_or(false);
        if !first {
            leptos::logging::log!("MenuContext::wire called twice, skipped");
            return;
        }

        self.tabs.update(|c| c.initialize_from_address());

        let tabs = self.tabs;
        let _ = window_event_listener(ev::hashchange, move |_| {
            tabs.update(|c| c.on_address_changed());
        });
    }
}
