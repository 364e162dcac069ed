//! Section tab controller: keeps the visible menu tab and the address
//! fragment consistent.
//!
//! Two directions, kept apart:
//! - apply: fragment → [`TabController::activate`], run on startup and on
//!   every `hashchange`;
//! - publish: activation → fragment, via `history.replaceState`. Replacing
//!   the state does not fire `hashchange`, so publishing never re-enters
//!   apply, and back navigation does not stop on every tab switch.

use crate::shared::dom::MenuDocument;
use contracts::menu::{parse_fragment, TabId, TabKey, TabState};
use contracts::SiteConfig;

pub struct TabController<D> {
    state: TabState,
    document: D,
    header_offset: f64,
    container_id: String,
    default_tab: Option<TabId>,
    wired: bool,
}

impl<D: MenuDocument> TabController<D> {
    pub fn new(config: &SiteConfig, document: D) -> Self {
        Self {
            state: TabState::new(config.tabs.iter().copied()),
            document,
            header_offset: config.tab_header_offset,
            container_id: config.menu_container.clone(),
            default_tab: config.default_tab,
            wired: false,
        }
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    pub fn active(&self) -> Option<TabId> {
        self.state.active()
    }

    /// Shows `tab`, scrolls the menu under the header and mirrors the tab
    /// into the address fragment. Unregistered tabs are ignored.
    pub fn activate(&mut self, tab: TabId) -> bool {
        if !self.state.activate(tab) {
            log::debug!("activate: tab '{}' is not registered, ignored", tab);
            return false;
        }
        log::debug!("activate: '{}'", tab);
        self.document
            .scroll_to_element(&self.container_id, self.header_offset);
        self.publish(tab);
        true
    }

    fn publish(&self, tab: TabId) {
        self.document.replace_fragment(tab.fragment());
    }

    fn apply_address(&mut self) -> bool {
        match parse_fragment(&self.document.fragment()) {
            Some(tab) => self.activate(tab),
            None => false,
        }
    }

    /// Startup sync. A fragment naming a registered tab wins; otherwise the
    /// default tab is shown without scrolling or touching the fragment.
    pub fn initialize_from_address(&mut self) {
        if self.apply_address() || self.state.active().is_some() {
            return;
        }
        if let Some(tab) = self.state.default_tab(self.default_tab) {
            self.state.activate(tab);
            log::debug!("initialize: default tab '{}'", tab);
        }
    }

    /// `hashchange` handler: typed links, back/forward and external links go
    /// through the same transition as a click.
    pub fn on_address_changed(&mut self) {
        self.apply_address();
    }

    /// Arrow-key traversal while tab `from` has focus. Returns `true` if the
    /// key was consumed.
    pub fn on_key(&mut self, from: TabId, key: &str) -> bool {
        let Some(key) = TabKey::from_key(key) else {
            return false;
        };
        let Some(target) = self.state.step(from, key) else {
            return false;
        };
        self.document.focus_tab(target.token());
        self.activate(target);
        true
    }

    /// Returns `true` the first time only; event listeners are registered
    /// behind it so a repeated setup wires nothing twice.
    pub fn mark_wired(&mut self) -> bool {
        !std::mem::replace(&mut self.wired, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fake_document::FakeDocument;

    fn controller(fragment: &str) -> (TabController<FakeDocument>, FakeDocument) {
        let doc = FakeDocument::with_elements(&["menu"]);
        doc.set_fragment(fragment);
        let ctrl = TabController::new(&SiteConfig::default(), doc.clone());
        (ctrl, doc)
    }

    #[test]
    fn test_activate_every_tab() {
        let (mut ctrl, doc) = controller("");
        for tab in TabId::ALL {
            assert!(ctrl.activate(tab));
            assert_eq!(ctrl.active(), Some(tab));
            let active_count = TabId::ALL
                .iter()
                .filter(|t| ctrl.state().is_active(**t))
                .count();
            assert_eq!(active_count, 1);
            assert_eq!(doc.recorded().fragment, format!("#{}", tab.token()));
        }
        assert_eq!(doc.recorded().scrolls.len(), 5);
        assert_eq!(doc.recorded().scrolls[0], ("menu".to_string(), 100.0));
    }

    #[test]
    fn test_activate_unregistered_is_noop() {
        let doc = FakeDocument::with_elements(&["menu"]);
        let config = SiteConfig {
            tabs: vec![TabId::Breakfast, TabId::Lunch],
            ..SiteConfig::default()
        };
        let mut ctrl = TabController::new(&config, doc.clone());
        ctrl.activate(TabId::Lunch);
        let writes = doc.recorded().fragment_writes;

        assert!(!ctrl.activate(TabId::Greek));
        assert_eq!(ctrl.active(), Some(TabId::Lunch));
        assert_eq!(doc.recorded().fragment, "#lunch");
        assert_eq!(doc.recorded().fragment_writes, writes);
        assert_eq!(doc.recorded().scrolls.len(), 1);
    }

    #[test]
    fn test_initialize_valid_fragment() {
        let (mut ctrl, _doc) = controller("#lunch");
        assert_eq!(ctrl.active(), None);
        ctrl.initialize_from_address();
        assert_eq!(ctrl.active(), Some(TabId::Lunch));
    }

    #[test]
    fn test_initialize_invalid_fragment_keeps_default() {
        let (mut ctrl, doc) = controller("#xyz");
        ctrl.initialize_from_address();
        assert_eq!(ctrl.active(), Some(TabId::Breakfast));
        assert_eq!(doc.recorded().fragment, "#xyz");
        assert_eq!(doc.recorded().fragment_writes, 0);
        assert!(doc.recorded().scrolls.is_empty());
    }

    #[test]
    fn test_initialize_prefers_configured_default() {
        let doc = FakeDocument::default();
        let config = SiteConfig {
            default_tab: Some(TabId::Dinner),
            ..SiteConfig::default()
        };
        let mut ctrl = TabController::new(&config, doc);
        ctrl.initialize_from_address();
        assert_eq!(ctrl.active(), Some(TabId::Dinner));
    }

    #[test]
    fn test_address_round_trip() {
        let (mut ctrl, doc) = controller("");
        ctrl.initialize_from_address();
        ctrl.activate(TabId::Greek);

        let fragment = doc.recorded().fragment.clone();
        let (mut reloaded, _) = controller(&fragment);
        reloaded.initialize_from_address();
        assert_eq!(reloaded.active(), Some(TabId::Greek));

        ctrl.initialize_from_address();
        assert_eq!(ctrl.active(), Some(TabId::Greek));
        assert_eq!(doc.recorded().fragment, "#greek");
    }

    #[test]
    fn test_address_changed_drives_activation() {
        let (mut ctrl, doc) = controller("");
        ctrl.initialize_from_address();

        doc.set_fragment("#drinks");
        ctrl.on_address_changed();
        assert_eq!(ctrl.active(), Some(TabId::Drinks));

        // Невалидный фрагмент (например, якорь другого раздела) ничего не меняет
        doc.set_fragment("#contact");
        ctrl.on_address_changed();
        assert_eq!(ctrl.active(), Some(TabId::Drinks));
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let (mut ctrl, doc) = controller("#drinks");
        ctrl.initialize_from_address();

        assert!(ctrl.on_key(TabId::Drinks, "ArrowRight"));
        assert_eq!(ctrl.active(), Some(TabId::Breakfast));
        assert_eq!(doc.recorded().focused.as_deref(), Some("breakfast"));

        assert!(ctrl.on_key(TabId::Breakfast, "ArrowLeft"));
        assert_eq!(ctrl.active(), Some(TabId::Drinks));
        assert_eq!(doc.recorded().fragment, "#drinks");
    }

    #[test]
    fn test_arrow_keys_step_from_focused_tab() {
        let (mut ctrl, doc) = controller("#lunch");
        ctrl.initialize_from_address();

        // Назад по истории: активная вкладка меняется, фокус остаётся на Lunch
        doc.set_fragment("#breakfast");
        ctrl.on_address_changed();
        assert_eq!(ctrl.active(), Some(TabId::Breakfast));

        assert!(ctrl.on_key(TabId::Lunch, "ArrowRight"));
        assert_eq!(ctrl.active(), Some(TabId::Dinner));
        assert_eq!(doc.recorded().focused.as_deref(), Some("dinner"));
    }

    #[test]
    fn test_home_end_and_passthrough() {
        let (mut ctrl, _doc) = controller("#dinner");
        ctrl.initialize_from_address();

        assert!(ctrl.on_key(TabId::Dinner, "End"));
        assert_eq!(ctrl.active(), Some(TabId::Drinks));
        assert!(ctrl.on_key(TabId::Drinks, "Home"));
        assert_eq!(ctrl.active(), Some(TabId::Breakfast));

        assert!(!ctrl.on_key(TabId::Breakfast, "Enter"));
        assert!(!ctrl.on_key(TabId::Breakfast, "Escape"));
        assert_eq!(ctrl.active(), Some(TabId::Breakfast));
    }

    #[test]
    fn test_arrow_key_from_unregistered_tab_passes_through() {
        let doc = FakeDocument::with_elements(&["menu"]);
        let config = SiteConfig {
            tabs: vec![TabId::Lunch, TabId::Dinner],
            ..SiteConfig::default()
        };
        let mut ctrl = TabController::new(&config, doc.clone());
        ctrl.initialize_from_address();

        assert!(!ctrl.on_key(TabId::Greek, "ArrowRight"));
        assert_eq!(ctrl.active(), Some(TabId::Lunch));
        assert_eq!(doc.recorded().focused, None);
    }

    #[test]
    fn test_missing_container_still_activates() {
        let doc = FakeDocument::default();
        let mut ctrl = TabController::new(&SiteConfig::default(), doc.clone());
        assert!(ctrl.activate(TabId::Lunch));
        assert!(doc.recorded().scrolls.is_empty());
        assert_eq!(doc.recorded().fragment, "#lunch");
    }

    #[test]
    fn test_mark_wired_once() {
        let (mut ctrl, _doc) = controller("");
        assert!(ctrl.mark_wired());
        assert!(!ctrl.mark_wired());
    }
}
