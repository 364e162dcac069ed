use super::keyboard::TabKey;
use super::tab_id::TabId;

/// Which menu tab is shown.
///
/// `registered` keeps markup declaration order and drives keyboard
/// traversal. `active` is `None` only until the first synchronization with
/// the address fragment; afterwards exactly one registered tab is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabState {
    registered: Vec<TabId>,
    active: Option<TabId>,
}

impl TabState {
    /// Registers tabs in the given order. Repeated declarations collapse to
    /// the first one.
    pub fn new(tabs: impl IntoIterator<Item = TabId>) -> Self {
        let mut registered = Vec::new();
        for tab in tabs {
            if registered.contains(&tab) {
                log::warn!("duplicate tab declaration ignored: {}", tab);
                continue;
            }
            registered.push(tab);
        }
        Self {
            registered,
            active: None,
        }
    }

    pub fn registered(&self) -> &[TabId] {
        &self.registered
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn is_registered(&self, tab: TabId) -> bool {
        self.registered.contains(&tab)
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == Some(tab)
    }

    pub fn position(&self, tab: TabId) -> Option<usize> {
        self.registered.iter().position(|t| *t == tab)
    }

    /// Makes `tab` the only active tab. Unregistered tabs leave the state
    /// untouched and return `false`.
    pub fn activate(&mut self, tab: TabId) -> bool {
        if !self.is_registered(tab) {
            return false;
        }
        self.active = Some(tab);
        true
    }

    /// Tab shown when the address names nothing usable: `preferred` if it is
    /// registered, otherwise the first declared tab.
    pub fn default_tab(&self, preferred: Option<TabId>) -> Option<TabId> {
        preferred
            .filter(|tab| self.is_registered(*tab))
            .or_else(|| self.registered.first().copied())
    }

    /// Tab reached by `key` from `from`, the tab that holds focus. That is
    /// not necessarily the active one: back/forward can change the active
    /// tab while focus stays put. Unregistered `from` yields `None`.
    pub fn step(&self, from: TabId, key: TabKey) -> Option<TabId> {
        let current = self.position(from)?;
        key.target(current, self.registered.len())
            .map(|idx| self.registered[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tabs() -> TabState {
        TabState::new(TabId::ALL)
    }

    #[test]
    fn test_initial_state_has_no_active_tab() {
        let state = all_tabs();
        assert_eq!(state.active(), None);
        assert_eq!(state.registered().len(), 5);
    }

    #[test]
    fn test_activate_exactly_one() {
        let mut state = all_tabs();
        for tab in TabId::ALL {
            assert!(state.activate(tab));
            let active: Vec<_> = state
                .registered()
                .iter()
                .filter(|t| state.is_active(**t))
                .collect();
            assert_eq!(active, vec![&tab]);
        }
    }

    #[test]
    fn test_activate_unregistered_is_noop() {
        let mut state = TabState::new([TabId::Breakfast, TabId::Lunch]);
        state.activate(TabId::Lunch);
        let before = state.clone();
        assert!(!state.activate(TabId::Drinks));
        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicates_collapse() {
        let state = TabState::new([TabId::Lunch, TabId::Dinner, TabId::Lunch]);
        assert_eq!(state.registered(), &[TabId::Lunch, TabId::Dinner]);
    }

    #[test]
    fn test_default_tab() {
        let state = TabState::new([TabId::Lunch, TabId::Dinner]);
        assert_eq!(state.default_tab(None), Some(TabId::Lunch));
        assert_eq!(state.default_tab(Some(TabId::Dinner)), Some(TabId::Dinner));
        assert_eq!(state.default_tab(Some(TabId::Greek)), Some(TabId::Lunch));
        assert_eq!(TabState::default().default_tab(None), None);
    }

    #[test]
    fn test_step_wraps_around() {
        let state = all_tabs();
        assert_eq!(state.step(TabId::Drinks, TabKey::Next), Some(TabId::Breakfast));
        assert_eq!(state.step(TabId::Breakfast, TabKey::Previous), Some(TabId::Drinks));
        assert_eq!(state.step(TabId::Breakfast, TabKey::Last), Some(TabId::Drinks));
        assert_eq!(state.step(TabId::Dinner, TabKey::First), Some(TabId::Breakfast));
    }

    #[test]
    fn test_step_starts_from_focused_tab() {
        let mut state = all_tabs();
        state.activate(TabId::Breakfast);
        assert_eq!(state.step(TabId::Lunch, TabKey::Next), Some(TabId::Dinner));
    }

    #[test]
    fn test_step_from_unregistered() {
        let state = TabState::new([TabId::Lunch, TabId::Dinner]);
        assert_eq!(state.step(TabId::Greek, TabKey::Next), None);
        assert_eq!(TabState::default().step(TabId::Lunch, TabKey::Next), None);
    }
}
