use crate::shared::dom::NavDocument;
use contracts::nav::{DropdownId, NavState};
use contracts::SiteConfig;

/// Mobile navigation panel and header dropdowns.
///
/// Nothing here can fail: a control missing from the page is simply never
/// wired, so its operation is never called.
pub struct NavController<D> {
    state: NavState,
    document: D,
    header_offset: f64,
    wired: bool,
}

impl<D: NavDocument> NavController<D> {
    pub fn new(config: &SiteConfig, document: D) -> Self {
        Self {
            state: NavState::new(config.dropdowns.iter().cloned()),
            document,
            header_offset: config.header_offset,
            wired: false,
        }
    }

    pub fn is_mobile_open(&self) -> bool {
        self.state.is_mobile_open()
    }

    pub fn is_dropdown_open(&self, id: &DropdownId) -> bool {
        self.state.dropdowns.is_open(id)
    }

    pub fn toggle_mobile_menu(&mut self) {
        let open = self.state.toggle_mobile();
        self.document.set_scroll_locked(open);
        log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
    }

    /// Overlay click, link click inside the panel, Escape.
    pub fn close_mobile_menu(&mut self) {
        if self.state.close_mobile() {
            self.document.set_scroll_locked(false);
            log::debug!("mobile menu closed");
        }
    }

    pub fn toggle_dropdown(&mut self, id: &DropdownId) {
        let open = self.state.dropdowns.toggle(id);
        log::debug!("dropdown '{}' open={}", id, open);
    }

    /// Outside click, Escape, selection of a menu entry. Returns `true` if
    /// anything was open.
    pub fn close_all_dropdowns(&mut self) -> bool {
        let closed = self.state.dropdowns.close_all();
        if closed {
            log::debug!("dropdowns closed");
        }
        closed
    }

    /// Returns `true` if the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.close_mobile_menu();
        self.close_all_dropdowns();
        true
    }

    /// In-page link click. Closes the panel and, for `#id` links whose
    /// target exists, scrolls smoothly under the header. Returns `true` when
    /// the default navigation should be suppressed.
    pub fn follow_anchor(&mut self, href: &str) -> bool {
        self.close_mobile_menu();
        self.close_all_dropdowns();
        match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => self.document.scroll_to_element(id, self.header_offset),
            _ => false,
        }
    }

    pub fn mark_wired(&mut self) -> bool {
        !std::mem::replace(&mut self.wired, true)
    }
}
