//! Recording stand-in for [`WebDocument`](super::dom::WebDocument) in host tests.

use super::dom::{MenuDocument, NavDocument};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Recorded {
    pub fragment: String,
    pub fragment_writes: usize,
    pub scrolls: Vec<(String, f64)>,
    pub focused: Option<String>,
    pub scroll_locked: bool,
    pub elements: HashSet<String>,
}

/// Cloning shares the recording, so a test keeps one handle while the
/// controller owns the other.
#[derive(Debug, Clone, Default)]
pub struct FakeDocument(pub Rc<RefCell<Recorded>>);

impl FakeDocument {
    pub fn with_elements(ids: &[&str]) -> Self {
        let doc = Self::default();
        doc.0
            .borrow_mut()
            .elements
            .extend(ids.iter().map(|id| id.to_string()));
        doc
    }

    /// Simulates the user typing a new fragment or navigating history.
    pub fn set_fragment(&self, fragment: &str) {
        self.0.borrow_mut().fragment = fragment.to_string();
    }

    pub fn recorded(&self) -> std::cell::Ref<'_, Recorded> {
        self.0.borrow()
    }

    fn scroll(&self, id: &str, header_offset: f64) -> bool {
        let mut rec = self.0.borrow_mut();
        if !rec.elements.contains(id) {
            return false;
        }
        rec.scrolls.push((id.to_string(), header_offset));
        true
    }
}

impl MenuDocument for FakeDocument {
    fn fragment(&self) -> String {
        self.0.borrow().fragment.clone()
    }

    fn replace_fragment(&self, fragment: &str) {
        let mut rec = self.0.borrow_mut();
        rec.fragment = fragment.to_string();
        rec.fragment_writes += 1;
    }

    fn scroll_to_element(&self, id: &str, header_offset: f64) -> bool {
        self.scroll(id, header_offset)
    }

    fn focus_tab(&self, token: &str) {
        self.0.borrow_mut().focused = Some(token.to_string());
    }
}

impl NavDocument for FakeDocument {
    fn set_scroll_locked(&self, locked: bool) {
        self.0.borrow_mut().scroll_locked = locked;
    }

    fn scroll_to_element(&self, id: &str, header_offset: f64) -> bool {
        self.scroll(id, header_offset)
    }
}
