use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a dropdown container (`data-dropdown` in markup).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropdownId(pub String);

impl DropdownId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for DropdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DropdownId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Set of disclosure widgets of which at most one is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dropdowns {
    entries: Vec<(DropdownId, bool)>,
}

impl Dropdowns {
    pub fn new(ids: impl IntoIterator<Item = DropdownId>) -> Self {
        let mut dropdowns = Self::default();
        for id in ids {
            dropdowns.ensure(&id);
        }
        dropdowns
    }

    fn ensure(&mut self, id: &DropdownId) -> usize {
        match self.entries.iter().position(|(known, _)| known == id) {
            Some(idx) => idx,
            None => {
                self.entries.push((id.clone(), false));
                self.entries.len() - 1
            }
        }
    }

    pub fn is_open(&self, id: &DropdownId) -> bool {
        self.entries
            .iter()
            .any(|(known, open)| known == id && *open)
    }

    /// Flips `id` and closes every other entry. Returns the new state of `id`.
    pub fn toggle(&mut self, id: &DropdownId) -> bool {
        let idx = self.ensure(id);
        let now_open = !self.entries[idx].1;
        for (i, (_, open)) in self.entries.iter_mut().enumerate() {
            *open = i == idx && now_open;
        }
        now_open
    }

    /// Returns `true` if anything was open.
    pub fn close_all(&mut self) -> bool {
        let mut changed = false;
        for (_, open) in self.entries.iter_mut() {
            changed |= *open;
            *open = false;
        }
        changed
    }
}
