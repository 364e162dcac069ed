/// Keys that move focus through the tab list. Any other key passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Previous,
    First,
    Last,
}

impl TabKey {
    /// Maps `KeyboardEvent.key` values.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(TabKey::Next),
            "ArrowLeft" => Some(TabKey::Previous),
            "Home" => Some(TabKey::First),
            "End" => Some(TabKey::Last),
            _ => None,
        }
    }

    /// Target index in a list of `len` tabs, wrapping at both ends.
    ///
    /// Returns `None` for an empty list.
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = current.min(len - 1);
        Some(match self {
            TabKey::Next => (current + 1) % len,
            TabKey::Previous => (current + len - 1) % len,
            TabKey::First => 0,
            TabKey::Last => len - 1,
        })
    }
}
