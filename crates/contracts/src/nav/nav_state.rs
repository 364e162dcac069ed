use super::dropdowns::{DropdownId, Dropdowns};

/// Open/closed state of the mobile navigation panel plus the header
/// dropdowns. The two are independent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    mobile_open: bool,
    pub dropdowns: Dropdowns,
}

impl NavState {
    pub fn new(dropdowns: impl IntoIterator<Item = DropdownId>) -> Self {
        Self {
            mobile_open: false,
            dropdowns: Dropdowns::new(dropdowns),
        }
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_mobile(&mut self) -> bool {
        self.mobile_open = !self.mobile_open;
        self.mobile_open
    }

    /// Returns `true` if the panel was open.
    pub fn close_mobile(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_open, false)
    }
}
