use serde::{Deserialize, Serialize};

/// Dialogs the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalId {
    Reservation,
    OpeningHours,
}

/// At most one dialog is open; opening another replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    open: Option<ModalId>,
}

impl ModalState {
    pub fn current(&self) -> Option<ModalId> {
        self.open
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open == Some(id)
    }

    pub fn open(&mut self, id: ModalId) {
        self.open = Some(id);
    }

    pub fn close(&mut self) -> Option<ModalId> {
        self.open.take()
    }
}
