//! Shared, DOM-free types for the Taverna site.
//!
//! Everything here is plain data plus the state transitions the frontend
//! controllers drive. Nothing in this crate touches `web-sys`, so the whole
//! view-state model is testable on the host.

pub mod config;
pub mod menu;
pub mod modal;
pub mod nav;

pub use config::{ConfigError, SiteConfig};
pub use menu::{parse_fragment, ParseTabIdError, TabId, TabKey, TabState};
pub use modal::{ModalId, ModalState};
pub use nav::{DropdownId, Dropdowns, NavState};
