//! Mobile navigation panel and header dropdowns.

pub mod dropdowns;
pub mod nav_state;

pub use dropdowns::{DropdownId, Dropdowns};
pub use nav_state::NavState;
