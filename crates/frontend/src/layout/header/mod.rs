pub mod dropdown;
pub mod header;

pub use dropdown::{DropdownEntry, NavDropdown};
pub use header::Header;
