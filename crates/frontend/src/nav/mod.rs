//! Mobile navigation panel and header dropdowns.

pub mod context;
pub mod controller;

pub use context::NavContext;
pub use controller::NavController;
