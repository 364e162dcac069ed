//! Tabbed menu browser
//!
//! Содержит:
//! - `controller` - синхронизация активной вкладки с адресным фрагментом
//! - `context` - реактивная обёртка контроллера для компонентов
//! - `browser` - компоненты вкладок и разделов меню
//! - `catalog` - статическое содержимое разделов

pub mod browser;
pub mod catalog;
pub mod context;
pub mod controller;

pub use browser::MenuBrowser;
pub use context::MenuContext;
pub use controller::TabController;
