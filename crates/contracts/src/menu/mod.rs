//! Menu browser model
//!
//! Содержит:
//! - `tab_id` - закрытый перечень вкладок меню и их токены
//! - `fragment` - разбор адресного фрагмента (`#lunch`)
//! - `keyboard` - клавиши навигации по вкладкам
//! - `tab_state` - единственный источник правды об активной вкладке

pub mod fragment;
pub mod keyboard;
pub mod tab_id;
pub mod tab_state;

pub use fragment::parse_fragment;
pub use keyboard::TabKey;
pub use tab_id::{ParseTabIdError, TabId};
pub use tab_state::TabState;
