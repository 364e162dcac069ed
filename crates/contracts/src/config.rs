use crate::menu::TabId;
use crate::nav::DropdownId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page-level settings embedded by the static markup.
///
/// Every field is optional in the JSON; missing fields fall back to
/// [`SiteConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header, in CSS pixels. In-page anchors scroll to
    /// just below it.
    pub header_offset: f64,
    /// Offset used when a menu tab is activated; leaves room for the tab
    /// strip above the panel.
    pub tab_header_offset: f64,
    /// Element the viewport scrolls to when a tab is activated.
    pub menu_container: String,
    pub tabs: Vec<TabId>,
    pub default_tab: Option<TabId>,
    pub dropdowns: Vec<DropdownId>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            tab_header_offset: 100.0,
            menu_container: "menu".to_string(),
            tabs: TabId::ALL.to_vec(),
            default_tab: None,
            dropdowns: vec![DropdownId::from("about"), DropdownId::from("menus")],
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses `raw` if present, falling back to defaults on absence or error.
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
