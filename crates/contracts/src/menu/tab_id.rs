use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Вкладка меню ресторана.
///
/// The wire token (markup `data-tab`, section `id`, address fragment) is the
/// lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    Breakfast,
    Lunch,
    Dinner,
    Greek,
    Drinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu tab: '{0}'")]
pub struct ParseTabIdError(pub String);

impl TabId {
    /// All tabs in markup declaration order.
    pub const ALL: [TabId; 5] = [
        TabId::Breakfast,
        TabId::Lunch,
        TabId::Dinner,
        TabId::Greek,
        TabId::Drinks,
    ];

    pub fn token(self) -> &'static str {
        match self {
            TabId::Breakfast => "breakfast",
            TabId::Lunch => "lunch",
            TabId::Dinner => "dinner",
            TabId::Greek => "greek",
            TabId::Drinks => "drinks",
        }
    }

    /// Address fragment naming this tab, `#` included.
    pub fn fragment(self) -> &'static str {
        match self {
            TabId::Breakfast => "#breakfast",
            TabId::Lunch => "#lunch",
            TabId::Dinner => "#dinner",
            TabId::Greek => "#greek",
            TabId::Drinks => "#drinks",
        }
    }

    /// Заголовок вкладки для UI.
    pub fn label(self) -> &'static str {
        match self {
            TabId::Breakfast => "Breakfast",
            TabId::Lunch => "Lunch",
            TabId::Dinner => "Dinner",
            TabId::Greek => "Greek Specials",
            TabId::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TabId {
    type Err = ParseTabIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .into_iter()
            .find(|tab| tab.token() == s)
            .ok_or_else(|| ParseTabIdError(s.to_string()))
    }
}
