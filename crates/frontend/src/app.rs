use crate::layout::{AboutSection, ModalService, Shell};
use crate::menu::{MenuBrowser, MenuContext};
use crate::nav::NavContext;
use crate::shared::dom::site_config_json;
use contracts::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load(site_config_json().as_deref());
    log::debug!(
        "site config: {} tabs, header offset {}px",
        config.tabs.len(),
        config.header_offset
    );

    // Контроллеры независимы друг от друга; каждый получает свою копию настроек
    provide_context(MenuContext::new(&config));
    provide_context(NavContext::new(&config));
    provide_context(ModalService::new());

    view! {
        <Shell>
            <AboutSection />
            <MenuBrowser />
        </Shell>
    }
}
