//! Menu browser components.
//!
//! Markup contract: every tab button carries `data-tab="<token>"`, every
//! panel `id="<token>"`. Inactive panels get `menu-section--hidden`.

use super::catalog::{dishes, format_price};
use super::context::MenuContext;
use contracts::menu::TabId;
use leptos::prelude::*;

#[component]
pub fn MenuBrowser() -> impl IntoView {
    let menu = use_context::<MenuContext>().expect("MenuContext not provided in context");

    // Синхронизация с адресом после монтирования, когда контейнер уже в DOM
    Effect::new(move |_| menu.wire());

    let tabs = menu.registered();
    let panels = tabs.clone();

    view! {
        <section id=menu.container_id() class="menu-browser">
            <h2 class="menu-browser__title">"Our Menu"</h2>
            <div class="menu-browser__tabs" role="tablist" aria-label="Menu sections">
                {tabs
                    .into_iter()
                    .map(|tab| view! { <MenuTabButton tab=tab menu=menu /> })
                    .collect_view()}
            </div>
            {panels
                .into_iter()
                .map(|tab| view! { <MenuPanel tab=tab menu=menu /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn MenuTabButton(tab: TabId, menu: MenuContext) -> impl IntoView {
    let is_active = move || menu.is_active(tab);

    view! {
        <button
            type="button"
            role="tab"
            class="menu-tab"
            class:menu-tab--active=is_active
            data-tab=tab.token()
            aria-controls=tab.token()
            aria-selected=move || if is_active() { "true" } else { "false" }
            tabindex=move || if is_active() { "0" } else { "-1" }
            on:click=move |_| menu.activate(tab)
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if menu.on_key(tab, &ev.key()) {
                    ev.prevent_default();
                }
            }
        >
            {tab.label()}
        </button>
    }
}

#[component]
fn MenuPanel(tab: TabId, menu: MenuContext) -> impl IntoView {
    view! {
        <div
            id=tab.token()
            role="tabpanel"
            class="menu-section"
            class:menu-section--hidden=move || !menu.is_active(tab)
        >
            <ul class="menu-section__list">
                {dishes(tab)
                    .iter()
                    .map(|dish| {
                        view! {
                            <li class="dish">
                                <span class="dish__name">{dish.name}</span>
                                <span class="dish__price">{format_price(dish.price_cents)}</span>
                                <p class="dish__description">{dish.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
