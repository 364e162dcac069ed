use crate::layout::header::dropdown::{DropdownEntry, NavDropdown};
use crate::layout::modal_service::ModalService;
use crate::nav::NavContext;
use crate::shared::icons::icon;
use contracts::menu::TabId;
use contracts::modal::ModalId;
use leptos::ev;
use leptos::prelude::*;

const SECTION_LINKS: [(&str, &str); 3] = [("#about", "About"), ("#menu", "Menu"), ("#contact", "Contact")];

#[component]
pub fn Header() -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext context not found");
    let modal = leptos::context::use_context::<ModalService>().expect("ModalService not provided in context");

    Effect::new(move |_| nav.wire());

    let about_entries = vec![
        DropdownEntry { href: "#story", title: "Our story" },
        DropdownEntry { href: "#team", title: "The team" },
    ];

    // Пункты меню ведут на вкладки через адресный фрагмент
    let menu_entries = TabId::ALL
        .into_iter()
        .map(|tab| DropdownEntry {
            href: tab.fragment(),
            title: tab.label(),
        })
        .collect::<Vec<_>>();

    let is_open = move || nav.is_mobile_open();

    view! {
        <header data-zone="header" class="header">
            <a class="header__brand" href="#top">"Taverna"</a>

            <button
                type="button"
                class="header__burger"
                aria-label="Toggle navigation"
                aria-expanded=move || if is_open() { "true" } else { "false" }
                on:click=move |_| nav.toggle_mobile_menu()
            >
                {move || if is_open() { icon("x") } else { icon("menu") }}
            </button>

            <nav class="nav-panel" class:nav-panel--open=is_open>
                {SECTION_LINKS.into_iter().map(|(href, label)| view! {
                    <a
                        class="nav-panel__link"
                        href=href
                        on:click=move |ev: ev::MouseEvent| {
                            if nav.follow_anchor(href) {
                                ev.prevent_default();
                            }
                        }
                    >
                        {label}
                    </a>
                }).collect_view()}
                <NavDropdown id="about" label="About us" items=about_entries />
                <NavDropdown id="menus" label="Menus" items=menu_entries />
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| {
                        nav.close_mobile_menu();
                        modal.show(ModalId::Reservation);
                    }
                >
                    "Book a table"
                </button>
            </nav>
        </header>
        <div
            class="nav-overlay"
            class:nav-overlay--visible=is_open
            on:click=move |_| nav.close_mobile_menu()
        ></div>
    }
}
