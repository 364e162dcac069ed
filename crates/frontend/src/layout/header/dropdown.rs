//! Header dropdown: a click-toggled disclosure with a list of links.
//!
//! Entries that point at a menu tab (`#lunch`) keep the browser's default
//! navigation so the fragment change reaches the tab controller through
//! `hashchange`; other in-page entries are smooth-scrolled.

use crate::nav::NavContext;
use crate::shared::icons;
use contracts::menu::parse_fragment;
use contracts::nav::DropdownId;
use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct DropdownEntry {
    pub href: &'static str,
    pub title: &'static str,
}

#[component]
pub fn NavDropdown(id: &'static str, label: &'static str, items: Vec<DropdownEntry>) -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext context not found");

    let dropdown_id = DropdownId::from(id);
    let is_open = {
        let dropdown_id = dropdown_id.clone();
        Memo::new(move |_| nav.is_dropdown_open(&dropdown_id))
    };

    let select_entry = move |ev: ev::MouseEvent, href: &'static str| {
        if parse_fragment(href).is_some() {
            nav.close_all_dropdowns();
            nav.close_mobile_menu();
        } else if nav.follow_anchor(href) {
            ev.prevent_default();
        }
    };

    view! {
        <div class="nav-dropdown" data-dropdown=id>
            <button
                type="button"
                class="nav-dropdown__trigger"
                class:nav-dropdown__trigger--open=move || is_open.get()
                aria-haspopup="true"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| nav.toggle_dropdown(&dropdown_id)
            >
                <span>{label}</span>
                {move || if is_open.get() {
                    icons::icon("chevron-up")
                } else {
                    icons::icon("chevron-down")
                }}
            </button>

            <ul class="nav-dropdown__menu" class:nav-dropdown__menu--open=move || is_open.get()>
                {items.into_iter().map(move |item| {
                    let href = item.href;
                    view! {
                        <li>
                            <a
                                class="nav-dropdown__item"
                                href=href
                                on:click=move |ev: ev::MouseEvent| select_entry(ev, href)
                            >
                                {item.title}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
