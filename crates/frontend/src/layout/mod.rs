pub mod footer;
pub mod header;
pub mod modal_service;

pub use modal_service::{ModalHost, ModalService};

use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |   Header (brand, burger, nav panel)      |
/// +------------------------------------------+
/// |   main content                           |
/// +------------------------------------------+
/// |   Footer (#contact)                      |
/// +------------------------------------------+
/// ```
///
/// The nav overlay and the dialog host sit outside `main` so they can cover
/// the whole page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div id="top" class="site">
            <header::Header />
            <main class="site__main">{children()}</main>
            <footer::Footer />
            <ModalHost />
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div id="story" class="about__block">
                <h2>"Our story"</h2>
                <p>
                    "Three generations of home cooking from the Peloponnese, "
                    "served a few steps from the Acropolis since 1974."
                </p>
            </div>
            <div id="team" class="about__block">
                <h2>"The team"</h2>
                <p>"Eleni runs the kitchen. Nikos runs everything else."</p>
            </div>
        </section>
    }
}
