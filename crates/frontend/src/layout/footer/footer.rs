use crate::layout::modal_service::ModalService;
use crate::shared::icons::icon;
use contracts::modal::ModalId;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        <footer id="contact" class="footer">
            <div class="footer__block">
                <h3>"Visit us"</h3>
                <p>"Odos Adrianou 42, Plaka, Athens"</p>
                <p><a href="tel:+302101234567">"+30 210 123 4567"</a></p>
            </div>
            <button
                type="button"
                class="button button--ghost footer__hours"
                on:click=move |_| modal.show(ModalId::OpeningHours)
            >
                {icon("clock")}
                <span>"Opening hours"</span>
            </button>
        </footer>
    }
}
