use crate::shared::dom::{NavDocument, WebDocument};
use crate::shared::icons::icon;
use contracts::modal::{ModalId, ModalState};
use leptos::ev;
use leptos::prelude::*;

/// Сервис для централизованного управления модальными окнами
#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<ModalState>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
        }
    }

    /// Показать модальное окно (заменяет уже открытое)
    pub fn show(&self, id: ModalId) {
        self.state.update(|s| s.open(id));
        WebDocument.set_scroll_locked(true);
        log::debug!("modal {:?} opened", id);
    }

    /// Скрыть модальное окно
    pub fn hide(&self) {
        let closed = self.state.try_update(|s| s.close()).flatten();
        if closed.is_some() {
            WebDocument.set_scroll_locked(false);
        }
    }

    pub fn current(&self) -> Option<ModalId> {
        self.state.with(|s| s.current())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the open dialog, if any. Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    // Глобальный обработчик Escape
    Effect::new(move |_| {
        let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
            if ev.key() == "Escape" && modal.state.with_untracked(|s| s.current().is_some()) {
                modal.hide();
            }
        });
    });

    view! {
        {move || match modal.current() {
            Some(id) => view! {
                <div class="modal-overlay" on:click=move |_| modal.hide()>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        on:click=|e: ev::MouseEvent| e.stop_propagation()
                    >
                        <div class="modal-header">
                            <h2 class="modal-title">{dialog_title(id)}</h2>
                            <button
                                class="button button--icon modal__close"
                                aria-label="Close"
                                on:click=move |_| modal.hide()
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="modal-body">{dialog_body(id)}</div>
                    </div>
                </div>
            }.into_any(),
            None => view! { <></> }.into_any(),
        }}
    }
}

fn dialog_title(id: ModalId) -> &'static str {
    match id {
        ModalId::Reservation => "Book a table",
        ModalId::OpeningHours => "Opening hours",
    }
}

fn dialog_body(id: ModalId) -> AnyView {
    match id {
        ModalId::Reservation => view! {
            <p>"Call us on " <a href="tel:+302101234567">"+30 210 123 4567"</a>
               " or drop by. Tables for six or more need a day's notice."</p>
        }.into_any(),
        ModalId::OpeningHours => view! {
            <table class="hours">
                <tr><td>"Mon – Fri"</td><td>"08:00 – 23:00"</td></tr>
                <tr><td>"Sat – Sun"</td><td>"09:00 – 00:00"</td></tr>
            </table>
        }.into_any(),
    }
}
