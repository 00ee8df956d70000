use dioxus::prelude::*;

use crate::contact::form::{ModalKind, ResultModal};

// result dialog for the contact form
//
// clicking the backdrop or the button closes it; clicks inside the dialog
// itself are stopped before they reach the backdrop
#[component]
pub fn ResultModalBox(modal: ResultModal, onclose: EventHandler<()>) -> Element {
    let (class, icon) = match modal.kind {
        ModalKind::Success => ("modal modal-success", "✓"),
        ModalKind::Error => ("modal modal-error", "✕"),
    };

    rsx! {
        div { class: "modal-overlay", onclick: move |_| onclose.call(()),
            div {
                class,
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    div { class: "modal-icon", "{icon}" }
                    h3 { class: "modal-title", "{modal.title}" }
                }
                div { class: "modal-body",
                    p { "{modal.message}" }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| onclose.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
