use dioxus::prelude::*;

use api::contact::send_contact;

use crate::components::modal::ResultModalBox;

pub mod form;
use form::ContactForm;

const CONTACT_IMAGE: &str = "/images/img_placeholder_image_774x516.png";

#[component]
pub fn Contact() -> Element {
    let mut contact = use_signal(ContactForm::default);

    let submit = move |_: MouseEvent| async move {
        let Some(req) = contact.write().begin() else {
            return;
        };

        let result = send_contact(&req).await;

        if let Err(err) = &result {
            tracing::warn!({error = %err}, "contact message not delivered");
        }

        contact.write().finish(result);
    };

    let state = contact.read().clone();

    rsx! {
        section { class: "section contact", id: "contact-section",
            div { class: "container",
                div {
                    div { class: "section-header",
                        span { class: "section-eyebrow", "Üzenet" }
                        h2 { class: "section-title", "Írj nekem" }
                        p { class: "section-lead", "Van egy ötleted vagy kérdésed a workshopokról?" }
                    }

                    form {
                        class: "contact-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                        },

                        div { class: "form-group",
                            label { class: "form-label", r#for: "contact-name", "Név" }
                            input {
                                class: "form-input",
                                id: "contact-name",
                                r#type: "text",
                                placeholder: "Írja be a nevét",
                                value: "{state.name}",
                                oninput: move |evt| contact.write().name = evt.value(),
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "contact-email", "Email" }
                            input {
                                class: "form-input",
                                id: "contact-email",
                                r#type: "email",
                                placeholder: "email@example.com",
                                value: "{state.email}",
                                oninput: move |evt| contact.write().email = evt.value(),
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", r#for: "contact-message", "Üzenet" }
                            textarea {
                                class: "form-input",
                                id: "contact-message",
                                rows: 6,
                                placeholder: "Írja be üzenetét itt...",
                                value: "{state.message}",
                                oninput: move |evt| contact.write().message = evt.value(),
                            }
                        }

                        label { class: "form-check",
                            input {
                                r#type: "checkbox",
                                checked: state.accept_terms,
                                onchange: move |evt| contact.write().accept_terms = evt.checked(),
                            }
                            "Elfogadom az adatvédelmi szabályzatot"
                        }

                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: state.is_submitting(),
                            onclick: submit,
                            if state.is_submitting() {
                                "Küldés..."
                            } else {
                                "Küldés"
                            }
                        }
                    }
                }

                img {
                    class: "contact-image",
                    src: CONTACT_IMAGE,
                    alt: "Contact us - paper crafts studio",
                }
            }

            if let Some(modal) = state.modal().cloned() {
                ResultModalBox { modal, onclose: move |_| contact.write().close_modal() }
            }
        }
    }
}
