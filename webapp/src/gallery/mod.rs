use dioxus::prelude::*;

use api::fallback;

use crate::common::{cms, or_fallback};

pub mod lightbox;
use lightbox::Lightbox;

#[component]
fn LightboxOverlay(lightbox: Signal<Lightbox>) -> Element {
    let mut lightbox = lightbox;

    let (image, counter) = {
        let state = lightbox.read();
        match state.current() {
            Some(image) => (image.clone(), state.counter()),
            None => return rsx! {},
        }
    };

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            tabindex: "-1",
            // keys only reach us while the overlay has focus
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if lightbox.write().handle_key(&evt.key().to_string()) {
                    evt.prevent_default();
                }
            },
            onclick: move |_| lightbox.write().close(),

            button {
                class: "lightbox-close",
                aria_label: "Bezárás",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().close();
                },
                "×"
            }
            button {
                class: "lightbox-nav prev",
                aria_label: "Előző",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().previous();
                },
                "‹"
            }
            img {
                class: "lightbox-image",
                src: "{image.src}",
                alt: "{image.alt}",
                onclick: move |evt| evt.stop_propagation(),
            }
            button {
                class: "lightbox-nav next",
                aria_label: "Következő",
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.write().next();
                },
                "›"
            }
            span { class: "lightbox-counter", "{counter}" }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    let mut lightbox = use_signal(|| Lightbox::new(fallback::gallery()));

    use_future(move || async move {
        let images = or_fallback("gallery", cms().gallery().await, fallback::gallery);

        // an empty collection keeps the built-in pictures on screen
        if !images.is_empty() {
            lightbox.write().set_images(images);
        }
    });

    let images = lightbox.read().images().to_vec();

    rsx! {
        section { class: "section", id: "gallery-section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Galéria" }
                    h2 { class: "section-title", "Alkotások" }
                }
                div { class: "gallery-grid",
                    for (index , image) in images.into_iter().enumerate() {
                        button {
                            key: "{image.id}",
                            class: "gallery-item",
                            onclick: move |_| lightbox.write().open(index),
                            img {
                                src: "{image.src}",
                                alt: "{image.alt}",
                                width: "{image.width}",
                                height: "{image.height}",
                                loading: "lazy",
                            }
                        }
                    }
                }
            }
            LightboxOverlay { lightbox }
        }
    }
}
