use dioxus::prelude::*;

use api::fallback;

use crate::sections::{PageBody, use_page};

#[component]
pub fn Hero() -> Element {
    let page = use_page(fallback::HERO_TAG, fallback::hero);
    let images = page.hero_images();

    rsx! {
        section { class: "section hero", id: "hero-section",
            div { class: "container",
                div {
                    h1 { class: "hero-title", "{page.title}" }
                    div { class: "hero-body",
                        PageBody { page: page.clone() }
                    }
                    div { class: "site-nav",
                        a { class: "btn btn-primary", href: "#courses-section", "Kurzusok" }
                        a { class: "btn btn-outline", href: "#gallery-section", "Galéria" }
                    }
                }
                div { class: "technique-list",
                    for (i , src) in images.into_iter().enumerate() {
                        img {
                            key: "{i}",
                            class: "hero-image",
                            src: "{src}",
                            alt: "{page.title}",
                        }
                    }
                }
            }
        }
    }
}
