use dioxus::prelude::*;

use api::{PLACEHOLDER_IMAGE, fallback};

use crate::sections::{PageBody, use_page};

#[component]
pub fn About() -> Element {
    let page = use_page(fallback::ABOUT_TAG, fallback::about);

    let large = page
        .hero_image_large
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

    rsx! {
        section { class: "section section-alt", id: "about-section",
            div { class: "container technique-panel",
                div {
                    div { class: "section-header",
                        span { class: "section-eyebrow", "Rólam" }
                        h2 { class: "section-title", "{page.title}" }
                    }
                    div { class: "about-text",
                        PageBody { page: page.clone() }
                    }
                }
                div { class: "technique-list",
                    img {
                        class: "hero-image",
                        src: "{large}",
                        alt: "About the artist - paper crafts creator",
                    }
                    if let Some(small) = page.hero_image_small.clone() {
                        img { class: "hero-image", src: "{small}", alt: "Paper art collection" }
                    }
                }
            }
        }
    }
}
