use dioxus::prelude::*;

use api::fallback::HERO_IMAGE_SMALL;

#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section { class: "section cta",
            div { class: "container",
                h2 { class: "section-title", "Alkossunk együtt" }
                p { class: "section-lead",
                    "Ne maradj le a következő alkalomról. Tanulj kézműves technikákat, óvd a környezetet kreatívan!"
                }
                a { class: "btn btn-primary", href: "#courses-section", "Megnézem az időpontokat" }
                img {
                    class: "hero-image",
                    style: "max-width: 516px; margin: var(--space-12) auto 0;",
                    src: HERO_IMAGE_SMALL,
                    alt: "Creative workshop session",
                }
            }
        }
    }
}
