use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, theme::use_template};

// section anchors; absolute so they also work from the course pages
const NAV_ITEMS: [(&str, &str); 4] = [
    ("Kurzusok", "/#courses-section"),
    ("Technikák", "/#techniques-section"),
    ("Galéria", "/#gallery-section"),
    ("Rólam", "/#about-section"),
];

#[component]
fn TemplateToggle() -> Element {
    let mut template = use_template();

    let (title, icon, alt) = if template.is_light() {
        ("Sötét téma", "/images/img_lucide_sun.svg", "Light mode")
    } else {
        ("Világos téma", "/images/img_lucide_moon.svg", "Dark mode")
    };

    rsx! {
        button {
            class: "btn btn-icon",
            aria_label: "Sablon váltás",
            title,
            onclick: move |_| template.toggle(),
            img { src: icon, alt, width: 20, height: 20 }
        }
    }
}

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container",
                nav { class: "site-nav",
                    for (label , href) in NAV_ITEMS {
                        a { key: "{href}", href, "{label}" }
                    }
                }

                Link { to: Route::Home { technika: String::new() }, class: "site-logo",
                    img {
                        src: "/images/img_papermania_logo.svg",
                        alt: "Papírmánia Logo",
                        height: 40,
                    }
                }

                div { class: "site-nav",
                    TemplateToggle {}
                    a { class: "btn btn-primary", href: "/#contact-section", "Kapcsolat" }
                }
            }
        }
    }
}
