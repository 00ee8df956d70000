use dioxus::prelude::*;

pub const CONTACT_EMAIL: &str = "info@papirmania.hu";

const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("Facebook", "/images/img_facebook.svg", "https://facebook.com/papirmania"),
    ("Instagram", "/images/img_instagram.svg", "https://instagram.com/papirmania"),
    ("YouTube", "/images/img_youtube.svg", "https://youtube.com/@papirmania"),
];

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Adatvédelem", "/privacy"),
    ("Felhasználási feltételek", "/terms"),
    ("Sütik beállítása", "/cookies"),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    img {
                        src: "/images/img_papermania_logo.svg",
                        alt: "Papírmánia Logo",
                        height: 40,
                    }

                    div { class: "footer-links",
                        span { "Kapcsolat" }
                        a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    }

                    div { class: "site-nav",
                        for (alt , icon , href) in SOCIAL_LINKS {
                            a {
                                key: "{href}",
                                href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                img { src: icon, alt, width: 24, height: 24 }
                            }
                        }
                    }
                }

                div { class: "footer-legal footer-grid",
                    span { "© Papírmánia. Minden jog fenntartva." }
                    div { class: "site-nav",
                        for (label , href) in LEGAL_LINKS {
                            a { key: "{href}", href, "{label}" }
                        }
                    }
                }
            }
        }
    }
}
