use dioxus::prelude::*;

pub const MAX_RATING: u8 = 5;

#[component]
pub fn Rating(value: u8) -> Element {
    let value = value.min(MAX_RATING);

    rsx! {
        div { class: "rating", aria_label: "{value} / {MAX_RATING}",
            for star in 1..=MAX_RATING {
                span {
                    key: "{star}",
                    class: if star <= value { "star" } else { "star-empty" },
                    "★"
                }
            }
        }
    }
}
