use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::{content::Technique, fallback};

use crate::{
    Route,
    common::{cms, or_fallback},
};

pub mod selector;
use selector::TechniqueSelector;

pub fn use_techniques() -> Resource<Vec<Technique>> {
    use_resource(|| async move {
        or_fallback("techniques", cms().techniques().await, fallback::techniques)
    })
}

#[component]
fn TechniqueTab(technique: Technique, active: bool, selector: Signal<TechniqueSelector>) -> Element {
    let mut selector = selector;
    let id = technique.id.clone();

    rsx! {
        button {
            role: "tab",
            class: if active { "technique-tab active" } else { "technique-tab" },
            onclick: move |_| {
                let query = selector.write().select(&id);

                if let Some(technika) = query {
                    navigator().replace(Route::Home { technika });
                }
            },
            "{technique.label}"
        }
    }
}

// technique tabs on the home page
//
// the active tab is mirrored into ?technika= so that a tab can be linked to.
// the selector signal is what gets rendered; the route is only read back when
// it changes from outside (history navigation, a followed link)
#[component]
pub fn Techniques(technika: String) -> Element {
    let mut selector =
        use_signal(|| TechniqueSelector::new(fallback::techniques(), Some(&technika)));

    let technika = use_memo(use_reactive(&technika, |technika| technika));

    use_effect(move || {
        let query = technika();
        selector.write().reconcile(Some(&query));
    });

    use_future(move || async move {
        let techniques = or_fallback("techniques", cms().techniques().await, fallback::techniques);

        if !techniques.is_empty() {
            let query = technika.peek().clone();
            selector.write().replace(techniques, Some(&query));
        }
    });

    let tabs = selector.read().tabs().to_vec();
    let active = selector.read().active_id().map(str::to_owned);
    let content = selector.read().active_content();

    rsx! {
        section { class: "section section-alt", id: "techniques-section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Újrahasznosítás" }
                    h2 { class: "section-title", "Miről tanulhatsz?" }
                    p { class: "section-lead",
                        "Döntsd el, hogy mit szeretnél megtanulni. Cartonnage, könyvkötés, dobozkészítés vagy valami más?"
                    }
                }

                div { class: "technique-tabs", role: "tablist",
                    for technique in tabs {
                        TechniqueTab {
                            key: "{technique.id}",
                            active: active.as_deref() == Some(technique.id.as_str()),
                            technique: technique.clone(),
                            selector,
                        }
                    }
                }

                div { class: "technique-panel", role: "tabpanel",
                    div {
                        h3 { class: "course-title", "{content.title}" }
                        p { class: "section-lead", "{content.description}" }
                    }
                    img { src: "{content.image}", alt: "{content.title}" }
                }
            }
        }
    }
}

// read-only list for the course page, in cms order and without url state
#[component]
pub fn TechniqueList() -> Element {
    let techniques = use_techniques();

    let selector = match &*techniques.read() {
        Some(techniques) => TechniqueSelector::ordered(techniques.clone()),
        None => TechniqueSelector::ordered(fallback::techniques()),
    };

    rsx! {
        div { class: "technique-list",
            for technique in selector.tabs().iter() {
                div { key: "{technique.id}", class: "card",
                    h3 { class: "course-title", "{technique.label}" }
                    if let Some(content) = technique.content.as_ref() {
                        p { class: "section-lead", "{content.description}" }
                    }
                }
            }
        }
    }
}
