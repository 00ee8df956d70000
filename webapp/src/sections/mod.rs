use dioxus::prelude::*;

use api::content::ContentPage;

pub mod about;
pub mod courses;
pub mod cta;
pub mod hero;
pub mod testimonials;

// paragraphs separated by blank lines, single newlines become <br>
#[component]
pub fn PageBody(page: ContentPage) -> Element {
    rsx! {
        for (i , lines) in page.paragraphs().into_iter().enumerate() {
            p { key: "{i}",
                for (j , line) in lines.iter().enumerate() {
                    if j > 0 {
                        br {}
                    }
                    "{line}"
                }
            }
        }
    }
}

// a tagged page, or the built-in copy when the cms is unreachable or has no
// page with that tag
pub fn use_page(tag: &'static str, fallback: fn() -> ContentPage) -> ContentPage {
    let page = use_resource(move || async move {
        let page = crate::common::cms()
            .page(tag)
            .await
            .map(|page| page.unwrap_or_else(fallback));

        crate::common::or_fallback(tag, page, fallback)
    });

    match &*page.read() {
        Some(page) => page.clone(),
        None => fallback(),
    }
}
