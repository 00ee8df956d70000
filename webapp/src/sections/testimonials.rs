use dioxus::prelude::*;

use api::{content::Testimonial, fallback};

use crate::{
    common::{cms, or_fallback},
    components::rating::Rating,
};

const SKELETON_CARDS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
enum TestimonialView {
    Skeleton(usize),
    Cards(Vec<Testimonial>),
}

// an empty answer from the cms looks the same as one still loading
fn testimonial_view(loaded: Option<&Vec<Testimonial>>) -> TestimonialView {
    match loaded {
        Some(list) if !list.is_empty() => TestimonialView::Cards(list.clone()),
        _ => TestimonialView::Skeleton(SKELETON_CARDS),
    }
}

#[component]
fn TestimonialSkeleton() -> Element {
    rsx! {
        div { class: "card",
            div { class: "skeleton", style: "height: 24px;" }
            div { class: "skeleton", style: "height: 80px;" }
            div { class: "testimonial-author",
                div { class: "skeleton", style: "width: 48px; height: 48px; border-radius: 50%;" }
                div { class: "skeleton", style: "flex: 1; height: 32px;" }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        div { class: "card",
            Rating { value: testimonial.rating }
            p { class: "testimonial-comment", "“{testimonial.comment}”" }
            div { class: "testimonial-author",
                img { src: "{testimonial.avatar}", alt: "{testimonial.name}" }
                div {
                    div { class: "testimonial-name", "{testimonial.name}" }
                    div { class: "testimonial-byline", "{testimonial.byline()}" }
                }
            }
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    let testimonials = use_resource(|| async move {
        or_fallback(
            "testimonials",
            cms().testimonials().await,
            fallback::testimonials,
        )
    });

    let view = testimonial_view(Option::as_ref(&testimonials.read()));

    let cards = match view {
        TestimonialView::Skeleton(count) => rsx! {
            for i in 0..count {
                TestimonialSkeleton { key: "{i}" }
            }
        },
        TestimonialView::Cards(list) => rsx! {
            for testimonial in list.iter() {
                TestimonialCard { key: "{testimonial.id}", testimonial: testimonial.clone() }
            }
        },
    };

    rsx! {
        section { class: "section section-alt", id: "testimonials-section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Rólunk mondtátok" }
                    h2 { class: "section-title", "Visszajelzések" }
                    p { class: "section-lead", "Amit a résztvevők mondtak rólunk." }
                }
                div { class: "testimonial-grid", {cards} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_and_empty_answers_both_show_skeletons() {
        assert_eq!(testimonial_view(None), TestimonialView::Skeleton(SKELETON_CARDS));
        assert_eq!(testimonial_view(Some(&Vec::new())), TestimonialView::Skeleton(SKELETON_CARDS));
    }

    #[test]
    fn loaded_testimonials_render_as_cards_in_order() {
        let list = fallback::testimonials();
        assert!(!list.is_empty());

        assert_eq!(testimonial_view(Some(&list)), TestimonialView::Cards(list.clone()));
    }
}
