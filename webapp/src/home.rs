use dioxus::prelude::*;

use crate::{
    contact::Contact,
    gallery::Gallery,
    sections::{
        about::About, courses::Courses, cta::CallToAction, hero::Hero,
        testimonials::Testimonials,
    },
    techniques::Techniques,
};

// every section fetches its own content, so a slow or failing collection only
// affects the section that shows it
#[component]
pub fn Home(technika: String) -> Element {
    rsx! {
        Hero {}
        Courses {}
        Techniques { technika }
        About {}
        Gallery {}
        Testimonials {}
        CallToAction {}
        Contact {}
    }
}
