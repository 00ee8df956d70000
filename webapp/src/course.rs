use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::content::Course;

use crate::{Route, sections::courses::use_courses, techniques::TechniqueList};

#[component]
fn CourseBody(course: Course) -> Element {
    rsx! {
        div { class: "card",
            div { class: "testimonial-author", style: "justify-content: space-between;",
                h1 { class: "section-title", "{course.title}" }
                span { class: "course-price", "{course.price}" }
            }
            ul { class: "course-bullets",
                for (i , item) in course.bullet_items().into_iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
            if let Some(url) = course.registration_url.clone() {
                a {
                    class: "btn btn-primary",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Foglalás most"
                }
            }
        }
    }
}

#[component]
pub fn CourseDetail(course_id: String) -> Element {
    let courses = use_courses();

    let body = match &*courses.read() {
        Some(courses) => match courses.iter().find(|c| c.id == course_id) {
            Some(course) => rsx! {
                CourseBody { course: course.clone() }
            },
            None => rsx! {
                div { class: "card",
                    h1 { class: "course-title", "A kurzus nem található" }
                    p { class: "section-lead", "Lehet, hogy a kurzus már lezárult, vagy a hivatkozás hibás." }
                }
            },
        },
        None => rsx! {
            div { class: "card",
                div { class: "skeleton", style: "height: 48px;" }
                div { class: "skeleton", style: "height: 120px;" }
            }
        },
    };

    rsx! {
        section { class: "section course-detail",
            div { class: "container technique-list",
                Link {
                    to: Route::Home { technika: String::new() },
                    "← Vissza a kurzusokhoz"
                }
                {body}
                h2 { class: "section-title", "Technikák" }
                TechniqueList {}
            }
        }
    }
}
