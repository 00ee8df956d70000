use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::{content::Course, fallback};

use crate::{
    Route,
    common::{cms, or_fallback},
};

pub fn use_courses() -> Resource<Vec<Course>> {
    use_resource(|| async move { or_fallback("courses", cms().courses().await, fallback::courses) })
}

#[component]
fn CourseSkeleton() -> Element {
    rsx! {
        div { class: "card",
            div { class: "skeleton", style: "height: 48px;" }
            div { class: "skeleton", style: "height: 80px;" }
            div { class: "skeleton", style: "height: 40px;" }
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    rsx! {
        div { class: "card",
            div { class: "testimonial-author", style: "justify-content: space-between;",
                h3 { class: "course-title", "{course.title}" }
                span { class: "course-price", "{course.price}" }
            }
            ul { class: "course-bullets",
                for (i , item) in course.bullet_items().into_iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
            Link {
                class: "btn btn-primary",
                to: Route::CourseDetail {
                    course_id: course.id.clone(),
                },
                "Jelentkezem"
            }
        }
    }
}

#[component]
pub fn Courses() -> Element {
    let courses = use_courses();

    let cards = match &*courses.read() {
        Some(courses) => rsx! {
            for course in courses.iter() {
                CourseCard { key: "{course.id}", course: course.clone() }
            }
        },
        None => rsx! {
            for i in 0..3 {
                CourseSkeleton { key: "{i}" }
            }
        },
    };

    rsx! {
        section { class: "section", id: "courses-section",
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Kurzusok" }
                    h2 { class: "section-title", "Kézműves kurzusok" }
                    p { class: "section-lead",
                        "Ha szeretnél új kézműves technikákat tanulni, látogass el a workshopomra!"
                    }
                }
                div { class: "course-grid", {cards} }
            }
        }
    }
}
