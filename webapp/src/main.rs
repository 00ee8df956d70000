#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
mod components;
mod contact;
mod gallery;
mod sections;
mod techniques;

mod theme;
use theme::TemplateProvider;

mod layout;
use layout::SiteLayout;

mod home;
use home::Home;

mod course;
use course::CourseDetail;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the home page carries the active technique tab as ?technika=<slug>, which is
// what makes a tab shareable
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/?:technika")]
        Home { technika: String },
        #[route("/kurzus/:course_id")]
        CourseDetail { course_id: String },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        TemplateProvider {
            Router::<Route> { config: RouterConfig::default }
        }
    }
}
