use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{footer::Footer, header::Header},
};

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Header {}
        main { Outlet::<Route> {} }
        Footer {}
    }
}
