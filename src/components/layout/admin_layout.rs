use dioxus::prelude::*;
use crate::hooks::use_sidebar_controller;

#[component]
pub fn AdminLayout() -> Element {
    let last_event = use_sidebar_controller();

    rsx! {
        div {
            class: "wrapper",
            crate::components::layout::Sidebar {}
            div {
                id: "body",
                class: "body",
                crate::components::layout::TopBar { last_event: last_event }
                crate::components::layout::ContentArea {}
            }
        }
    }
}
