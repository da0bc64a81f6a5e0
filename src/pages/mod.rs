use dioxus::prelude::*;
use crate::components::layout::AdminLayout;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AdminLayout {}
    }
}
