use dioxus::prelude::*;

#[component]
pub fn ContentArea() -> Element {
    rsx! {
        main { class: "content-area",
            header { class: "content-header",
                h2 { "Dashboard" }
            }
            div { class: "content-body",
                div { class: "card",
                    h3 { "Welcome" }
                    p { "Use the menu button to collapse the sidebar. Below 769px it collapses automatically." }
                }
            }
        }
    }
}
