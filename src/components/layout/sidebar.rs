use dioxus::prelude::*;

const MENU: [(&str, &str); 5] = [
    ("Dashboard", "#"),
    ("Users", "#users"),
    ("Workouts", "#workouts"),
    ("Reports", "#reports"),
    ("Settings", "#settings"),
];

/// Collapsed/expanded state lives in the `active` class, set by the sidebar controller.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        nav {
            id: "sidebar",
            class: "sidebar",
            div { class: "sidebar-header",
                span { class: "sidebar-brand", "Admin" }
            }
            ul { class: "sidebar-menu",
                for (label, href) in MENU {
                    li {
                        a { href: href, class: "sidebar-link", "{label}" }
                    }
                }
            }
        }
    }
}
