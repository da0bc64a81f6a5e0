use dioxus::prelude::*;
use admin_shell::prelude::{Layout, SidebarEvent};

fn describe(event: &SidebarEvent) -> String {
    match event {
        SidebarEvent::Toggled { active: true } => "Sidebar collapsed".to_string(),
        SidebarEvent::Toggled { active: false } => "Sidebar expanded".to_string(),
        SidebarEvent::LayoutApplied { width, layout: Layout::Narrow } => {
            format!("Narrow viewport ({width}px)")
        }
        SidebarEvent::LayoutApplied { width, layout: Layout::Wide } => {
            format!("Wide viewport ({width}px)")
        }
    }
}

#[component]
pub fn TopBar(last_event: Signal<Option<SidebarEvent>>) -> Element {
    let status = last_event.read().as_ref().map(describe).unwrap_or_default();

    rsx! {
        nav { class: "navbar",
            // The sidebar controller listens for clicks on this id
            button {
                id: "sidebarCollapse",
                r#type: "button",
                class: "btn-collapse",
                title: "Toggle navigation",
                "☰"
            }
            span { class: "navbar-status", "{status}" }
        }
    }
}
