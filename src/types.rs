use serde::{Deserialize, Serialize};

/// Page layout implied by the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Narrow, // width <= breakpoint, sidebar forced collapsed
    Wide,   // width > breakpoint, sidebar forced expanded
}

impl Layout {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Layout::Narrow
        } else {
            Layout::Wide
        }
    }
}

/// What a sidebar handler just did, reported to the observer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SidebarEvent {
    Toggled { active: bool },
    LayoutApplied { width: u32, layout: Layout },
}
