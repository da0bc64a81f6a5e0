//! Admin Shell - sidebar behaviour for the admin dashboard
//!
//! The sidebar collapses when the user clicks the menu button, and follows
//! the viewport when the window is resized:
//! - width <= 768px: sidebar and body get the `active` class (collapsed)
//! - width > 768px: the class is removed (expanded)
//!
//! ## Example
//! ```rust
//! use admin_shell::prelude::*;
//!
//! let host = MemoryHost::admin_page(1024);
//! let attachment = attach(&host, &SidebarConfig::default(), None).unwrap();
//!
//! host.click("sidebarCollapse");
//! assert_eq!(attachment.controller().is_active(), Some(true));
//!
//! host.resize(1280);
//! assert_eq!(attachment.controller().is_active(), Some(false));
//!
//! attachment.detach();
//! ```

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod types;

// Re-export common types
pub mod prelude {
    pub use crate::config::{SidebarConfig, DEFAULT_BREAKPOINT};
    pub use crate::controller::{attach, Observer, SidebarAttachment, ViewportSidebarController};
    pub use crate::dom::memory::{MemoryElement, MemoryHost};
    #[cfg(target_arch = "wasm32")]
    pub use crate::dom::web::{WebElement, WebHost};
    pub use crate::dom::{ClassList, Host};
    pub use crate::error::{ShellError, ShellResult};
    pub use crate::types::{Layout, SidebarEvent};
}
