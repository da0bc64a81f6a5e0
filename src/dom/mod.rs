//! Host abstraction over the page document
//!
//! The sidebar controller never touches `web_sys` directly. It asks a [`Host`]
//! for elements by id, for the viewport width, and to register listeners.
//! [`web::WebHost`] backs this with the browser DOM, [`memory::MemoryHost`]
//! with an in-memory document.

use crate::error::ShellResult;

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Class membership of a single element.
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
    /// Flip membership and return whether the class is now present.
    fn toggle(&self, class: &str) -> bool;
    fn contains(&self, class: &str) -> bool;
}

pub type ClickHandler = Box<dyn FnMut()>;
/// Called with the viewport width at the time of the resize.
pub type ResizeHandler = Box<dyn FnMut(u32)>;

/// Document, window and event dispatch the controller runs against.
pub trait Host: Clone + 'static {
    type Element: ClassList + Clone + 'static;
    /// Registration token. Handing it back to [`Host::detach`] removes the listener.
    type Listener;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Viewport width in logical pixels, excluding any vertical scrollbar.
    fn viewport_width(&self) -> u32;

    fn on_click(&self, target: &Self::Element, handler: ClickHandler)
        -> ShellResult<Self::Listener>;

    fn on_resize(&self, handler: ResizeHandler) -> ShellResult<Self::Listener>;

    fn detach(&self, listener: Self::Listener);
}
