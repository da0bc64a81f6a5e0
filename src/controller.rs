//! Sidebar controller
//!
//! Keeps the `active` class of the sidebar and the content body in step:
//! - a click on the toggle button flips it on both,
//! - a resize to a width at or below the breakpoint adds it to both,
//! - a resize above the breakpoint removes it from both.
//!
//! [`attach`] wires these three listeners to a [`Host`] and hands back a
//! [`SidebarAttachment`] that removes them again.

use std::rc::Rc;

use crate::config::SidebarConfig;
use crate::dom::{ClassList, Host};
use crate::error::ShellResult;
use crate::types::{Layout, SidebarEvent};

/// Receives a [`SidebarEvent`] after every handler run
pub type Observer = Rc<dyn Fn(&SidebarEvent)>;

pub struct ViewportSidebarController<E> {
    sidebar: Option<E>,
    body: Option<E>,
    active_class: String,
    breakpoint: u32,
    observer: Option<Observer>,
}

impl<E: ClassList> ViewportSidebarController<E> {
    /// Missing elements are allowed; every operation skips them.
    pub fn new(
        sidebar: Option<E>,
        body: Option<E>,
        config: &SidebarConfig,
        observer: Option<Observer>,
    ) -> Self {
        Self {
            sidebar,
            body,
            active_class: config.active_class.clone(),
            breakpoint: config.breakpoint,
            observer,
        }
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Whether the sidebar currently carries the active class
    pub fn is_active(&self) -> Option<bool> {
        self.sidebar
            .as_ref()
            .map(|sidebar| sidebar.contains(&self.active_class))
    }

    /// Flip the active class on sidebar and body independently.
    pub fn toggle(&self) {
        let sidebar = self.sidebar.as_ref().map(|el| el.toggle(&self.active_class));
        let body = self.body.as_ref().map(|el| el.toggle(&self.active_class));

        let active = sidebar.or(body).unwrap_or(false);
        tracing::debug!(active, "sidebar toggled");
        self.notify(SidebarEvent::Toggled { active });
    }

    /// Force the active class onto both elements (narrow layout).
    pub fn collapse(&self, width: u32) {
        self.for_each(|el| el.add(&self.active_class));
        self.applied(width, Layout::Narrow);
    }

    /// Strip the active class from both elements (wide layout).
    pub fn expand(&self, width: u32) {
        self.for_each(|el| el.remove(&self.active_class));
        self.applied(width, Layout::Wide);
    }

    /// Apply whichever of [`collapse`](Self::collapse) / [`expand`](Self::expand)
    /// the width calls for.
    pub fn apply_width(&self, width: u32) -> Layout {
        let layout = Layout::for_width(width, self.breakpoint);
        match layout {
            Layout::Narrow => self.collapse(width),
            Layout::Wide => self.expand(width),
        }
        layout
    }

    fn for_each(&self, f: impl Fn(&E)) {
        self.sidebar.iter().chain(self.body.iter()).for_each(f);
    }

    fn applied(&self, width: u32, layout: Layout) {
        tracing::trace!(width, ?layout, "sidebar layout applied");
        self.notify(SidebarEvent::LayoutApplied { width, layout });
    }

    fn notify(&self, event: SidebarEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }
}

/// Listeners registered by [`attach`]. Detaches them on [`detach`](Self::detach) or drop.
pub struct SidebarAttachment<H: Host> {
    host: H,
    controller: Rc<ViewportSidebarController<H::Element>>,
    listeners: Vec<H::Listener>,
}

impl<H: Host> SidebarAttachment<H> {
    pub fn controller(&self) -> &ViewportSidebarController<H::Element> {
        &self.controller
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let count = self.listeners.len();
        for listener in self.listeners.drain(..) {
            self.host.detach(listener);
        }
        tracing::info!("sidebar controller detached ({} listeners)", count);
    }
}

impl<H: Host> Drop for SidebarAttachment<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Look up the sidebar, body and toggle button and register the click and
/// resize listeners on `host`.
///
/// Absent elements are not an error: without a toggle button no click
/// listener is registered, and operations skip a missing sidebar or body.
pub fn attach<H: Host>(
    host: &H,
    config: &SidebarConfig,
    observer: Option<Observer>,
) -> ShellResult<SidebarAttachment<H>> {
    config.validate()?;

    let lookup = |id: &str| {
        let element = host.element_by_id(id);
        if element.is_none() {
            tracing::warn!("#{} not found, sidebar controller will skip it", id);
        }
        element
    };
    let sidebar = lookup(&config.sidebar_id);
    let body = lookup(&config.body_id);
    let toggle = lookup(&config.toggle_id);

    let controller = Rc::new(ViewportSidebarController::new(sidebar, body, config, observer));
    // Built before registering so a failed registration drops the earlier listeners.
    let mut attachment = SidebarAttachment {
        host: host.clone(),
        controller: controller.clone(),
        listeners: Vec::with_capacity(3),
    };

    if let Some(button) = &toggle {
        let c = controller.clone();
        attachment
            .listeners
            .push(host.on_click(button, Box::new(move || c.toggle()))?);
    }

    let c = controller.clone();
    attachment.listeners.push(host.on_resize(Box::new(move |width| {
        if Layout::for_width(width, c.breakpoint()) == Layout::Narrow {
            c.collapse(width);
        }
    }))?);

    let c = controller.clone();
    attachment.listeners.push(host.on_resize(Box::new(move |width| {
        if Layout::for_width(width, c.breakpoint()) == Layout::Wide {
            c.expand(width);
        }
    }))?);

    if config.sync_on_attach {
        controller.apply_width(host.viewport_width());
    }

    tracing::info!(
        "sidebar controller attached ({} listeners, breakpoint {}px)",
        attachment.listener_count(),
        config.breakpoint
    );
    Ok(attachment)
}
