use dioxus::prelude::*;
use admin_shell::prelude::*;

/// Attach the sidebar controller to the page once the layout is mounted and
/// detach it on unmount.
///
/// Returns the last event the controller reported, for display.
pub fn use_sidebar_controller() -> Signal<Option<SidebarEvent>> {
    let last_event = use_signal(|| None::<SidebarEvent>);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let slot = use_hook(|| Rc::new(RefCell::new(None::<SidebarAttachment<WebHost>>)));

        let mount_slot = slot.clone();
        use_effect(move || {
            if mount_slot.borrow().is_some() {
                return;
            }
            let observer: Observer = Rc::new(move |event: &SidebarEvent| {
                let mut last_event = last_event;
                last_event.set(Some(event.clone()));
            });
            let mounted = WebHost::new()
                .and_then(|host| mount_sidebar(&host, host.page_config(), observer));
            match mounted {
                Ok(attachment) => *mount_slot.borrow_mut() = Some(attachment),
                Err(e) => tracing::error!("Sidebar controller not attached: {}", e),
            }
        });

        use_drop(move || {
            if let Some(attachment) = slot.borrow_mut().take() {
                attachment.detach();
            }
        });
    }

    // Only the browser DOM backs the shell; say so instead of rendering a dead button.
    #[cfg(not(target_arch = "wasm32"))]
    use_hook(|| {
        tracing::warn!("Sidebar controller needs a browser DOM; menu button and resize are inert");
    });

    last_event
}

/// Attach to `host`, falling back to the default config when the page's is unusable.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn mount_sidebar<H: Host>(
    host: &H,
    page_config: ShellResult<SidebarConfig>,
    observer: Observer,
) -> ShellResult<SidebarAttachment<H>> {
    let config = page_config.unwrap_or_else(|e| {
        tracing::warn!("{}; using default sidebar config", e);
        SidebarConfig::default()
    });
    attach(host, &config, Some(observer))
}
