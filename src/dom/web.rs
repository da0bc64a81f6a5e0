//! Browser DOM host backed by `web_sys`

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

use super::{ClassList, ClickHandler, Host, ResizeHandler};
use crate::config::SidebarConfig;
use crate::error::{ShellError, ShellResult};

/// Global the page may set to override [`SidebarConfig`] defaults.
const PAGE_CONFIG_KEY: &str = "adminShellConfig";

#[derive(Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> ShellResult<Self> {
        let window = web_sys::window().ok_or(ShellError::NoWindow)?;
        let document = window.document().ok_or(ShellError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Read `window.adminShellConfig`, falling back to defaults when it is unset.
    pub fn page_config(&self) -> ShellResult<SidebarConfig> {
        let value = js_sys::Reflect::get(&self.window, &JsValue::from_str(PAGE_CONFIG_KEY))
            .map_err(|e| ShellError::JsConfig(format!("{:?}", e)))?;
        if value.is_undefined() || value.is_null() {
            return Ok(SidebarConfig::default());
        }

        let config: SidebarConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ShellError::JsConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn listen(
        &self,
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> ShellResult<WebListener> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| {
                tracing::warn!("addEventListener({}) rejected: {:?}", event, e);
                ShellError::Listener(event.to_string())
            })?;
        Ok(WebListener { target, event, callback })
    }
}

#[derive(Clone)]
pub struct WebElement(Element);

impl ClassList for WebElement {
    fn add(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            tracing::warn!("classList.add({}) on #{} failed: {:?}", class, self.0.id(), e);
        }
    }

    fn remove(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            tracing::warn!("classList.remove({}) on #{} failed: {:?}", class, self.0.id(), e);
        }
    }

    fn toggle(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(active) => active,
            Err(e) => {
                tracing::warn!("classList.toggle({}) on #{} failed: {:?}", class, self.0.id(), e);
                self.contains(class)
            }
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// Registered listener. Owns its closure so removing it also frees the closure.
pub struct WebListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Host for WebHost {
    type Element = WebElement;
    type Listener = WebListener;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn viewport_width(&self) -> u32 {
        // Root clientWidth excludes the vertical scrollbar; innerWidth does not
        if let Some(root) = self.document.document_element() {
            let width = root.client_width();
            if width > 0 {
                return width as u32;
            }
        }
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(|w| w.max(0.0) as u32)
            .unwrap_or(0)
    }

    fn on_click(&self, target: &WebElement, mut handler: ClickHandler) -> ShellResult<WebListener> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
        self.listen(EventTarget::from(target.0.clone()), "click", callback)
    }

    fn on_resize(&self, mut handler: ResizeHandler) -> ShellResult<WebListener> {
        let host = self.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            handler(host.viewport_width())
        });
        self.listen(EventTarget::from(self.window.clone()), "resize", callback)
    }

    fn detach(&self, listener: WebListener) {
        let WebListener { target, event, callback } = listener;
        if let Err(e) =
            target.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("removeEventListener({}) failed: {:?}", event, e);
        }
    }
}
