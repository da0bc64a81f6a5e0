//! In-memory document
//!
//! Elements are class sets keyed by id. Events are dispatched synchronously by
//! [`MemoryHost::click`] and [`MemoryHost::resize`], in registration order.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{ClassList, ClickHandler, Host, ResizeHandler};
use crate::error::ShellResult;

#[derive(Clone, Debug)]
pub struct MemoryElement {
    id: String,
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sorted class names currently on the element
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassList for MemoryElement {
    fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn toggle(&self, class: &str) -> bool {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_string());
            true
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryListener(u64);

/// Stored form of any listener. Receives the viewport width at dispatch time.
type Dispatch = Box<dyn FnMut(u32)>;

enum EventKind {
    Click(String),
    Resize,
}

struct Registered {
    id: u64,
    kind: EventKind,
    handler: Rc<RefCell<Dispatch>>,
}

struct MemoryState {
    elements: HashMap<String, MemoryElement>,
    width: u32,
    next_id: u64,
    listeners: Vec<Registered>,
}

#[derive(Clone)]
pub struct MemoryHost {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryHost {
    /// Empty document with the given viewport width
    pub fn new(width: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                elements: HashMap::new(),
                width,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Document holding the three elements of the admin template
    pub fn admin_page(width: u32) -> Self {
        let host = Self::new(width);
        for id in ["sidebar", "body", "sidebarCollapse"] {
            host.insert_element(id);
        }
        host
    }

    /// Add an element, or return the existing one with that id
    pub fn insert_element(&self, id: &str) -> MemoryElement {
        self.state
            .borrow_mut()
            .elements
            .entry(id.to_string())
            .or_insert_with(|| MemoryElement {
                id: id.to_string(),
                classes: Rc::default(),
            })
            .clone()
    }

    pub fn remove_element(&self, id: &str) -> Option<MemoryElement> {
        self.state.borrow_mut().elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.state.borrow().elements.get(id).cloned()
    }

    pub fn set_width(&self, width: u32) {
        self.state.borrow_mut().width = width;
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Fire a click on the element with `id`. Does nothing if no listener targets it.
    pub fn click(&self, id: &str) {
        let handlers =
            self.handlers_for(|kind| matches!(kind, EventKind::Click(target) if target == id));
        let width = self.viewport_width();
        for handler in handlers {
            (*handler.borrow_mut())(width);
        }
    }

    /// Change the viewport width and fire `resize`.
    pub fn resize(&self, width: u32) {
        self.state.borrow_mut().width = width;
        let handlers = self.handlers_for(|kind| matches!(kind, EventKind::Resize));
        for handler in handlers {
            (*handler.borrow_mut())(width);
        }
    }

    // Handlers are cloned out first so they may call back into the host.
    fn handlers_for(
        &self,
        wanted: impl Fn(&EventKind) -> bool,
    ) -> Vec<Rc<RefCell<Dispatch>>> {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|registered| wanted(&registered.kind))
            .map(|registered| registered.handler.clone())
            .collect()
    }

    fn register(&self, kind: EventKind, handler: Dispatch) -> MemoryListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push(Registered {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        MemoryListener(id)
    }
}

impl Host for MemoryHost {
    type Element = MemoryElement;
    type Listener = MemoryListener;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.element(id)
    }

    fn viewport_width(&self) -> u32 {
        self.state.borrow().width
    }

    fn on_click(
        &self,
        target: &MemoryElement,
        mut handler: ClickHandler,
    ) -> ShellResult<MemoryListener> {
        Ok(self.register(
            EventKind::Click(target.id.clone()),
            Box::new(move |_width| handler()),
        ))
    }

    fn on_resize(&self, handler: ResizeHandler) -> ShellResult<MemoryListener> {
        Ok(self.register(EventKind::Resize, handler))
    }

    fn detach(&self, listener: MemoryListener) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|registered| registered.id != listener.0);
    }
}
