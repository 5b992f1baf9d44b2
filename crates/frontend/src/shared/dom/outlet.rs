use super::{ChangeHandler, ClickHandler, Outlet};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlSelectElement};

type Listener = Closure<dyn FnMut(Event)>;

/// Renders into the element with id `container_id` through `innerHTML`.
pub struct BrowserOutlet {
    container_id: String,
    listeners: RefCell<Vec<Listener>>,
    // Listeners of the previous content. The handler that triggered a
    // re-render is still running when its content is replaced, so it can only
    // be dropped on the render after that.
    retired: RefCell<Vec<Listener>>,
}

impl BrowserOutlet {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            listeners: RefCell::new(Vec::new()),
            retired: RefCell::new(Vec::new()),
        }
    }

    fn container(&self) -> Option<Element> {
        window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(&self.container_id))
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id));
        if element.is_none() {
            log::warn!("element #{} not found, handler not bound", id);
        }
        element
    }

    fn retire_listeners(&self) {
        let current = self.listeners.take();
        let previous = self.retired.replace(current);
        drop(previous);
    }

    fn listen(&self, element: &Element, event: &str, listener: Listener) {
        match element.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.borrow_mut().push(listener),
            Err(err) => log::warn!("could not bind {} handler: {:?}", event, err),
        }
    }
}

impl Outlet for BrowserOutlet {
    fn set_html(&self, html: &str) {
        self.retire_listeners();
        match self.container() {
            Some(container) => container.set_inner_html(html),
            None => log::error!("outlet #{} is missing from the page", self.container_id),
        }
    }

    fn clear(&self) {
        self.set_html("");
    }

    fn on_change(&self, element_id: &str, handler: ChangeHandler) {
        let Some(element) = self.element(element_id) else {
            return;
        };
        let listener = Closure::wrap(Box::new(move |event: Event| {
            let value = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value());
            if let Some(value) = value {
                handler(value);
            }
        }) as Box<dyn FnMut(Event)>);
        self.listen(&element, "change", listener);
    }

    fn on_click(&self, element_id: &str, handler: ClickHandler) {
        let Some(element) = self.element(element_id) else {
            return;
        };
        let listener = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        self.listen(&element, "click", listener);
    }
}
