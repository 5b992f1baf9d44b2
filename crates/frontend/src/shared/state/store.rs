//! Observable application state.
//!
//! A single JSON tree addressed by dot paths (`filters.cohortPeriod`). Every
//! mutation notifies all listeners synchronously, in subscription order, with
//! a snapshot of the whole tree.

use contracts::shared::filters::FilterState;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Failure reported by a listener. Logged; the remaining listeners still run.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct ListenerError(pub String);

pub type Listener = Rc<dyn Fn(&Value) -> Result<(), ListenerError>>;

struct StoreInner {
    data: RefCell<Rc<Value>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

/// Handle returned by [`Store::subscribe`].
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Removes exactly this listener. No-op when the store is gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

fn initial_state() -> Value {
    json!({
        "filters": filters_value(&FilterState::default()),
        "cache": {},
        "user": { "theme": "light" },
        "ui": { "breadcrumb": "Dashboard" },
    })
}

fn filters_value(filters: &FilterState) -> Value {
    serde_json::to_value(filters).unwrap_or(Value::Null)
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(initial_state())
    }

    pub fn with_state(state: Value) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                data: RefCell::new(Rc::new(state)),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the whole tree. Later mutations do not affect it.
    pub fn state(&self) -> Rc<Value> {
        self.inner.data.borrow().clone()
    }

    /// Value at a dot path, `None` when any segment is missing.
    pub fn get(&self, path: &str) -> Option<Value> {
        lookup(&self.state(), path).cloned()
    }

    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let value = self.get(path)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                log::warn!("state at '{}' has an unexpected shape: {}", path, err);
                None
            }
        }
    }

    /// Sets the value at a dot path, creating missing intermediate objects and
    /// replacing intermediates that are not objects, then notifies.
    pub fn update(&self, path: &str, value: Value) {
        {
            let mut data = self.inner.data.borrow_mut();
            set_path(Rc::make_mut(&mut *data), path, value);
        }
        self.notify();
    }

    /// Replaces the whole tree, then notifies.
    pub fn set_state(&self, state: Value) {
        *self.inner.data.borrow_mut() = Rc::new(state);
        self.notify();
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&Value) -> Result<(), ListenerError> + 'static,
    ) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Restores the default filters, then notifies.
    pub fn reset_filters(&self) {
        self.update("filters", filters_value(&FilterState::default()));
    }

    /// Typed view of the `filters` branch; defaults for anything unreadable.
    pub fn filters(&self) -> FilterState {
        self.get_as("filters").unwrap_or_default()
    }

    fn notify(&self) {
        let snapshot = self.state();
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            if let Err(err) = listener(&snapshot) {
                log::error!("state listener failed: {}", err);
            }
        }
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |current, segment| current.get(segment))
}

fn ensure_object(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}

fn set_path(root: &mut Value, path: &str, value: Value) -> Option<()> {
    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };

    let mut current = root;
    for segment in parents.into_iter().flat_map(|parents| parents.split('.')) {
        current = ensure_object(current)?
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(current)?.insert(leaf.to_string(), value);
    Some(())
}
