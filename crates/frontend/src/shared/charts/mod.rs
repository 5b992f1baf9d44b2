//! Chart objects created through the charting library.

mod chart_js;

pub use chart_js::ChartJs;

use contracts::shared::charts::ChartConfig;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("canvas #{0} not found")]
    MissingCanvas(String),
    #[error("charting library is not loaded")]
    LibraryMissing,
    #[error("invalid chart config: {0}")]
    Config(String),
    #[error("chart construction failed: {0}")]
    Js(String),
}

/// A live chart. `destroy` releases the canvas and must be safe to call twice.
pub trait ChartHandle {
    fn destroy(&mut self);
}

pub trait ChartFactory {
    fn create(&self, canvas_id: &str, config: &ChartConfig)
        -> Result<Box<dyn ChartHandle>, ChartError>;
}

/// Charts owned by one view.
pub struct ChartSet {
    factory: Rc<dyn ChartFactory>,
    handles: RefCell<Vec<Box<dyn ChartHandle>>>,
}

impl ChartSet {
    pub fn new(factory: Rc<dyn ChartFactory>) -> Self {
        Self {
            factory,
            handles: RefCell::new(Vec::new()),
        }
    }

    /// Creates a chart on `canvas_id`. A failure is logged and the chart is
    /// skipped; the rest of the view keeps rendering.
    pub fn create(&self, canvas_id: &str, config: &ChartConfig) {
        match self.factory.create(canvas_id, config) {
            Ok(handle) => self.handles.borrow_mut().push(handle),
            Err(err) => log::warn!("chart #{} skipped: {}", canvas_id, err),
        }
    }

    pub fn destroy_all(&self) {
        let handles = self.handles.take();
        for mut handle in handles {
            handle.destroy();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.borrow().is_empty()
    }
}
