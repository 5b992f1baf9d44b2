//! Asynchronous dataset loading for the data-driven pages.

use crate::routes::ViewContext;
use crate::shared::data::{DataError, DataService};
use crate::shared::markup;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared flag telling a pending load whether its view is still mounted.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

/// Shows the loading state, then runs `load` on the spawner.
///
/// A result arriving after `liveness` was revoked is dropped. An error
/// replaces the page with the error panel; success hands the dataset to
/// `on_loaded`.
pub fn load_then_render<T, F, Fut>(
    ctx: &ViewContext,
    liveness: &Liveness,
    title: &'static str,
    load: F,
    on_loaded: impl FnOnce(T) + 'static,
) where
    T: 'static,
    F: FnOnce(Rc<DataService>) -> Fut,
    Fut: Future<Output = Result<T, DataError>> + 'static,
{
    ctx.outlet.set_html(&markup::loading(title));

    let pending = load(ctx.data.clone());
    let alive = liveness.clone();
    let outlet = ctx.outlet.clone();

    ctx.spawner.spawn(Box::pin(async move {
        let result = pending.await;
        if !alive.is_alive() {
            log::debug!("{}: page left before its data arrived, dropping result", title);
            return;
        }
        match result {
            Ok(dataset) => on_loaded(dataset),
            Err(err) => {
                log::error!("{}: {}", title, err);
                outlet.set_html(&markup::error_panel(title, &err.to_string()));
            }
        }
    }));
}
