use crate::app::AppServices;
use crate::routes::RouteOutcome;
use leptos::prelude::*;
use std::rc::Rc;

/// App-wide chrome state shared through context.
///
/// The router and the other services are not `Send`, so they sit in a local
/// `StoredValue`; the handle itself stays `Copy`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    services: StoredValue<Rc<AppServices>, LocalStorage>,
    /// Mobile navigation drawer.
    pub sidebar_open: RwSignal<bool>,
    pub active_route: RwSignal<String>,
    pub breadcrumb: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new(services: Rc<AppServices>) -> Self {
        Self {
            services: StoredValue::new_local(services),
            sidebar_open: RwSignal::new(false),
            active_route: RwSignal::new(String::new()),
            breadcrumb: RwSignal::new(String::new()),
        }
    }

    pub fn services(&self) -> Rc<AppServices> {
        self.services.get_value()
    }

    /// Writes the hash for `path`; the hash-change listener mounts the view.
    pub fn navigate(&self, path: &str) {
        self.services().router.navigate(path);
        self.close_sidebar();
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }

    /// Hash-change entry point.
    pub fn sync_route(&self) -> RouteOutcome {
        let services = self.services();
        let outcome = services.router.handle_route();
        self.publish_route(&services);
        outcome
    }

    /// Mounts the first view and, when configured, warms the dataset cache.
    pub fn start(&self) {
        let services = self.services();
        services.router.start();
        self.publish_route(&services);

        if services.config.data.preload {
            let data = services.data.clone();
            leptos::task::spawn_local(async move {
                data.preload_all().await;
            });
        }
    }

    fn publish_route(&self, services: &AppServices) {
        if let Some(path) = services.router.current_path() {
            if self.active_route.get_untracked() != path {
                self.active_route.set(path);
            }
        }
    }
}
