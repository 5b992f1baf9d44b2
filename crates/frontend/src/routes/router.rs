use super::registry::default_registry;
use super::table::breadcrumb_label;
use super::view::{View, ViewContext, ViewFactory};
use crate::shared::dom::HashLocation;
use serde_json::Value;
use std::cell::RefCell;
use thiserror::Error;

pub const HOME: &str = "/";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("route not found: {0}")]
    NotFound(String),
}

/// What [`Router::handle_route`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The hash names the active route already.
    Unchanged,
    /// A new view was mounted for this path.
    Activated(String),
    /// The path is unknown; navigation to `/` was requested.
    Redirected,
}

#[derive(Default)]
struct RouterState {
    current_path: Option<String>,
    active: Option<Box<dyn View>>,
}

/// Maps the location hash to a view and owns the single live view.
pub struct Router<L: HashLocation> {
    location: L,
    context: ViewContext,
    routes: Vec<(String, ViewFactory)>,
    default_route: String,
    state: RefCell<RouterState>,
}

impl<L: HashLocation> Router<L> {
    pub fn new(location: L, context: ViewContext) -> Self {
        Self::with_routes(location, context, default_registry())
    }

    pub fn with_routes(
        location: L,
        context: ViewContext,
        routes: Vec<(String, ViewFactory)>,
    ) -> Self {
        Self {
            location,
            context,
            routes,
            default_route: HOME.to_string(),
            state: RefCell::new(RouterState::default()),
        }
    }

    /// Route written to an empty hash by [`Router::start`].
    pub fn with_default_route(mut self, route: impl Into<String>) -> Self {
        self.default_route = route.into();
        self
    }

    /// Requests a route by writing the hash. The view changes when the
    /// hash-change signal calls [`Router::handle_route`].
    pub fn navigate(&self, path: &str) {
        let path = path.trim_start_matches('#');
        log::debug!("navigate to {}", path);
        self.location.set_hash(path);
    }

    /// Boot: fills an empty hash, then mounts the route it names. Writing a
    /// hash equal to the current one fires no hash-change, so the route is
    /// handled directly here.
    pub fn start(&self) -> RouteOutcome {
        let hash = self.location.hash();
        if hash.trim_start_matches('#').is_empty() {
            self.location.set_hash(&self.default_route);
        }
        self.handle_route()
    }

    pub fn current_path(&self) -> Option<String> {
        self.state.borrow().current_path.clone()
    }

    /// Hash-change handler.
    pub fn handle_route(&self) -> RouteOutcome {
        let path = self.path_from_hash();

        if self.state.borrow().current_path.as_deref() == Some(path.as_str()) {
            return RouteOutcome::Unchanged;
        }

        let factory = match self.resolve(&path) {
            Ok(factory) => factory,
            Err(err) => {
                log::warn!("{}; redirecting to {}", err, HOME);
                self.navigate(HOME);
                return RouteOutcome::Redirected;
            }
        };

        // Take the old view out first so no borrow is held while views run.
        let previous = self.state.borrow_mut().active.take();
        if let Some(mut view) = previous {
            view.destroy();
        }
        self.context.outlet.clear();

        let mut view = factory(&self.context);
        self.state.borrow_mut().current_path = Some(path.clone());
        view.render();
        self.state.borrow_mut().active = Some(view);

        self.context
            .store
            .update("ui.breadcrumb", Value::from(breadcrumb_label(&path)));
        log::debug!("route {} active", path);

        RouteOutcome::Activated(path)
    }

    fn path_from_hash(&self) -> String {
        let hash = self.location.hash();
        let path = hash.trim_start_matches('#');
        if path.is_empty() {
            HOME.to_string()
        } else {
            path.to_string()
        }
    }

    fn resolve(&self, path: &str) -> Result<ViewFactory, RouteError> {
        self.routes
            .iter()
            .find(|(route, _)| route == path)
            .map(|(_, factory)| factory.clone())
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }
}
