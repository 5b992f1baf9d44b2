//! Hash routing: the route table, the view lifecycle and the app entry component.

pub mod registry;
pub mod router;
pub mod routes;
pub mod table;
pub mod view;

pub use router::{RouteError, RouteOutcome, Router};
pub use table::{breadcrumb_label, RouteDef, ROUTES};
pub use view::{View, ViewContext, ViewFactory};
