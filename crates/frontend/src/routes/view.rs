use crate::shared::charts::ChartFactory;
use crate::shared::data::DataService;
use crate::shared::dom::Outlet;
use crate::shared::state::Store;
use crate::shared::tasks::Spawn;
use std::rc::Rc;

/// A page mounted by the router.
pub trait View {
    fn render(&mut self);
    /// Releases charts and subscriptions. Called before the next view renders;
    /// must tolerate being called twice.
    fn destroy(&mut self);
}

/// Everything a view may touch.
#[derive(Clone)]
pub struct ViewContext {
    pub outlet: Rc<dyn Outlet>,
    pub charts: Rc<dyn ChartFactory>,
    pub data: Rc<DataService>,
    pub store: Store,
    pub spawner: Rc<dyn Spawn>,
}

pub type ViewFactory = Rc<dyn Fn(&ViewContext) -> Box<dyn View>>;
