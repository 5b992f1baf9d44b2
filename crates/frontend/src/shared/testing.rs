//! In-memory stand-ins for the browser boundaries.

use crate::routes::ViewContext;
use crate::shared::charts::{ChartError, ChartFactory, ChartHandle};
use crate::shared::config::DataConfig;
use crate::shared::data::{DataService, Fetch, FetchResponse};
use crate::shared::dom::{ChangeHandler, ClickHandler, HashLocation, KeyValueStorage, Outlet};
use crate::shared::state::Store;
use crate::shared::tasks::Spawn;
use async_trait::async_trait;
use contracts::shared::charts::{ChartConfig, ChartKind};
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub use futures::executor::block_on;

pub const COHORT_FIXTURE: &str = include_str!("../../assets/data/sample-cohort.json");
pub const RFM_FIXTURE: &str = include_str!("../../assets/data/sample-rfm.json");
pub const DESCRIPTIVE_FIXTURE: &str = include_str!("../../assets/data/sample-descriptive.json");

#[derive(Clone, Default)]
pub struct FakeLocation {
    hash: Rc<RefCell<String>>,
    writes: Rc<Cell<usize>>,
}

impl FakeLocation {
    pub fn at(hash: &str) -> Self {
        let location = Self::default();
        *location.hash.borrow_mut() = hash.to_string();
        location
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl HashLocation for FakeLocation {
    fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn set_hash(&self, hash: &str) {
        self.writes.set(self.writes.get() + 1);
        let hash = if hash.starts_with('#') {
            hash.to_string()
        } else {
            format!("#{}", hash)
        };
        *self.hash.borrow_mut() = hash;
    }
}

#[derive(Default)]
pub struct FakeOutlet {
    html: RefCell<String>,
    renders: Cell<usize>,
    clears: Cell<usize>,
    change_handlers: RefCell<HashMap<String, Rc<dyn Fn(String)>>>,
    click_handlers: RefCell<HashMap<String, Rc<dyn Fn()>>>,
}

impl FakeOutlet {
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    pub fn renders(&self) -> usize {
        self.renders.get()
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn has_handler(&self, element_id: &str) -> bool {
        self.change_handlers.borrow().contains_key(element_id)
            || self.click_handlers.borrow().contains_key(element_id)
    }

    pub fn change(&self, element_id: &str, value: &str) {
        let handler = self.change_handlers.borrow().get(element_id).cloned();
        match handler {
            Some(handler) => handler(value.to_string()),
            None => panic!("no change handler bound to #{}", element_id),
        }
    }

    pub fn click(&self, element_id: &str) {
        let handler = self.click_handlers.borrow().get(element_id).cloned();
        match handler {
            Some(handler) => handler(),
            None => panic!("no click handler bound to #{}", element_id),
        }
    }

    fn drop_handlers(&self) {
        self.change_handlers.borrow_mut().clear();
        self.click_handlers.borrow_mut().clear();
    }
}

impl Outlet for FakeOutlet {
    fn set_html(&self, html: &str) {
        self.drop_handlers();
        self.renders.set(self.renders.get() + 1);
        *self.html.borrow_mut() = html.to_string();
    }

    fn clear(&self) {
        self.drop_handlers();
        self.clears.set(self.clears.get() + 1);
        self.html.borrow_mut().clear();
    }

    fn on_change(&self, element_id: &str, handler: ChangeHandler) {
        self.change_handlers
            .borrow_mut()
            .insert(element_id.to_string(), Rc::from(handler));
    }

    fn on_click(&self, element_id: &str, handler: ClickHandler) {
        self.click_handlers
            .borrow_mut()
            .insert(element_id.to_string(), Rc::from(handler));
    }
}

#[derive(Default)]
pub struct FakeCharts {
    created: RefCell<Vec<(String, ChartConfig)>>,
    destroyed: Rc<Cell<usize>>,
    failing: RefCell<HashSet<String>>,
}

impl FakeCharts {
    pub fn fail_on(&self, canvas_id: &str) {
        self.failing.borrow_mut().insert(canvas_id.to_string());
    }

    pub fn created(&self) -> usize {
        self.created.borrow().len()
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.get()
    }

    pub fn live(&self) -> usize {
        self.created() - self.destroyed()
    }

    pub fn created_ids(&self) -> Vec<String> {
        self.created.borrow().iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn kinds(&self) -> Vec<ChartKind> {
        self.created.borrow().iter().map(|(_, config)| config.kind).collect()
    }

    /// Config of the most recent chart created on `canvas_id`.
    pub fn config(&self, canvas_id: &str) -> Option<ChartConfig> {
        self.created
            .borrow()
            .iter()
            .rev()
            .find(|(id, _)| id == canvas_id)
            .map(|(_, config)| config.clone())
    }
}

impl ChartFactory for FakeCharts {
    fn create(
        &self,
        canvas_id: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, ChartError> {
        if self.failing.borrow().contains(canvas_id) {
            return Err(ChartError::MissingCanvas(canvas_id.to_string()));
        }
        self.created
            .borrow_mut()
            .push((canvas_id.to_string(), config.clone()));
        Ok(Box::new(FakeChart {
            destroyed: self.destroyed.clone(),
            alive: true,
        }))
    }
}

struct FakeChart {
    destroyed: Rc<Cell<usize>>,
    alive: bool,
}

impl ChartHandle for FakeChart {
    fn destroy(&mut self) {
        if self.alive {
            self.alive = false;
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }
}

/// Serves canned responses; any other URL fails like an unreachable host.
#[derive(Default)]
pub struct FakeFetch {
    responses: RefCell<HashMap<String, (u16, String)>>,
    calls: RefCell<HashMap<String, usize>>,
}

impl FakeFetch {
    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), (status, body.to_string()));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.borrow().get(url).copied().unwrap_or(0)
    }
}

#[async_trait(?Send)]
impl Fetch for FakeFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, String> {
        *self.calls.borrow_mut().entry(url.to_string()).or_insert(0) += 1;
        let response = self.responses.borrow().get(url).cloned();
        match response {
            Some((status, body)) => Ok(FetchResponse { status, body }),
            None => Err(format!("connection refused: {}", url)),
        }
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

pub struct PoolSpawner(LocalSpawner);

impl Spawn for PoolSpawner {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        if let Err(err) = self.0.spawn_local(future) {
            panic!("test pool rejected task: {:?}", err);
        }
    }
}

/// A [`ViewContext`] wired to fakes, with the task pool that drives it.
pub struct Harness {
    pool: RefCell<LocalPool>,
    pub outlet: Rc<FakeOutlet>,
    pub charts: Rc<FakeCharts>,
    pub fetch: Rc<FakeFetch>,
    pub store: Store,
    pub ctx: ViewContext,
}

impl Harness {
    /// No dataset reachable.
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = Rc::new(PoolSpawner(pool.spawner()));
        let outlet = Rc::new(FakeOutlet::default());
        let charts = Rc::new(FakeCharts::default());
        let fetch = Rc::new(FakeFetch::default());
        let store = Store::new();
        let data = Rc::new(DataService::new(fetch.clone(), DataConfig::default()));

        let ctx = ViewContext {
            outlet: outlet.clone(),
            charts: charts.clone(),
            data,
            store: store.clone(),
            spawner,
        };

        Self {
            pool: RefCell::new(pool),
            outlet,
            charts,
            fetch,
            store,
            ctx,
        }
    }

    /// The bundled sample datasets served at their configured URLs.
    pub fn with_fixtures() -> Self {
        let harness = Self::new();
        harness.serve("assets/data/sample-cohort.json", COHORT_FIXTURE);
        harness.serve("assets/data/sample-rfm.json", RFM_FIXTURE);
        harness.serve("assets/data/sample-descriptive.json", DESCRIPTIVE_FIXTURE);
        harness
    }

    pub fn serve(&self, url: &str, body: &str) {
        self.fetch.respond(url, 200, body);
    }

    /// Runs spawned loads until none can make progress.
    pub fn run(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}
