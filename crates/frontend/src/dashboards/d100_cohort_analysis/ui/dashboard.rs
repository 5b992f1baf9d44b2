use super::{charts, template};
use crate::dashboards::loader::{load_then_render, Liveness};
use crate::routes::{View, ViewContext};
use crate::shared::charts::ChartSet;
use crate::shared::state::{ListenerError, Subscription};
use contracts::dashboards::d100_cohort_analysis::CohortDataset;
use contracts::enums::CohortPeriod;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Cohort retention page. Follows `filters.cohortPeriod` while mounted.
pub struct CohortAnalysisView {
    inner: Rc<Inner>,
    liveness: Liveness,
    subscription: Option<Subscription>,
}

struct Inner {
    ctx: ViewContext,
    charts: ChartSet,
    dataset: RefCell<Option<Rc<CohortDataset>>>,
    period: Cell<CohortPeriod>,
}

impl CohortAnalysisView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            inner: Rc::new(Inner {
                ctx: ctx.clone(),
                charts: ChartSet::new(ctx.charts.clone()),
                dataset: RefCell::new(None),
                period: Cell::new(ctx.store.filters().cohort_period),
            }),
            liveness: Liveness::new(),
            subscription: None,
        }
    }
}

impl View for CohortAnalysisView {
    fn render(&mut self) {
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        self.subscription = Some(self.inner.ctx.store.subscribe(move |state| {
            match weak.upgrade() {
                Some(inner) => inner.on_state_change(state),
                None => Ok(()),
            }
        }));

        let inner = self.inner.clone();
        load_then_render(
            &self.inner.ctx,
            &self.liveness,
            template::TITLE,
            |data| async move { data.load_cohort_data().await },
            move |dataset| {
                inner.dataset.replace(Some(Rc::new(dataset)));
                inner.draw();
            },
        );
    }

    fn destroy(&mut self) {
        self.liveness.revoke();
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.inner.charts.destroy_all();
    }
}

impl Inner {
    fn on_state_change(&self, state: &Value) -> Result<(), ListenerError> {
        // A tree without the key reads as the default filters.
        let raw = &state["filters"]["cohortPeriod"];
        let period = if raw.is_null() {
            CohortPeriod::default()
        } else {
            match raw.as_str().and_then(CohortPeriod::from_code) {
                Some(period) => period,
                None => return Err(ListenerError(format!("unknown cohort period {}", raw))),
            }
        };

        if period != self.period.get() {
            log::debug!("cohort period changed to {}", period.code());
            self.period.set(period);
            self.draw();
        }
        Ok(())
    }

    /// Rebuilds the page for the current period. No-op until data arrived.
    fn draw(&self) {
        let dataset = match self.dataset.borrow().clone() {
            Some(dataset) => dataset,
            None => return,
        };
        let period = self.period.get();
        let cohorts = dataset.recent(period.months());

        self.charts.destroy_all();
        self.ctx
            .outlet
            .set_html(&template::page(&dataset, cohorts, period));
        self.bind_controls();

        self.charts
            .create(template::RETENTION_CURVE_CANVAS, &charts::retention_curves(cohorts));
        self.charts
            .create(template::SIZE_CANVAS, &charts::cohort_sizes(cohorts));
        self.charts
            .create(template::REVENUE_CANVAS, &charts::cohort_revenue(cohorts));
    }

    fn bind_controls(&self) {
        let store = self.ctx.store.clone();
        self.ctx.outlet.on_change(
            template::PERIOD_SELECT_ID,
            Box::new(move |value| match CohortPeriod::from_code(&value) {
                Some(period) => store.update("filters.cohortPeriod", Value::from(period.code())),
                None => log::warn!("ignoring unknown cohort period '{}'", value),
            }),
        );

        let store = self.ctx.store.clone();
        self.ctx.outlet.on_click(
            template::RESET_BUTTON_ID,
            Box::new(move || store.reset_filters()),
        );
    }
}
