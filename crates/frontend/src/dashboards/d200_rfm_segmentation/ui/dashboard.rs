use super::scoring::{score_customers, ScoredCustomer};
use super::{charts, template};
use crate::dashboards::loader::{load_then_render, Liveness};
use crate::routes::{View, ViewContext};
use crate::shared::charts::ChartSet;
use crate::shared::state::{ListenerError, Store, Subscription};
use contracts::dashboards::d200_rfm_segmentation::RfmDataset;
use contracts::enums::Segment;
use contracts::shared::charts::Palette;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// RFM segmentation page. Highlights and filters by `filters.segment`.
pub struct RfmSegmentationView {
    inner: Rc<Inner>,
    liveness: Liveness,
    subscription: Option<Subscription>,
}

struct Inner {
    ctx: ViewContext,
    charts: ChartSet,
    dataset: RefCell<Option<Rc<RfmDataset>>>,
    selected: Cell<Segment>,
}

impl RfmSegmentationView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            inner: Rc::new(Inner {
                ctx: ctx.clone(),
                charts: ChartSet::new(ctx.charts.clone()),
                dataset: RefCell::new(None),
                selected: Cell::new(ctx.store.filters().segment),
            }),
            liveness: Liveness::new(),
            subscription: None,
        }
    }
}

impl View for RfmSegmentationView {
    fn render(&mut self) {
        let weak = Rc::downgrade(&self.inner);
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
            |data| async move { data.load_rfm_data().await },
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

/// Segment selected by a click on its card: clicking the active one clears it.
fn toggled(current: Segment, clicked: Segment) -> Segment {
    if current == clicked {
        Segment::All
    } else {
        clicked
    }
}

fn select_segment(store: &Store, segment: Segment) {
    store.update("filters.segment", Value::from(segment.code()));
}

impl Inner {
    fn on_state_change(&self, state: &Value) -> Result<(), ListenerError> {
        // A tree without the key reads as the default filters.
        let raw = &state["filters"]["segment"];
        let segment = if raw.is_null() {
            Segment::All
        } else {
            raw.as_str()
                .and_then(Segment::from_code)
                .ok_or_else(|| ListenerError(format!("unknown segment {}", raw)))?
        };

        if segment != self.selected.get() {
            log::debug!("segment filter changed to {}", segment.code());
            self.selected.set(segment);
            self.draw();
        }
        Ok(())
    }

    fn draw(&self) {
        let dataset = match self.dataset.borrow().clone() {
            Some(dataset) => dataset,
            None => return,
        };
        let selected = self.selected.get();
        let scored = score_customers(&dataset);
        let visible: Vec<&ScoredCustomer<'_>> =
            scored.iter().filter(|c| c.in_segment(selected)).collect();

        self.charts.destroy_all();
        self.ctx
            .outlet
            .set_html(&template::page(&dataset, selected, &scored));
        self.bind_controls(&dataset, selected);

        let distributions = &dataset.distributions;
        self.charts
            .create(template::SEGMENTS_CANVAS, &charts::segment_distribution(&dataset));
        self.charts
            .create(template::REVENUE_CANVAS, &charts::revenue_by_segment(&dataset));
        self.charts.create(
            template::RECENCY_CANVAS,
            &charts::score_distribution("Recência", &distributions.recency, Palette::Primary),
        );
        self.charts.create(
            template::FREQUENCY_CANVAS,
            &charts::score_distribution("Frequência", &distributions.frequency, Palette::Success),
        );
        self.charts.create(
            template::MONETARY_CANVAS,
            &charts::score_distribution("Valor", &distributions.monetary, Palette::Warning),
        );
        self.charts
            .create(template::CUSTOMERS_CANVAS, &charts::customer_bubbles(&visible));
    }

    fn bind_controls(&self, dataset: &RfmDataset, selected: Segment) {
        for stats in &dataset.segments {
            let store = self.ctx.store.clone();
            let clicked = stats.id;
            self.ctx.outlet.on_click(
                &template::segment_card_id(clicked),
                Box::new(move || {
                    let current = store.filters().segment;
                    select_segment(&store, toggled(current, clicked));
                }),
            );
        }

        if selected != Segment::All {
            let store = self.ctx.store.clone();
            self.ctx.outlet.on_click(
                template::CLEAR_SEGMENT_ID,
                Box::new(move || select_segment(&store, Segment::All)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::markup::LOAD_ERROR_MESSAGE;
    use crate::shared::testing::Harness;
    use contracts::shared::charts::{ChartKind, DataPoint};
    use serde_json::json;

    fn mounted(harness: &Harness) -> RfmSegmentationView {
        let mut view = RfmSegmentationView::new(&harness.ctx);
        view.render();
        harness.run();
        view
    }

    #[test]
    fn clicking_the_active_segment_clears_it() {
        assert_eq!(toggled(Segment::All, Segment::Loyal), Segment::Loyal);
        assert_eq!(toggled(Segment::Loyal, Segment::Loyal), Segment::All);
        assert_eq!(toggled(Segment::Loyal, Segment::Lost), Segment::Lost);
    }

    #[test]
    fn renders_every_section_and_chart() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);

        let html = harness.outlet.html();
        assert!(html.contains("45.230"));
        assert!(html.contains("Can&#39;t Lose Them"));
        assert!(html.contains("C-14120"));
        assert!(html.contains("Não classificado"));
        assert!(html.contains("30 / 60 / 120 / 240"));

        assert_eq!(
            harness.charts.kinds(),
            vec![
                ChartKind::Doughnut,
                ChartKind::Bar,
                ChartKind::Bar,
                ChartKind::Bar,
                ChartKind::Bar,
                ChartKind::Bubble
            ]
        );
    }

    #[test]
    fn revenue_chart_is_in_thousands() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);

        let config = harness.charts.config(template::REVENUE_CANVAS).unwrap();
        // Champions: 3620 customers × R$ 3.250
        assert_eq!(config.data.datasets[0].data[0], DataPoint::from(11_765.0));
        assert_eq!(config.options["indexAxis"], json!("y"));
    }

    #[test]
    fn card_click_filters_customers() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);

        harness.outlet.click(&template::segment_card_id(Segment::Champions));

        assert_eq!(harness.store.filters().segment, Segment::Champions);
        let html = harness.outlet.html();
        assert!(html.contains("segment-champions selected"));
        assert!(html.contains("C-10234"));
        assert!(!html.contains("C-13015"));

        let bubbles = harness.charts.config(template::CUSTOMERS_CANVAS).unwrap();
        assert_eq!(bubbles.data.datasets.len(), 1);
        assert_eq!(bubbles.data.datasets[0].data.len(), 3);
        assert_eq!(harness.charts.live(), 6);
    }

    #[test]
    fn second_click_and_clear_button_restore_all() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);
        let card = template::segment_card_id(Segment::AtRisk);

        harness.outlet.click(&card);
        harness.outlet.click(&card);
        assert_eq!(harness.store.filters().segment, Segment::All);

        harness.outlet.click(&card);
        harness.outlet.click(template::CLEAR_SEGMENT_ID);
        assert_eq!(harness.store.filters().segment, Segment::All);
        assert!(!harness.outlet.has_handler(template::CLEAR_SEGMENT_ID));
    }

    #[test]
    fn empty_segment_sample_shows_placeholder_row() {
        let harness = Harness::with_fixtures();
        harness.store.update("filters.segment", json!("lost"));
        let _view = mounted(&harness);

        assert!(harness.outlet.html().contains("Nenhum cliente da amostra"));
        let bubbles = harness.charts.config(template::CUSTOMERS_CANVAS).unwrap();
        assert!(bubbles.data.datasets.is_empty());
    }

    #[test]
    fn tree_without_filters_clears_the_segment() {
        let harness = Harness::with_fixtures();
        harness.store.update("filters.segment", json!("champions"));
        let view = mounted(&harness);
        assert!(!harness.outlet.html().contains("C-13015"));

        harness.store.set_state(json!({ "ui": { "breadcrumb": "Segmentação RFM" } }));

        assert!(harness.outlet.html().contains("C-13015"));
        assert!(view.inner.on_state_change(&json!({ "filters": {} })).is_ok());
        assert!(view
            .inner
            .on_state_change(&json!({ "filters": { "segment": "vip" } }))
            .is_err());
    }

    #[test]
    fn destroy_is_complete_and_idempotent() {
        let harness = Harness::with_fixtures();
        let mut view = mounted(&harness);

        view.destroy();
        view.destroy();

        assert_eq!(harness.charts.live(), 0);
        assert_eq!(harness.store.listener_count(), 0);
    }

    #[test]
    fn failed_load_shows_error_panel() {
        let harness = Harness::new();
        harness.fetch.respond("assets/data/sample-rfm.json", 500, "");
        let _view = mounted(&harness);

        let html = harness.outlet.html();
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(html.contains("500"));
    }
}
