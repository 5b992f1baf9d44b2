use super::charts;
use super::economics::UnitEconomics;
use crate::dashboards::loader::{load_then_render, Liveness};
use crate::routes::{View, ViewContext};
use crate::shared::charts::ChartSet;
use crate::shared::markup::{chart_card, metric_card, section_header, Trend};
use contracts::dashboards::d300_descriptive::DescriptiveDataset;
use contracts::shared::charts::Palette;
use contracts::shared::format::{
    format_currency_compact, format_number_with_separator, format_percentage,
    format_signed_percent,
};
use std::rc::Rc;

const TITLE: &str = "Análise Descritiva B";
const SUBTITLE: &str = "Aquisição, valor do cliente e churn";

/// LTV/CAC below this is considered unhealthy.
const HEALTHY_LTV_TO_CAC: f64 = 3.0;

const CAC_LTV_CANVAS: &str = "descriptive-cac-ltv-chart";
const CHURN_CANVAS: &str = "descriptive-churn-chart";
const FREQUENCY_CANVAS: &str = "descriptive-frequency-chart";
const INTERVAL_CANVAS: &str = "descriptive-interval-chart";
const LTV_CANVAS: &str = "descriptive-ltv-chart";
const PROFILE_CANVAS: &str = "descriptive-profile-chart";

pub struct DescriptiveBView {
    ctx: ViewContext,
    charts: Rc<ChartSet>,
    liveness: Liveness,
}

impl DescriptiveBView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            ctx: ctx.clone(),
            charts: Rc::new(ChartSet::new(ctx.charts.clone())),
            liveness: Liveness::new(),
        }
    }
}

impl View for DescriptiveBView {
    fn render(&mut self) {
        let outlet = self.ctx.outlet.clone();
        let chart_set = self.charts.clone();
        load_then_render(
            &self.ctx,
            &self.liveness,
            TITLE,
            |data| async move { data.load_descriptive_data().await },
            move |dataset: DescriptiveDataset| {
                outlet.set_html(&page(&dataset));
                draw_charts(&chart_set, &dataset);
            },
        );
    }

    fn destroy(&mut self) {
        self.liveness.revoke();
        self.charts.destroy_all();
    }
}

fn draw_charts(chart_set: &ChartSet, data: &DescriptiveDataset) {
    chart_set.create(CAC_LTV_CANVAS, &charts::cac_vs_ltv(data));
    chart_set.create(CHURN_CANVAS, &charts::churn_evolution(data));
    chart_set.create(
        FREQUENCY_CANVAS,
        &charts::distribution("Clientes", &data.frequency_distribution, Palette::Primary),
    );
    chart_set.create(
        INTERVAL_CANVAS,
        &charts::distribution("Clientes", &data.purchase_interval, Palette::Warning),
    );
    chart_set.create(
        LTV_CANVAS,
        &charts::distribution("Clientes", &data.ltv_distribution, Palette::Success),
    );
    chart_set.create(PROFILE_CANVAS, &charts::segment_profile(data));
}

fn page(data: &DescriptiveDataset) -> String {
    format!(
        r#"<section class="section-descriptive fade-in">{}{}<div class="charts-grid">{}{}</div><h2 class="subsection-title">Distribuições</h2><div class="charts-grid charts-grid-3">{}{}{}</div><div class="charts-grid">{}</div></section>"#,
        section_header(TITLE, SUBTITLE),
        economics_cards(&UnitEconomics::compute(data)),
        chart_card(CAC_LTV_CANVAS, "CAC vs LTV por Segmento", ""),
        chart_card(CHURN_CANVAS, "Evolução do Churn", ""),
        chart_card(FREQUENCY_CANVAS, "Frequência de Compra", ""),
        chart_card(INTERVAL_CANVAS, "Intervalo entre Compras", ""),
        chart_card(LTV_CANVAS, "Distribuição de LTV", ""),
        chart_card(PROFILE_CANVAS, "Perfil dos Segmentos", "chart-card-wide"),
    )
}

fn economics_cards(economics: &UnitEconomics) -> String {
    let ratio_trend = if economics.ltv_to_cac >= HEALTHY_LTV_TO_CAC {
        Trend::Positive
    } else {
        Trend::Negative
    };

    format!(
        r#"<div class="metrics-grid">{}{}{}{}</div>"#,
        metric_card(
            "CAC Médio",
            &format_currency_compact(economics.avg_cac),
            &format!("LTV médio {}", format_currency_compact(economics.avg_ltv)),
            Trend::Neutral
        ),
        metric_card(
            "LTV / CAC",
            &format!("{}x", format_number_with_separator(economics.ltv_to_cac, 1)),
            "saudável a partir de 3x",
            ratio_trend
        ),
        metric_card(
            "Churn Mensal",
            &format_percentage(economics.churn_rate, 1, false),
            "último mês",
            Trend::Neutral
        ),
        metric_card(
            "Variação do Churn",
            &format_signed_percent(economics.churn_change),
            "vs. mês anterior",
            Trend::of_change(economics.churn_change, true)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::Harness;
    use contracts::shared::charts::ChartKind;

    fn mounted(harness: &Harness) -> DescriptiveBView {
        let mut view = DescriptiveBView::new(&harness.ctx);
        view.render();
        harness.run();
        view
    }

    #[test]
    fn cards_show_unit_economics() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);

        let html = harness.outlet.html();
        assert!(html.contains("R$\u{a0}180"));
        assert!(html.contains("8,1x"));
        assert!(html.contains("2.9%"));
        // Falling churn is good news: the growth card is tagged positive.
        assert!(html.contains(
            r#"<div class="metric-value">-3.6%</div><div class="metric-change positive">vs. mês anterior</div>"#
        ));
    }

    #[test]
    fn rising_churn_is_flagged_negative() {
        let economics = UnitEconomics {
            avg_cac: 200.0,
            avg_ltv: 500.0,
            ltv_to_cac: 2.5,
            churn_rate: 4.0,
            churn_change: 12.5,
        };

        let html = economics_cards(&economics);
        assert!(html.contains(
            r#"<div class="metric-value">+12.5%</div><div class="metric-change negative">vs. mês anterior</div>"#
        ));
        assert!(html.contains(
            r#"<div class="metric-value">2,5x</div><div class="metric-change negative">saudável a partir de 3x</div>"#
        ));
    }

    #[test]
    fn six_charts_including_radar() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);

        assert_eq!(
            harness.charts.kinds(),
            vec![
                ChartKind::Bar,
                ChartKind::Line,
                ChartKind::Bar,
                ChartKind::Bar,
                ChartKind::Bar,
                ChartKind::Radar
            ]
        );
        let radar = harness.charts.config(PROFILE_CANVAS).unwrap();
        assert_eq!(radar.data.labels.len(), 5);
        assert_eq!(radar.data.datasets[0].label, "Champions");
    }

    #[test]
    fn a_failing_canvas_does_not_stop_the_page() {
        let harness = Harness::with_fixtures();
        harness.charts.fail_on(CHURN_CANVAS);
        let mut view = mounted(&harness);

        assert_eq!(harness.charts.created(), 5);
        view.destroy();
        assert_eq!(harness.charts.live(), 0);
    }

    #[test]
    fn weak_ratio_is_flagged() {
        let economics = UnitEconomics {
            ltv_to_cac: 2.4,
            ..Default::default()
        };
        assert!(economics_cards(&economics).contains("metric-change negative"));
    }
}
