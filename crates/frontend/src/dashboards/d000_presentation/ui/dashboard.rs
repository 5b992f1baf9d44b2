use crate::dashboards::loader::{load_then_render, Liveness};
use crate::routes::{View, ViewContext};
use crate::shared::charts::ChartSet;
use crate::shared::markup::{chart_card, metric_card, Trend};
use contracts::dashboards::d300_descriptive::{DescriptiveDataset, Kpi};
use contracts::shared::charts::{with_alpha, ChartConfig, ChartKind, Dataset, Palette};
use contracts::shared::format::{
    format_currency_compact, format_number, format_number_with_separator, format_percentage,
    format_signed_percent,
};
use serde_json::json;
use std::rc::Rc;

const TITLE: &str = "Apresentação";
const REVENUE_CANVAS: &str = "presentation-revenue-chart";
const REVENUE_MONTHS: usize = 6;

const INSIGHTS: [(&str, &str); 4] = [
    (
        "Cohorts Recentes",
        "Os cohorts do fim de 2023 retêm mais que a média histórica no primeiro mês",
    ),
    (
        "Segmento Champions",
        "8% dos clientes concentram a maior fatia da receita; retê-los é prioridade",
    ),
    (
        "Clientes em Risco",
        "Quase 5 mil clientes estão no segmento At Risk e pedem ação imediata",
    ),
    (
        "Crescimento",
        "A base cresce mês a mês, mas a retenção caiu no último período",
    ),
];

const GUIDE: [(&str, &str); 4] = [
    ("Problema de Negócio", "Entenda o contexto e os objetivos da análise"),
    ("Análise de Cohort", "Visualize padrões de retenção ao longo do tempo"),
    ("Segmentação RFM", "Identifique segmentos de clientes e oportunidades"),
    ("Análises Descritivas", "Explore métricas detalhadas e correlações"),
];

/// Landing page: KPIs and the recent revenue trend.
pub struct PresentationView {
    ctx: ViewContext,
    charts: Rc<ChartSet>,
    liveness: Liveness,
}

impl PresentationView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            ctx: ctx.clone(),
            charts: Rc::new(ChartSet::new(ctx.charts.clone())),
            liveness: Liveness::new(),
        }
    }
}

impl View for PresentationView {
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
                chart_set.create(REVENUE_CANVAS, &revenue_trend(&dataset));
            },
        );
    }

    fn destroy(&mut self) {
        self.liveness.revoke();
        self.charts.destroy_all();
    }
}

fn kpi_card(label: &str, value: String, kpi: &Kpi) -> String {
    metric_card(
        label,
        &value,
        &format_signed_percent(kpi.growth),
        Trend::of_change(kpi.growth, false),
    )
}

fn page(data: &DescriptiveDataset) -> String {
    let kpis = &data.kpis;
    let cards = [
        kpi_card(
            "Total de Clientes",
            format_number_with_separator(kpis.customers.value, 0),
            &kpis.customers,
        ),
        kpi_card(
            "Receita Total",
            format!("R$\u{a0}{}", format_number(kpis.revenue.value, 1)),
            &kpis.revenue,
        ),
        kpi_card(
            "Taxa de Retenção",
            format_percentage(kpis.retention.value, 0, false),
            &kpis.retention,
        ),
        kpi_card(
            "LTV Médio",
            format_currency_compact(kpis.avg_ltv.value),
            &kpis.avg_ltv,
        ),
    ]
    .concat();

    let insights: String = INSIGHTS
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="insight-card"><h3 class="insight-title">{}</h3><p class="insight-description">{}</p></div>"#,
                title, text
            )
        })
        .collect();

    let guide: String = GUIDE
        .iter()
        .enumerate()
        .map(|(index, (title, text))| {
            format!(
                r#"<div class="guide-step"><div class="step-number">{}</div><div class="step-content"><h3>{}</h3><p>{}</p></div></div>"#,
                index + 1,
                title,
                text
            )
        })
        .collect();

    format!(
        r#"<section class="section-presentation fade-in"><div class="hero"><h1>Dashboard de Análise de Retenção e Segmentação</h1><p class="subtitle">Comportamento de clientes com foco em Cohort e RFM</p></div><div class="metrics-grid">{}</div><div class="charts-grid">{}</div><div class="insights-section"><h2>Principais Insights</h2><div class="insights-grid">{}</div></div><div class="guide-section"><h2>Como usar este dashboard</h2><div class="guide-steps">{}</div></div></section>"#,
        cards,
        chart_card(REVENUE_CANVAS, "Receita dos Últimos 6 Meses (R$ mil)", "chart-card-wide"),
        insights,
        guide
    )
}

fn revenue_trend(data: &DescriptiveDataset) -> ChartConfig {
    let recent = data.recent_sales(REVENUE_MONTHS);
    let labels = recent.iter().map(|month| month.month.clone()).collect();
    let values: Vec<f64> = recent.iter().map(|month| month.value).collect();
    let color = Palette::Primary.colors()[0];

    ChartConfig::new(
        ChartKind::Line,
        labels,
        vec![Dataset::from_values("Receita (R$ mil)", &values)
            .border(color)
            .background(with_alpha(color, 0.15))
            .filled(true)
            .tension(0.4)],
    )
    .merge_options(json!({ "plugins": { "legend": { "display": false } } }))
}
