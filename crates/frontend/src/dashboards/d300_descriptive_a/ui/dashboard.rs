use super::charts;
use crate::dashboards::loader::{load_then_render, Liveness};
use crate::routes::{View, ViewContext};
use crate::shared::charts::ChartSet;
use crate::shared::markup::{chart_card, escape, section_header, stat_item};
use contracts::dashboards::d300_descriptive::DescriptiveDataset;
use contracts::shared::analytics::{correlation, mean, median, percentile, standard_deviation};
use contracts::shared::format::{format_currency, format_number_with_separator};
use std::rc::Rc;

const TITLE: &str = "Análise Descritiva A";
const SUBTITLE: &str = "Distribuição de pedidos, canais e categorias";

const CHANNELS_CANVAS: &str = "descriptive-channels-chart";
const SALES_CANVAS: &str = "descriptive-sales-chart";
const CATEGORIES_CANVAS: &str = "descriptive-categories-chart";
const TICKET_CANVAS: &str = "descriptive-ticket-chart";

pub struct DescriptiveAView {
    ctx: ViewContext,
    charts: Rc<ChartSet>,
    liveness: Liveness,
}

impl DescriptiveAView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            ctx: ctx.clone(),
            charts: Rc::new(ChartSet::new(ctx.charts.clone())),
            liveness: Liveness::new(),
        }
    }
}

impl View for DescriptiveAView {
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
                chart_set.create(CHANNELS_CANVAS, &charts::channel_mix(&dataset));
                chart_set.create(SALES_CANVAS, &charts::sales_evolution(&dataset));
                chart_set.create(CATEGORIES_CANVAS, &charts::top_categories(&dataset));
                chart_set.create(TICKET_CANVAS, &charts::ticket_by_segment(&dataset));
            },
        );
    }

    fn destroy(&mut self) {
        self.liveness.revoke();
        self.charts.destroy_all();
    }
}

fn page(data: &DescriptiveDataset) -> String {
    format!(
        r#"<section class="section-descriptive fade-in">{}{}{}<div class="charts-grid">{}{}{}{}</div></section>"#,
        section_header(TITLE, SUBTITLE),
        order_statistics(&data.order_values),
        correlation_card(data),
        chart_card(CHANNELS_CANVAS, "Aquisição por Canal", ""),
        chart_card(SALES_CANVAS, "Evolução de Vendas", "chart-card-wide"),
        chart_card(CATEGORIES_CANVAS, "Top Categorias (R$ mil)", ""),
        chart_card(TICKET_CANVAS, "Ticket Médio por Segmento", ""),
    )
}

fn order_statistics(values: &[f64]) -> String {
    format!(
        r#"<h2 class="subsection-title">Valor dos Pedidos</h2><div class="stats-grid">{}{}{}{}{}{}</div>"#,
        stat_item(
            "Pedidos na amostra",
            &format_number_with_separator(values.len() as f64, 0)
        ),
        stat_item("Média", &format_currency(mean(values))),
        stat_item("Mediana", &format_currency(median(values))),
        stat_item("Desvio Padrão", &format_currency(standard_deviation(values))),
        stat_item("Percentil 25", &format_currency(percentile(values, 25.0))),
        stat_item("Percentil 75", &format_currency(percentile(values, 75.0))),
    )
}

fn correlation_card(data: &DescriptiveDataset) -> String {
    let (frequency, ticket): (Vec<f64>, Vec<f64>) = data
        .customers
        .iter()
        .map(|customer| (customer.frequency, customer.avg_ticket))
        .unzip();
    let r = correlation(&frequency, &ticket);

    format!(
        r#"<div class="insight-card"><h3>Frequência × Ticket Médio</h3><div class="insight-value">r = {}</div><p>{}</p></div>"#,
        format_number_with_separator(r, 2),
        escape(&interpret_correlation(r))
    )
}

/// pt-BR reading of a Pearson coefficient.
fn interpret_correlation(r: f64) -> String {
    let strength = match r.abs() {
        a if a >= 0.7 => "forte",
        a if a >= 0.4 => "moderada",
        a if a >= 0.2 => "fraca",
        _ => return "Sem correlação relevante entre frequência e ticket médio".to_string(),
    };
    let direction = if r > 0.0 { "positiva" } else { "negativa" };
    format!(
        "Correlação {} {}: clientes que compram mais vezes tendem a ter ticket {}",
        strength,
        direction,
        if r > 0.0 { "maior" } else { "menor" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::markup::LOAD_ERROR_MESSAGE;
    use crate::shared::testing::Harness;
    use contracts::shared::charts::ChartKind;

    fn mounted(harness: &Harness) -> DescriptiveAView {
        let mut view = DescriptiveAView::new(&harness.ctx);
        view.render();
        harness.run();
        view
    }

    #[test]
    fn correlation_wording() {
        assert!(interpret_correlation(0.93).starts_with("Correlação forte positiva"));
        assert!(interpret_correlation(-0.5).starts_with("Correlação moderada negativa"));
        assert!(interpret_correlation(0.25).starts_with("Correlação fraca"));
        assert!(interpret_correlation(0.05).starts_with("Sem correlação"));
    }

    #[test]
    fn statistics_use_the_order_sample() {
        let html = order_statistics(&[100.0, 200.0, 300.0, 400.0]);
        assert!(html.contains("R$\u{a0}250,00"));
        assert!(html.contains("R$\u{a0}175,00"));
        assert!(html.contains("R$\u{a0}325,00"));
    }

    #[test]
    fn renders_statistics_and_four_charts() {
        let harness = Harness::with_fixtures();
        let _view = mounted(&harness);

        let html = harness.outlet.html();
        assert!(html.contains("Pedidos na amostra"));
        assert!(html.contains("Correlação forte positiva"));
        assert_eq!(
            harness.charts.kinds(),
            vec![ChartKind::Doughnut, ChartKind::Line, ChartKind::Bar, ChartKind::Bar]
        );

        let sales = harness.charts.config(SALES_CANVAS).unwrap();
        assert_eq!(sales.data.datasets.len(), 2);
        assert_eq!(sales.data.datasets[1].border_dash, Some(vec![5.0, 5.0]));
    }

    #[test]
    fn destroy_releases_charts() {
        let harness = Harness::with_fixtures();
        let mut view = mounted(&harness);
        view.destroy();
        view.destroy();
        assert_eq!(harness.charts.live(), 0);
        assert_eq!(harness.charts.destroyed(), 4);
    }

    #[test]
    fn unreachable_data_shows_error_panel() {
        let harness = Harness::new();
        let _view = mounted(&harness);
        assert!(harness.outlet.html().contains(LOAD_ERROR_MESSAGE));
    }
}
