use super::scoring::ScoredCustomer;
use crate::shared::markup::{chart_card, escape, metric_card, section_header, stat_item, Trend};
use contracts::dashboards::d200_rfm_segmentation::{RfmDataset, RfmMethodology, SegmentStats};
use contracts::enums::Segment;
use contracts::shared::analytics::rfm::segment_def;
use contracts::shared::format::{
    format_currency, format_currency_compact, format_number, format_number_with_separator,
    format_percentage,
};

pub const TITLE: &str = "Segmentação RFM";
const SUBTITLE: &str = "Clientes agrupados por Recência, Frequência e Valor Monetário";

pub const CLEAR_SEGMENT_ID: &str = "rfm-clear-segment";

pub const SEGMENTS_CANVAS: &str = "rfm-segments-chart";
pub const REVENUE_CANVAS: &str = "rfm-revenue-chart";
pub const RECENCY_CANVAS: &str = "rfm-recency-chart";
pub const FREQUENCY_CANVAS: &str = "rfm-frequency-chart";
pub const MONETARY_CANVAS: &str = "rfm-monetary-chart";
pub const CUSTOMERS_CANVAS: &str = "rfm-customers-chart";

/// Element id of a segment card.
pub fn segment_card_id(segment: Segment) -> String {
    format!("segment-{}", segment.css_class())
}

pub fn page(dataset: &RfmDataset, selected: Segment, customers: &[ScoredCustomer<'_>]) -> String {
    format!(
        r#"<section class="section-rfm fade-in">{header}{overview}{filter}<h2 class="subsection-title">Segmentos</h2><div class="segments-grid">{cards}</div><div class="charts-grid">{segments}{revenue}</div><h2 class="subsection-title">Distribuição dos Scores</h2><div class="charts-grid charts-grid-3">{recency}{frequency}{monetary}</div>{customers}{methodology}</section>"#,
        header = section_header(TITLE, SUBTITLE),
        overview = overview(dataset),
        filter = filter_banner(selected),
        cards = dataset
            .segments
            .iter()
            .map(|stats| segment_card(stats, selected))
            .collect::<String>(),
        segments = chart_card(SEGMENTS_CANVAS, "Distribuição de Clientes", ""),
        revenue = chart_card(REVENUE_CANVAS, "Receita por Segmento (R$ mil)", ""),
        recency = chart_card(RECENCY_CANVAS, "Recência", ""),
        frequency = chart_card(FREQUENCY_CANVAS, "Frequência", ""),
        monetary = chart_card(MONETARY_CANVAS, "Valor Monetário", ""),
        customers = customer_section(customers, selected),
        methodology = methodology(&dataset.methodology),
    )
}

fn overview(dataset: &RfmDataset) -> String {
    let summary = &dataset.summary;
    format!(
        r#"<div class="metrics-grid">{}{}{}{}{}</div>"#,
        metric_card(
            "Total de Clientes",
            &format_number_with_separator(summary.total_customers as f64, 0),
            &format!("{} segmentos", dataset.segments.len()),
            Trend::Neutral
        ),
        metric_card(
            "Receita Total",
            &format!("R$\u{a0}{}", format_number(summary.total_revenue, 1)),
            "",
            Trend::Neutral
        ),
        metric_card(
            "Recência Média",
            &format!("{} dias", format_number_with_separator(summary.avg_recency_days, 0)),
            "",
            Trend::Neutral
        ),
        metric_card(
            "Frequência Média",
            &format!("{} compras", format_number_with_separator(summary.avg_frequency, 1)),
            "",
            Trend::Neutral
        ),
        metric_card(
            "Valor Médio",
            &format_currency_compact(summary.avg_monetary),
            "",
            Trend::Neutral
        ),
    )
}

fn filter_banner(selected: Segment) -> String {
    if selected == Segment::All {
        return String::new();
    }
    format!(
        r#"<div class="filter-banner">Filtrando por <strong>{}</strong><button id="{}" class="btn btn-secondary">Mostrar todos</button></div>"#,
        escape(selected.display_name()),
        CLEAR_SEGMENT_ID
    )
}

fn segment_card(stats: &SegmentStats, selected: Segment) -> String {
    let selected_class = if stats.id == selected { " selected" } else { "" };
    let description = segment_def(stats.id)
        .map(|def| def.description)
        .unwrap_or_default();

    format!(
        r#"<div id="{id}" class="segment-card segment-{css}{selected}" style="border-top-color: {color}"><div class="segment-card-header"><h3>{name}</h3><span class="segment-badge">{pct}</span></div><p class="segment-description">{description}</p><div class="segment-metrics">{count}{value}</div><p class="segment-strategy"><strong>Estratégia:</strong> {strategy}</p></div>"#,
        id = segment_card_id(stats.id),
        css = stats.id.css_class(),
        selected = selected_class,
        color = escape(&stats.color),
        name = escape(&stats.name),
        pct = format_percentage(stats.percentage, 1, false),
        description = escape(description),
        count = stat_item(
            "Clientes",
            &format_number_with_separator(stats.count as f64, 0)
        ),
        value = stat_item("Valor médio", &format_currency_compact(stats.avg_value)),
        strategy = escape(&stats.strategy),
    )
}

fn customer_section(customers: &[ScoredCustomer<'_>], selected: Segment) -> String {
    let visible: Vec<&ScoredCustomer<'_>> =
        customers.iter().filter(|c| c.in_segment(selected)).collect();

    let rows: String = if visible.is_empty() {
        r#"<tr><td colspan="6" class="empty-row">Nenhum cliente da amostra neste segmento</td></tr>"#
            .to_string()
    } else {
        visible.iter().map(|scored| customer_row(scored)).collect()
    };

    format!(
        r#"<h2 class="subsection-title">Amostra de Clientes</h2><div class="charts-grid"><div class="table-card"><table class="data-table rfm-customers"><thead><tr><th>Cliente</th><th>Recência (dias)</th><th>Frequência</th><th>Valor</th><th>RFM</th><th>Segmento</th></tr></thead><tbody>{}</tbody></table></div>{}</div>"#,
        rows,
        chart_card(CUSTOMERS_CANVAS, "Recência × Frequência (tamanho = valor)", "")
    )
}

fn customer_row(scored: &ScoredCustomer<'_>) -> String {
    let customer = scored.customer;
    let segment = match scored.segment {
        Some(def) => format!(
            r#"<span class="segment-badge" style="background-color: {}">{}</span>"#,
            def.color,
            escape(def.name)
        ),
        None => r#"<span class="segment-badge unclassified">Não classificado</span>"#.to_string(),
    };

    format!(
        r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="rfm-code">{}</td><td>{}</td></tr>"#,
        escape(&customer.id),
        format_number_with_separator(customer.recency_days, 0),
        format_number_with_separator(customer.frequency, 0),
        format_currency(customer.monetary),
        scored.scores.code(),
        segment
    )
}

fn methodology(methodology: &RfmMethodology) -> String {
    let quartiles = |values: &[f64; 4]| {
        values
            .iter()
            .map(|value| format_number_with_separator(*value, 0))
            .collect::<Vec<_>>()
            .join(" / ")
    };

    format!(
        r#"<div class="methodology-card"><h2>Metodologia</h2><p>{}</p><div class="stats-grid">{}{}{}</div></div>"#,
        escape(&methodology.description),
        stat_item(
            "Quartis de Recência (dias, escala invertida)",
            &quartiles(&methodology.recency_quartiles)
        ),
        stat_item("Quartis de Frequência (compras)", &quartiles(&methodology.frequency_quartiles)),
        stat_item("Quartis de Valor (R$)", &quartiles(&methodology.monetary_quartiles)),
    )
}
