use contracts::dashboards::d300_descriptive::{DescriptiveDataset, LabeledValue};
use contracts::shared::charts::{
    chart_colors, horizontal_bar_options, with_alpha, ChartConfig, ChartKind, DataPoint, Dataset,
    Palette,
};
use serde_json::json;

fn split(values: &[LabeledValue]) -> (Vec<String>, Vec<f64>) {
    values
        .iter()
        .map(|item| (item.label.clone(), item.value))
        .unzip()
}

pub fn channel_mix(data: &DescriptiveDataset) -> ChartConfig {
    let (labels, shares) = split(&data.channels);
    let slices = Dataset::from_values("Novos clientes (%)", &shares)
        .background(chart_colors(Palette::Mixed, shares.len()))
        .border_width(2.0);
    ChartConfig::new(ChartKind::Doughnut, labels, vec![slices])
}

/// Realized sales against the monthly target (dashed).
pub fn sales_evolution(data: &DescriptiveDataset) -> ChartConfig {
    let labels = data.sales.iter().map(|month| month.month.clone()).collect();
    let sales: Vec<f64> = data.sales.iter().map(|month| month.value).collect();
    let targets = data
        .sales
        .iter()
        .map(|month| DataPoint::from(month.target))
        .collect();

    let primary = Palette::Primary.colors()[0];
    let warning = Palette::Warning.colors()[0];
    let realized = Dataset::from_values("Vendas (R$ mil)", &sales)
        .border(primary)
        .background(with_alpha(primary, 0.1))
        .filled(true)
        .tension(0.4);
    let target = Dataset::new("Meta (R$ mil)", targets)
        .border(warning)
        .dashed()
        .filled(false);

    ChartConfig::new(ChartKind::Line, labels, vec![realized, target])
}

pub fn top_categories(data: &DescriptiveDataset) -> ChartConfig {
    let (labels, revenue) = split(&data.top_categories);
    let bars = Dataset::from_values("Receita (R$ mil)", &revenue)
        .background(chart_colors(Palette::Success, revenue.len()));

    ChartConfig::new(ChartKind::Bar, labels, vec![bars])
        .with_options(horizontal_bar_options())
        .merge_options(json!({ "plugins": { "legend": { "display": false } } }))
}

pub fn ticket_by_segment(data: &DescriptiveDataset) -> ChartConfig {
    let labels = data
        .segment_economics
        .iter()
        .map(|economics| economics.segment.display_name().to_string())
        .collect();
    let tickets: Vec<f64> = data
        .segment_economics
        .iter()
        .map(|economics| economics.avg_order_value)
        .collect();
    let bars = Dataset::from_values("Ticket médio (R$)", &tickets)
        .background(chart_colors(Palette::Mixed, tickets.len()));

    ChartConfig::new(ChartKind::Bar, labels, vec![bars])
        .merge_options(json!({ "plugins": { "legend": { "display": false } } }))
}
