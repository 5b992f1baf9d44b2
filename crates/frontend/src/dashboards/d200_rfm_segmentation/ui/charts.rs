use super::scoring::ScoredCustomer;
use contracts::dashboards::d200_rfm_segmentation::RfmDataset;
use contracts::shared::analytics::RFM_SEGMENTS;
use contracts::shared::charts::{
    horizontal_bar_options, with_alpha, ChartConfig, ChartKind, DataPoint, Dataset, Palette,
};
use serde_json::json;

const UNCLASSIFIED_COLOR: &str = "#d1d5db";

fn segment_labels(dataset: &RfmDataset) -> Vec<String> {
    dataset.segments.iter().map(|s| s.name.clone()).collect()
}

fn segment_colors(dataset: &RfmDataset) -> Vec<String> {
    dataset.segments.iter().map(|s| s.color.clone()).collect()
}

pub fn segment_distribution(dataset: &RfmDataset) -> ChartConfig {
    let counts: Vec<f64> = dataset.segments.iter().map(|s| s.count as f64).collect();
    let slices = Dataset::from_values("Clientes", &counts)
        .background(segment_colors(dataset))
        .border_width(2.0);
    ChartConfig::new(ChartKind::Doughnut, segment_labels(dataset), vec![slices])
}

/// Revenue in R$ thousands: customers × average value.
pub fn revenue_by_segment(dataset: &RfmDataset) -> ChartConfig {
    let revenue: Vec<f64> = dataset
        .segments
        .iter()
        .map(|s| s.total_revenue() / 1000.0)
        .collect();
    let bars = Dataset::from_values("Receita (R$ mil)", &revenue).background(segment_colors(dataset));

    ChartConfig::new(ChartKind::Bar, segment_labels(dataset), vec![bars])
        .with_options(horizontal_bar_options())
        .merge_options(json!({ "plugins": { "legend": { "display": false } } }))
}

/// Customers per score 1–5 on one axis.
pub fn score_distribution(label: &str, counts: &[u64], palette: Palette) -> ChartConfig {
    let labels = (1..=counts.len()).map(|score| score.to_string()).collect();
    let values: Vec<f64> = counts.iter().map(|count| *count as f64).collect();
    let color = palette.colors()[0];
    let bars = Dataset::from_values(label, &values)
        .background(with_alpha(color, 0.8))
        .border(color)
        .border_width(1.0);

    ChartConfig::new(ChartKind::Bar, labels, vec![bars])
        .merge_options(json!({ "plugins": { "legend": { "display": false } } }))
}

/// Recency score on x, frequency score on y, bubble size from the monetary score.
/// One dataset per segment present in `customers`, in catalog order.
pub fn customer_bubbles(customers: &[&ScoredCustomer<'_>]) -> ChartConfig {
    let bubble = |scored: &ScoredCustomer<'_>| DataPoint::Bubble {
        x: scored.scores.r as f64,
        y: scored.scores.f as f64,
        r: 4.0 + scored.scores.m as f64 * 2.0,
    };

    let mut datasets: Vec<Dataset> = RFM_SEGMENTS
        .iter()
        .filter_map(|def| {
            let points: Vec<DataPoint> = customers
                .iter()
                .filter(|scored| scored.segment.map(|s| s.id) == Some(def.id))
                .map(|scored| bubble(*scored))
                .collect();
            if points.is_empty() {
                return None;
            }
            Some(
                Dataset::new(def.name, points)
                    .background(with_alpha(def.color, 0.6))
                    .border(def.color),
            )
        })
        .collect();

    let unclassified: Vec<DataPoint> = customers
        .iter()
        .filter(|scored| scored.segment.is_none())
        .map(|scored| bubble(*scored))
        .collect();
    if !unclassified.is_empty() {
        datasets.push(
            Dataset::new("Não classificado", unclassified)
                .background(with_alpha(UNCLASSIFIED_COLOR, 0.6))
                .border(UNCLASSIFIED_COLOR),
        );
    }

    ChartConfig::new(ChartKind::Bubble, Vec::new(), datasets).merge_options(json!({
        "scales": {
            "x": { "min": 0, "max": 6, "title": { "display": true, "text": "Recência (nota)" } },
            "y": { "min": 0, "max": 6, "title": { "display": true, "text": "Frequência (nota)" } }
        }
    }))
}
