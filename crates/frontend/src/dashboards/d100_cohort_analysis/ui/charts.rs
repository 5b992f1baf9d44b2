use contracts::dashboards::d100_cohort_analysis::{max_offset, CohortRecord};
use contracts::shared::charts::{
    chart_colors, with_alpha, ChartConfig, ChartKind, DataPoint, Dataset, Palette,
};
use serde_json::json;

/// One line per cohort; unobserved months leave a gap.
pub fn retention_curves(cohorts: &[CohortRecord]) -> ChartConfig {
    let columns = max_offset(cohorts);
    let labels = (0..columns).map(|offset| format!("M+{}", offset)).collect();
    let colors = chart_colors(Palette::Mixed, cohorts.len());

    let datasets = cohorts
        .iter()
        .zip(colors)
        .map(|(cohort, color)| {
            let points = (0..columns)
                .map(|offset| DataPoint::from(cohort.retention_at(offset)))
                .collect();
            Dataset::new(cohort.name.clone(), points)
                .background(with_alpha(&color, 0.1))
                .border(color)
                .border_width(2.0)
                .filled(false)
                .tension(0.4)
        })
        .collect();

    ChartConfig::new(ChartKind::Line, labels, datasets).merge_options(json!({
        "spanGaps": false,
        "scales": { "y": { "min": 0, "max": 100 } }
    }))
}

pub fn cohort_sizes(cohorts: &[CohortRecord]) -> ChartConfig {
    single_bar(
        cohorts,
        "Novos clientes",
        Palette::Primary,
        cohorts.iter().map(|cohort| cohort.size as f64).collect(),
    )
}

pub fn cohort_revenue(cohorts: &[CohortRecord]) -> ChartConfig {
    single_bar(
        cohorts,
        "Receita (R$ mil)",
        Palette::Success,
        cohorts.iter().map(|cohort| cohort.revenue).collect(),
    )
}

fn single_bar(
    cohorts: &[CohortRecord],
    label: &str,
    palette: Palette,
    values: Vec<f64>,
) -> ChartConfig {
    let labels = cohorts.iter().map(|cohort| cohort.name.clone()).collect();
    let color = palette.colors()[0];
    let dataset = Dataset::from_values(label, &values)
        .background(with_alpha(color, 0.8))
        .border(color)
        .border_width(1.0);

    ChartConfig::new(ChartKind::Bar, labels, vec![dataset])
        .merge_options(json!({ "plugins": { "legend": { "display": false } } }))
}
