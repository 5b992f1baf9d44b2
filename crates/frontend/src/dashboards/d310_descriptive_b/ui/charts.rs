use contracts::dashboards::d300_descriptive::{DescriptiveDataset, LabeledValue};
use contracts::shared::analytics::rfm::segment_def;
use contracts::shared::charts::{
    with_alpha, ChartConfig, ChartKind, Dataset, Palette,
};
use serde_json::json;

fn no_legend() -> serde_json::Value {
    json!({ "plugins": { "legend": { "display": false } } })
}

pub fn cac_vs_ltv(data: &DescriptiveDataset) -> ChartConfig {
    let economics = &data.segment_economics;
    let labels = economics
        .iter()
        .map(|s| s.segment.display_name().to_string())
        .collect();
    let cac: Vec<f64> = economics.iter().map(|s| s.cac).collect();
    let ltv: Vec<f64> = economics.iter().map(|s| s.ltv()).collect();

    ChartConfig::new(
        ChartKind::Bar,
        labels,
        vec![
            Dataset::from_values("CAC (R$)", &cac).background(Palette::Danger.colors()[0]),
            Dataset::from_values("LTV (R$)", &ltv).background(Palette::Success.colors()[0]),
        ],
    )
}

pub fn churn_evolution(data: &DescriptiveDataset) -> ChartConfig {
    let labels = data.churn.iter().map(|point| point.month.clone()).collect();
    let rates: Vec<f64> = data.churn.iter().map(|point| point.churn_rate()).collect();
    let color = Palette::Danger.colors()[0];

    ChartConfig::new(
        ChartKind::Line,
        labels,
        vec![Dataset::from_values("Churn (%)", &rates)
            .border(color)
            .background(with_alpha(color, 0.1))
            .filled(true)
            .tension(0.4)],
    )
    .merge_options(no_legend())
}

/// Single-series bar of a labeled distribution.
pub fn distribution(label: &str, values: &[LabeledValue], palette: Palette) -> ChartConfig {
    let labels = values.iter().map(|item| item.label.clone()).collect();
    let counts: Vec<f64> = values.iter().map(|item| item.value).collect();
    let color = palette.colors()[0];

    ChartConfig::new(
        ChartKind::Bar,
        labels,
        vec![Dataset::from_values(label, &counts)
            .background(with_alpha(color, 0.8))
            .border(color)
            .border_width(1.0)],
    )
    .merge_options(no_legend())
}

pub fn segment_profile(data: &DescriptiveDataset) -> ChartConfig {
    let profile = &data.segment_profile;
    let datasets = profile
        .series
        .iter()
        .map(|series| {
            let color = segment_def(series.segment)
                .map(|def| def.color)
                .unwrap_or("#6b7280");
            Dataset::from_values(series.segment.display_name(), &series.values)
                .border(color)
                .background(with_alpha(color, 0.2))
                .border_width(2.0)
        })
        .collect();

    ChartConfig::new(ChartKind::Radar, profile.axes.clone(), datasets)
}
