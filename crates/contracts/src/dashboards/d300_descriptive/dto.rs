use crate::enums::Segment;
use crate::shared::analytics::{calculate_churn_rate, calculate_ltv, mean};
use serde::{Deserialize, Serialize};

/// Contents of `sample-descriptive.json`.
///
/// Feeds the presentation page (KPIs, revenue trend) and both descriptive
/// analysis pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptiveDataset {
    pub updated_at: Option<String>,
    pub kpis: Kpis,
    /// Order values in R$, one per order of the sample
    pub order_values: Vec<f64>,
    pub customers: Vec<CustomerActivity>,
    /// Share of new customers per acquisition channel, in percent
    pub channels: Vec<LabeledValue>,
    /// Monthly sales in R$ thousands, with the monthly target
    pub sales: Vec<MonthlySales>,
    /// Revenue per category in R$ thousands
    pub top_categories: Vec<LabeledValue>,
    pub segment_economics: Vec<SegmentEconomics>,
    pub churn: Vec<ChurnPoint>,
    pub frequency_distribution: Vec<LabeledValue>,
    pub purchase_interval: Vec<LabeledValue>,
    pub ltv_distribution: Vec<LabeledValue>,
    pub segment_profile: SegmentProfile,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kpis {
    pub customers: Kpi,
    pub revenue: Kpi,
    pub retention: Kpi,
    pub avg_ltv: Kpi,
}

/// Headline value with its growth against the previous period, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    pub value: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerActivity {
    /// Purchases per year
    pub frequency: f64,
    /// Average ticket in R$
    pub avg_ticket: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub value: f64,
    #[serde(default)]
    pub target: Option<f64>,
}

/// Unit economics of one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEconomics {
    pub segment: Segment,
    /// Customer acquisition cost in R$
    pub cac: f64,
    pub avg_order_value: f64,
    pub purchases_per_year: f64,
    pub lifespan_years: f64,
}

impl SegmentEconomics {
    pub fn ltv(&self) -> f64 {
        calculate_ltv(self.avg_order_value, self.purchases_per_year, self.lifespan_years)
    }

    /// LTV over CAC; 0 when the CAC is unknown.
    pub fn ltv_to_cac(&self) -> f64 {
        if self.cac == 0.0 {
            0.0
        } else {
            self.ltv() / self.cac
        }
    }
}

/// Customers at the start of a month and how many of them churned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnPoint {
    pub month: String,
    pub customers_start: f64,
    pub customers_lost: f64,
}

impl ChurnPoint {
    pub fn churn_rate(&self) -> f64 {
        calculate_churn_rate(self.customers_lost, self.customers_start)
    }
}

/// Radar chart: one series per segment scored 0–100 on each axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentProfile {
    pub axes: Vec<String>,
    pub series: Vec<ProfileSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSeries {
    pub segment: Segment,
    pub values: Vec<f64>,
}

impl DescriptiveDataset {
    /// Unweighted mean CAC over the segments.
    pub fn average_cac(&self) -> f64 {
        let cacs: Vec<f64> = self.segment_economics.iter().map(|s| s.cac).collect();
        mean(&cacs)
    }

    /// The `count` most recent months of sales.
    pub fn recent_sales(&self, count: usize) -> &[MonthlySales] {
        let skip = self.sales.len().saturating_sub(count);
        &self.sales[skip..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn economics(cac: f64) -> SegmentEconomics {
        SegmentEconomics {
            segment: Segment::Champions,
            cac,
            avg_order_value: 325.0,
            purchases_per_year: 5.0,
            lifespan_years: 2.0,
        }
    }

    #[test]
    fn ltv_and_ratio() {
        let champions = economics(180.0);
        assert_eq!(champions.ltv(), 3250.0);
        assert!((champions.ltv_to_cac() - 3250.0 / 180.0).abs() < EPS);
        assert_eq!(economics(0.0).ltv_to_cac(), 0.0);
    }

    #[test]
    fn churn_point_rate() {
        let point = ChurnPoint {
            month: "Jan".into(),
            customers_start: 1000.0,
            customers_lost: 280.0,
        };
        assert!((point.churn_rate() - 28.0).abs() < EPS);
    }

    #[test]
    fn recent_sales_window() {
        let data = DescriptiveDataset {
            sales: (1..=12)
                .map(|m| MonthlySales {
                    month: format!("M{}", m),
                    value: m as f64,
                    target: None,
                })
                .collect(),
            ..Default::default()
        };
        let recent = data.recent_sales(6);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].month, "M7");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data: DescriptiveDataset = serde_json::from_str("{}").unwrap();
        assert!(data.order_values.is_empty());
        assert_eq!(data.average_cac(), 0.0);
    }
}
