use crate::enums::Segment;
use crate::shared::analytics::{calculate_rfm_score, RfmScores};
use serde::{Deserialize, Serialize};

/// Contents of `sample-rfm.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfmDataset {
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub summary: RfmSummary,
    pub methodology: RfmMethodology,
    pub segments: Vec<SegmentStats>,
    #[serde(default)]
    pub distributions: ScoreDistributions,
    #[serde(default)]
    pub customers: Vec<CustomerSample>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RfmSummary {
    pub total_customers: u64,
    pub total_revenue: f64,
    pub avg_recency_days: f64,
    pub avg_frequency: f64,
    pub avg_monetary: f64,
}

/// Quartile boundaries used to score each axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfmMethodology {
    /// Days since last purchase; scored in reverse
    pub recency_quartiles: [f64; 4],
    /// Purchases in the analysis window
    pub frequency_quartiles: [f64; 4],
    /// Total spent in R$
    pub monetary_quartiles: [f64; 4],
    #[serde(default)]
    pub description: String,
}

impl RfmMethodology {
    pub fn score(&self, customer: &CustomerSample) -> RfmScores {
        RfmScores::new(
            calculate_rfm_score(customer.recency_days, &self.recency_quartiles, true),
            calculate_rfm_score(customer.frequency, &self.frequency_quartiles, false),
            calculate_rfm_score(customer.monetary, &self.monetary_quartiles, false),
        )
    }
}

/// Per-dataset statistics of one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStats {
    pub id: Segment,
    pub name: String,
    pub color: String,
    pub count: u64,
    pub percentage: f64,
    /// Average spend per customer in R$
    #[serde(default)]
    pub avg_value: f64,
    #[serde(default)]
    pub strategy: String,
}

impl SegmentStats {
    pub fn total_revenue(&self) -> f64 {
        self.count as f64 * self.avg_value
    }
}

/// Customers per score 1..=5 on each axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreDistributions {
    pub recency: Vec<u64>,
    pub frequency: Vec<u64>,
    pub monetary: Vec<u64>,
}

/// Raw RFM inputs of one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSample {
    pub id: String,
    pub recency_days: f64,
    pub frequency: f64,
    pub monetary: f64,
}

impl RfmDataset {
    pub fn segment(&self, id: Segment) -> Option<&SegmentStats> {
        self.segments.iter().find(|segment| segment.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn methodology() -> RfmMethodology {
        RfmMethodology {
            recency_quartiles: [30.0, 60.0, 120.0, 240.0],
            frequency_quartiles: [1.0, 2.0, 4.0, 8.0],
            monetary_quartiles: [200.0, 500.0, 1200.0, 3000.0],
            description: String::new(),
        }
    }

    #[test]
    fn scores_recency_in_reverse() {
        let customer = CustomerSample {
            id: "C-001".into(),
            recency_days: 12.0,
            frequency: 9.0,
            monetary: 4200.0,
        };
        assert_eq!(methodology().score(&customer), RfmScores::new(5, 5, 5));

        let dormant = CustomerSample {
            id: "C-002".into(),
            recency_days: 400.0,
            frequency: 1.0,
            monetary: 90.0,
        };
        assert_eq!(methodology().score(&dormant), RfmScores::new(1, 1, 1));
    }

    #[test]
    fn parses_fixture_shape() {
        let data: RfmDataset = serde_json::from_value(json!({
            "methodology": {
                "recencyQuartiles": [30, 60, 120, 240],
                "frequencyQuartiles": [1, 2, 4, 8],
                "monetaryQuartiles": [200, 500, 1200, 3000]
            },
            "segments": [
                { "id": "champions", "name": "Champions", "color": "#10b981",
                  "count": 3620, "percentage": 8.0, "avgValue": 3250.0 }
            ]
        }))
        .unwrap();

        let champions = data.segment(Segment::Champions).unwrap();
        assert_eq!(champions.total_revenue(), 11_765_000.0);
        assert!(data.segment(Segment::Lost).is_none());
        assert!(data.customers.is_empty());
        assert_eq!(data.summary, RfmSummary::default());
    }

    #[test]
    fn segment_without_average_value() {
        let data: RfmDataset = serde_json::from_value(json!({
            "summary": { "totalCustomers": 45230 },
            "methodology": {
                "recencyQuartiles": [30, 60, 120, 240],
                "frequencyQuartiles": [1, 2, 4, 8],
                "monetaryQuartiles": [200, 500, 1200, 3000]
            },
            "segments": [
                { "id": "at_risk", "name": "At Risk", "color": "#ef4444",
                  "count": 4100, "percentage": 9.1, "strategy": "Reativação" }
            ]
        }))
        .unwrap();

        let at_risk = data.segment(Segment::AtRisk).unwrap();
        assert_eq!(at_risk.avg_value, 0.0);
        assert_eq!(at_risk.total_revenue(), 0.0);
        assert_eq!(at_risk.strategy, "Reativação");
        assert_eq!(data.summary.total_customers, 45230);
    }
}
