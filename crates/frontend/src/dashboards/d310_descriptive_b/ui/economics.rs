use contracts::dashboards::d300_descriptive::DescriptiveDataset;
use contracts::shared::analytics::{calculate_growth_rate, mean};

/// Headline unit economics of the descriptive dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitEconomics {
    pub avg_cac: f64,
    pub avg_ltv: f64,
    /// Mean LTV over mean CAC; 0 without CAC
    pub ltv_to_cac: f64,
    /// Churn rate of the latest month, in percent
    pub churn_rate: f64,
    /// Growth of the churn rate against the month before, in percent
    pub churn_change: f64,
}

impl UnitEconomics {
    pub fn compute(data: &DescriptiveDataset) -> Self {
        let ltvs: Vec<f64> = data.segment_economics.iter().map(|s| s.ltv()).collect();
        let avg_cac = data.average_cac();
        let avg_ltv = mean(&ltvs);

        let rates: Vec<f64> = data.churn.iter().map(|point| point.churn_rate()).collect();
        let (churn_rate, churn_change) = match rates.as_slice() {
            [.., previous, latest] => (*latest, calculate_growth_rate(*latest, *previous)),
            [only] => (*only, 0.0),
            [] => (0.0, 0.0),
        };

        Self {
            avg_cac,
            avg_ltv,
            ltv_to_cac: if avg_cac == 0.0 { 0.0 } else { avg_ltv / avg_cac },
            churn_rate,
            churn_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::DESCRIPTIVE_FIXTURE;

    #[test]
    fn fixture_economics() {
        let data: DescriptiveDataset = serde_json::from_str(DESCRIPTIVE_FIXTURE).unwrap();
        let economics = UnitEconomics::compute(&data);

        assert_eq!(economics.avg_cac, 180.0);
        assert!((economics.avg_ltv - 1460.9).abs() < 1e-9);
        assert!((economics.ltv_to_cac - 1460.9 / 180.0).abs() < 1e-9);
        assert!((economics.churn_rate - 1310.0 / 45230.0 * 100.0).abs() < 1e-9);
        assert!(economics.churn_change < 0.0);
    }

    #[test]
    fn empty_dataset_is_all_zero() {
        assert_eq!(
            UnitEconomics::compute(&DescriptiveDataset::default()),
            UnitEconomics::default()
        );
    }
}
