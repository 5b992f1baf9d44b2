use contracts::dashboards::d200_rfm_segmentation::{CustomerSample, RfmDataset};
use contracts::enums::Segment;
use contracts::shared::analytics::{classify_rfm, RfmScores, RfmSegmentDef};

/// A sample customer with its scores and catalog segment.
pub struct ScoredCustomer<'a> {
    pub customer: &'a CustomerSample,
    pub scores: RfmScores,
    pub segment: Option<&'static RfmSegmentDef>,
}

impl ScoredCustomer<'_> {
    pub fn in_segment(&self, filter: Segment) -> bool {
        match filter {
            Segment::All => true,
            wanted => self.segment.map(|def| def.id) == Some(wanted),
        }
    }
}

pub fn score_customers(dataset: &RfmDataset) -> Vec<ScoredCustomer<'_>> {
    dataset
        .customers
        .iter()
        .map(|customer| {
            let scores = dataset.methodology.score(customer);
            ScoredCustomer {
                customer,
                scores,
                segment: classify_rfm(scores),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::RFM_FIXTURE;

    #[test]
    fn fixture_customers_are_scored_and_classified() {
        let dataset: RfmDataset = serde_json::from_str(RFM_FIXTURE).unwrap();
        let scored = score_customers(&dataset);
        assert_eq!(scored.len(), dataset.customers.len());

        let first = &scored[0];
        assert_eq!(first.scores.code(), "555");
        assert_eq!(first.segment.map(|def| def.id), Some(Segment::Champions));

        // Recent first purchase, tiny ticket: the catalog places it before Recent Customers.
        let newcomer = scored
            .iter()
            .find(|s| s.customer.id == "C-11002")
            .unwrap();
        assert_eq!(newcomer.segment.map(|def| def.id), Some(Segment::PotentialLoyalist));

        let outlier = scored.iter().find(|s| s.customer.id == "C-14120").unwrap();
        assert_eq!(outlier.scores.code(), "115");
        assert!(outlier.segment.is_none());
    }

    #[test]
    fn all_filter_keeps_unclassified() {
        let dataset: RfmDataset = serde_json::from_str(RFM_FIXTURE).unwrap();
        let scored = score_customers(&dataset);
        assert!(scored.iter().all(|s| s.in_segment(Segment::All)));
        assert_eq!(
            scored.iter().filter(|s| s.in_segment(Segment::Champions)).count(),
            3
        );
    }
}
