use crate::enums::{Channel, CohortPeriod, Segment};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The `filters` branch of the dashboard state tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub date_range: Option<DateRange>,
    pub segment: Segment,
    pub channel: Channel,
    pub cohort_period: CohortPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_tree_shape() {
        let value = serde_json::to_value(FilterState::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "dateRange": null,
                "segment": "all",
                "channel": "all",
                "cohortPeriod": "12m"
            })
        );
    }

    #[test]
    fn partial_tree_fills_defaults() {
        let filters: FilterState =
            serde_json::from_value(json!({ "segment": "at_risk", "cohortPeriod": "6m" })).unwrap();
        assert_eq!(filters.segment, Segment::AtRisk);
        assert_eq!(filters.cohort_period, CohortPeriod::SixMonths);
        assert_eq!(filters.channel, Channel::All);
        assert!(filters.date_range.is_none());
    }

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };
        assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }
}
