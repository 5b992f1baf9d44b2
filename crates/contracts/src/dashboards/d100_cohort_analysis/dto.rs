use crate::shared::analytics::{mean, standard_deviation};
use serde::{Deserialize, Serialize};

/// Contents of `sample-cohort.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortDataset {
    /// ISO date of the extraction, when known.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub summary: CohortSummary,
    /// Acquisition cohorts, oldest first.
    pub cohorts: Vec<CohortRecord>,
}

/// Totals over every cohort of the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CohortSummary {
    pub total_customers: u64,
    pub total_cohorts: u64,
}

/// One acquisition cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortRecord {
    /// Display name, e.g. `Jan/24`
    pub name: String,
    /// Customers acquired in the cohort month; 0 when the file omits it
    #[serde(default)]
    pub size: u64,
    /// Revenue of the cohort in R$ thousands
    #[serde(default)]
    pub revenue: f64,
    /// Retention percentage by month offset; `None` means not observed yet
    pub retention: Vec<Option<f64>>,
}

impl CohortRecord {
    pub fn retention_at(&self, offset: usize) -> Option<f64> {
        self.retention.get(offset).copied().flatten()
    }
}

impl CohortDataset {
    /// The `count` most recent cohorts (all of them when fewer exist).
    pub fn recent(&self, count: usize) -> &[CohortRecord] {
        let skip = self.cohorts.len().saturating_sub(count);
        &self.cohorts[skip..]
    }
}

/// Number of month-offset columns needed to show every cohort.
pub fn max_offset(cohorts: &[CohortRecord]) -> usize {
    cohorts
        .iter()
        .map(|cohort| cohort.retention.len())
        .max()
        .unwrap_or(0)
}

/// Observed retention values of every cohort at `offset`.
pub fn retention_column(cohorts: &[CohortRecord], offset: usize) -> Vec<f64> {
    cohorts
        .iter()
        .filter_map(|cohort| cohort.retention_at(offset))
        .collect()
}

/// Headline numbers derived from a set of cohorts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CohortInsights {
    /// Cohort with the highest M+1 retention and that retention
    pub best_m1: Option<(String, f64)>,
    /// Mean retention at M+3 over the cohorts that reached it
    pub mean_m3: f64,
    /// Mean retention at M+6 over the cohorts that reached it
    pub mean_m6: f64,
    /// Population standard deviation of M+1 retention across cohorts
    pub m1_spread: f64,
}

impl CohortInsights {
    pub fn compute(cohorts: &[CohortRecord]) -> Self {
        let best_m1 = cohorts
            .iter()
            .filter_map(|cohort| cohort.retention_at(1).map(|value| (cohort, value)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(cohort, value)| (cohort.name.clone(), value));

        let m1 = retention_column(cohorts, 1);

        Self {
            best_m1,
            mean_m3: mean(&retention_column(cohorts, 3)),
            mean_m6: mean(&retention_column(cohorts, 6)),
            m1_spread: standard_deviation(&m1),
        }
    }
}
