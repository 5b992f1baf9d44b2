use serde::{Deserialize, Serialize};

/// Look-back window of the cohort analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CohortPeriod {
    #[serde(rename = "6m")]
    SixMonths,
    #[default]
    #[serde(rename = "12m")]
    TwelveMonths,
    #[serde(rename = "24m")]
    TwentyFourMonths,
}

impl CohortPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            CohortPeriod::SixMonths => "6m",
            CohortPeriod::TwelveMonths => "12m",
            CohortPeriod::TwentyFourMonths => "24m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CohortPeriod::SixMonths => "Últimos 6 meses",
            CohortPeriod::TwelveMonths => "Últimos 12 meses",
            CohortPeriod::TwentyFourMonths => "Últimos 24 meses",
        }
    }

    /// Number of acquisition months (cohorts) covered by the window.
    pub fn months(&self) -> usize {
        match self {
            CohortPeriod::SixMonths => 6,
            CohortPeriod::TwelveMonths => 12,
            CohortPeriod::TwentyFourMonths => 24,
        }
    }

    pub fn all() -> [CohortPeriod; 3] {
        [
            CohortPeriod::SixMonths,
            CohortPeriod::TwelveMonths,
            CohortPeriod::TwentyFourMonths,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|period| period.code() == code)
    }
}
