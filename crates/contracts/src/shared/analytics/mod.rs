//! Statistical and business calculations.
//!
//! Every function is total: empty or degenerate input degrades to `0.0`
//! instead of failing, so a view can always render something.

pub mod business;
pub mod rfm;
pub mod stats;

pub use business::{
    calculate_churn_rate, calculate_growth_rate, calculate_ltv, calculate_retention_rate,
    retention_color,
};
pub use rfm::{calculate_rfm_score, classify_rfm, RfmScores, RfmSegmentDef, RFM_SEGMENTS};
pub use stats::{correlation, max, mean, median, min, percentile, standard_deviation, sum};
