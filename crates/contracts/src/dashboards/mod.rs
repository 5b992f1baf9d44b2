//! Dataset shapes of the JSON fixtures, one module per dashboard.

pub mod d100_cohort_analysis;
pub mod d200_rfm_segmentation;
pub mod d300_descriptive;
