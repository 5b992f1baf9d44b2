//! Dashboard pages mounted by the router.

pub mod d000_presentation;
pub mod d010_business_problem;
pub mod d100_cohort_analysis;
pub mod d200_rfm_segmentation;
pub mod d300_descriptive_a;
pub mod d310_descriptive_b;
pub mod loader;

pub use d000_presentation::PresentationView;
pub use d010_business_problem::BusinessProblemView;
pub use d100_cohort_analysis::CohortAnalysisView;
pub use d200_rfm_segmentation::RfmSegmentationView;
pub use d300_descriptive_a::DescriptiveAView;
pub use d310_descriptive_b::DescriptiveBView;
