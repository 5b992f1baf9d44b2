use super::view::{View, ViewContext, ViewFactory};
use crate::dashboards::{
    d000_presentation, d010_business_problem, d100_cohort_analysis, d200_rfm_segmentation,
    d300_descriptive_a, d310_descriptive_b,
};
use std::rc::Rc;

fn factory<V: View + 'static>(build: fn(&ViewContext) -> V) -> ViewFactory {
    Rc::new(move |ctx: &ViewContext| Box::new(build(ctx)) as Box<dyn View>)
}

/// Path → view factory for every page of the dashboard.
pub fn default_registry() -> Vec<(String, ViewFactory)> {
    vec![
        ("/".to_string(), factory(d000_presentation::PresentationView::new)),
        ("/problem".to_string(), factory(d010_business_problem::BusinessProblemView::new)),
        ("/cohort".to_string(), factory(d100_cohort_analysis::CohortAnalysisView::new)),
        ("/rfm".to_string(), factory(d200_rfm_segmentation::RfmSegmentationView::new)),
        ("/descriptive-a".to_string(), factory(d300_descriptive_a::DescriptiveAView::new)),
        ("/descriptive-b".to_string(), factory(d310_descriptive_b::DescriptiveBView::new)),
    ]
}
