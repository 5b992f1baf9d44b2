mod charts;
pub mod dashboard;
