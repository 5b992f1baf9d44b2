mod charts;
pub mod dashboard;
mod scoring;
mod template;
