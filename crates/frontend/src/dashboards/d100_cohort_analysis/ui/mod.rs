mod charts;
pub mod dashboard;
mod template;
