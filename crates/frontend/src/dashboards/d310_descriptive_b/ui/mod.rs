mod charts;
pub mod dashboard;
mod economics;
