pub mod analytics;
pub mod charts;
pub mod filters;
pub mod format;
