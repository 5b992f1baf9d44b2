//! Loading and caching of the dashboard datasets.

mod error;
mod fetch;
mod service;

pub use error::DataError;
pub use fetch::{Fetch, FetchResponse, GlooFetch};
pub use service::{DataService, COHORT_KEY, DESCRIPTIVE_KEY, RFM_KEY};
