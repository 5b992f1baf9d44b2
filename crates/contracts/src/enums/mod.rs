pub mod channel;
pub mod cohort_period;
pub mod segment;

pub use channel::Channel;
pub use cohort_period::CohortPeriod;
pub use segment::Segment;
