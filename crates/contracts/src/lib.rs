//! Shared, target-independent pieces of the retention dashboard.
//!
//! Everything in here compiles for both the native test host and
//! `wasm32-unknown-unknown`: dataset DTOs, filter enums, the calculation and
//! formatting utilities, and the chart configuration handed to Chart.js.

pub mod dashboards;
pub mod enums;
pub mod shared;
