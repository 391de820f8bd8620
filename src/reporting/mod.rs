//! # Reporting
//!
//! Read-only aggregation over the order history and menu catalog. Nothing here is
//! persisted; every report is recomputed from a full snapshot.
//!
//! - [`window`] - [`ReportWindow`] and its [`TimeRange`]
//! - [`metrics`] - the individual folds (revenue, best sellers, peak hour, ...)
//! - [`report`] - [`SalesReport`], all metrics for one window

pub mod metrics;
pub mod report;
pub mod window;

pub use metrics::*;
pub use report::*;
pub use window::*;
