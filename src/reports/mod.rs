//! Reports module for finman
//!
//! Combines storage reads with the summary calculations into printable
//! reports: the income/expense overview and the savings projection.

pub mod overview;
pub mod projection;

pub use overview::OverviewReport;
pub use projection::ProjectionReport;
