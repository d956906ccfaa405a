//! usaspending-report - USAspending console reports
//!
//! Fetches new-award counts, federal accounts and the agency reporting
//! overview from the USAspending API and prints them as colored text.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod error;
pub mod report;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use api::{HttpTransport, SpendingClient, Transport};
pub use error::ReportError;
pub use report::{ReportConfig, ReportGenerator, RunSummary, Section, SectionOutcome};
