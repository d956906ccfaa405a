//! USAspending API access
//!
//! HTTP transport, endpoint paths and typed response models.

pub mod client;
pub mod models;

pub use client::{ApiResponse, Endpoint, HttpTransport, SpendingClient, Transport};
pub use models::{
    Account, AgencyOverviewPage, Agency, AwardCounts, AwardTotal, ChildAccount,
    FederalAccountPage, PageMetadata, TasDiscrepancy,
};
