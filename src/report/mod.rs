//! Console report
//!
//! Configuration, value formatting, section renderers and the generator that
//! ties them to the API client.

pub mod config;
pub mod format;
pub mod generator;
pub mod sections;

pub use config::ReportConfig;
pub use format::{format_count, format_currency, format_date, get_color};
pub use generator::{ReportGenerator, RunSummary, Section, SectionOutcome};
