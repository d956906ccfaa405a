//! Report generator
//!
//! Runs the three sections in order. A section that fails prints its error
//! and the run moves on; only a failure to write the report stops it.

use std::io::Write;

use colored::Colorize;
use tracing::{debug, warn};

use super::sections::{render_agencies_overview, render_award_counts, render_federal_accounts};
use crate::api::{SpendingClient, Transport};
use crate::error::ReportError;

/// One part of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// New award counts for the configured agency
    NewAwardCount,
    /// Federal accounts of the configured agency
    FederalAccounts,
    /// Reporting overview across all agencies
    AgenciesOverview,
}

impl Section {
    /// Sections in the order they are printed
    pub const ALL: [Self; 3] = [
        Self::NewAwardCount,
        Self::FederalAccounts,
        Self::AgenciesOverview,
    ];

    /// Heading line, e.g. `=== DOJ NEW AWARDS COUNT ===`
    #[must_use]
    pub fn heading(self, agency_label: &str) -> String {
        match self {
            Self::NewAwardCount => format!("=== {agency_label} NEW AWARDS COUNT ==="),
            Self::FederalAccounts => format!("=== {agency_label} FEDERAL ACCOUNTS ==="),
            Self::AgenciesOverview => "=== AGENCIES OVERVIEW ===".to_string(),
        }
    }

    /// Lowercase name used in failure messages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NewAwardCount => "awards count",
            Self::FederalAccounts => "federal accounts",
            Self::AgenciesOverview => "agencies overview",
        }
    }
}

/// How a single section ended
#[derive(Debug)]
pub enum SectionOutcome {
    /// The section was fetched and printed
    Rendered,
    /// The section printed an error line instead
    Failed(ReportError),
}

/// Per-section outcomes of one run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Outcomes in section order
    pub outcomes: Vec<(Section, SectionOutcome)>,
}

impl RunSummary {
    /// Returns true if every section rendered
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0
    }

    /// Returns the number of sections that failed
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, SectionOutcome::Failed(_)))
            .count()
    }

    /// Outcome recorded for `section`, if it ran
    #[must_use]
    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, o)| o)
    }
}

/// Fetches each section through a [`SpendingClient`] and prints it
pub struct ReportGenerator<T> {
    client: SpendingClient<T>,
    agency_label: String,
}

impl<T: Transport> ReportGenerator<T> {
    /// Create a generator; `agency_label` appears in the per-agency headings.
    #[must_use]
    pub fn new(client: SpendingClient<T>, agency_label: impl Into<String>) -> Self {
        Self {
            client,
            agency_label: agency_label.into(),
        }
    }

    /// Write the full report to `out`.
    ///
    /// Returns an error only when writing to `out` fails; every other failure
    /// is printed in place of its section and recorded in the summary.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, ReportError> {
        let mut summary = RunSummary::default();

        for section in Section::ALL {
            writeln!(out, "\n{}", section.heading(&self.agency_label).bold())?;
            debug!(section = section.description(), "rendering section");

            match self.render_section(section, out).await {
                Ok(()) => summary.outcomes.push((section, SectionOutcome::Rendered)),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(section = section.description(), error = %err, "section failed");
                    writeln!(out, "{}", failure_line(section, &err).red())?;
                    summary.outcomes.push((section, SectionOutcome::Failed(err)));
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }

    async fn render_section<W: Write>(
        &self,
        section: Section,
        out: &mut W,
    ) -> Result<(), ReportError> {
        match section {
            Section::NewAwardCount => {
                let counts = self.client.new_award_counts().await?;
                render_award_counts(out, &counts)
            }
            Section::FederalAccounts => {
                let page = self.client.federal_accounts().await?;
                render_federal_accounts(out, &page)
            }
            Section::AgenciesOverview => {
                let page = self.client.agencies_overview().await?;
                render_agencies_overview(out, &page)
            }
        }
    }
}

/// Message printed in place of a failed section
fn failure_line(section: Section, err: &ReportError) -> String {
    match err {
        ReportError::Status(code) => format!(
            "Error fetching {}. Status code: {code}",
            section.description()
        ),
        other => format!("Error: {other}"),
    }
}
