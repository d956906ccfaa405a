//! Section renderers
//!
//! Each renderer writes one decoded response as console text. Headings and
//! failure lines are written by the generator, not here.

use std::io::Write;

use colored::{Color, Colorize};

use super::format::{
    display_or_placeholder, format_count, format_currency, format_date, format_label,
    get_color, text_or_placeholder,
};
use crate::api::{Account, AgencyOverviewPage, Agency, AwardCounts, FederalAccountPage};
use crate::error::ReportError;

const RULE_WIDTH: usize = 50;

/// Render the new-award breakdown and its total.
pub fn render_award_counts<W: Write>(out: &mut W, counts: &AwardCounts) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(out, "NEW AWARDS BREAKDOWN")?;
    for (key, value) in counts.iter() {
        writeln!(out, "{}: {}", format_label(key), display_value(value))?;
    }
    writeln!(out, "\nTotal New Awards: {}", counts.total())?;
    Ok(())
}

/// Values print bare: strings without quotes, null as the placeholder.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => display_or_placeholder::<&str>(None),
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Render the federal account page: metadata, then each account with its children.
pub fn render_federal_accounts<W: Write>(
    out: &mut W,
    page: &FederalAccountPage,
) -> Result<(), ReportError> {
    let meta = &page.page_metadata;
    writeln!(
        out,
        "\nTotal Federal Accounts: {}",
        display_or_placeholder(meta.total)
    )?;
    if let Some(year) = page.fiscal_year {
        writeln!(out, "Fiscal Year: {year}")?;
    }
    if let Some(code) = page.toptier_code.as_deref() {
        writeln!(out, "Agency Code: {code}")?;
    }
    writeln!(
        out,
        "Page: {} of {}",
        display_or_placeholder(meta.page),
        display_or_placeholder(meta.page_count())
    )?;
    writeln!(
        out,
        "Results per page: {}\n",
        display_or_placeholder(meta.limit)
    )?;

    for (idx, account) in page.results.iter().enumerate() {
        render_account(out, account, get_color(idx))?;
    }
    Ok(())
}

fn render_account<W: Write>(out: &mut W, account: &Account, color: Color) -> Result<(), ReportError> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{}",
        format!("Account: {}", text_or_placeholder(account.name.as_deref())).color(color)
    )?;
    writeln!(out, "Code: {}", text_or_placeholder(account.code.as_deref()))?;
    writeln!(out, "\nChildren Accounts:")?;

    for child in &account.children {
        writeln!(out, "\n  {}", "-".repeat(RULE_WIDTH - 2))?;
        writeln!(
            out,
            "  {}",
            format!("Name: {}", text_or_placeholder(child.name.as_deref())).color(color)
        )?;
        writeln!(out, "  Code: {}", text_or_placeholder(child.code.as_deref()))?;
        writeln!(
            out,
            "  Obligated Amount: {}",
            format_currency(child.obligated_amount)
        )?;
        writeln!(
            out,
            "  Gross Outlay Amount: {}",
            format_currency(child.gross_outlay_amount)
        )?;
    }

    writeln!(out, "\nAccount Totals:")?;
    writeln!(
        out,
        "Total Obligated Amount: {}",
        format_currency(account.obligated_amount)
    )?;
    writeln!(
        out,
        "Total Gross Outlay Amount: {}",
        format_currency(account.gross_outlay_amount)
    )?;
    writeln!(out, "{}\n", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Render the agencies overview page: pagination block, then one block per agency.
pub fn render_agencies_overview<W: Write>(
    out: &mut W,
    page: &AgencyOverviewPage,
) -> Result<(), ReportError> {
    let meta = &page.page_metadata;
    writeln!(out, "\n=== PAGINATION INFO ===")?;
    writeln!(out, "Page: {}", display_or_placeholder(meta.page))?;
    writeln!(out, "Total Agencies: {}", display_or_placeholder(meta.total))?;
    writeln!(out, "Results per page: {}", display_or_placeholder(meta.limit))?;

    for agency in &page.results {
        render_agency(out, agency)?;
    }
    Ok(())
}

fn render_agency<W: Write>(out: &mut W, agency: &Agency) -> Result<(), ReportError> {
    // Parse first so a bad timestamp doesn't leave a half-written block.
    let published = format_date(agency.recent_publication_date.as_deref())?;

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{}",
        format!(
            "AGENCY: {} ({})",
            text_or_placeholder(agency.agency_name.as_deref()),
            text_or_placeholder(agency.abbreviation.as_deref())
        )
        .blue()
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "Agency Code: {}",
        text_or_placeholder(agency.toptier_code.as_deref())
    )?;
    writeln!(out, "Agency ID: {}", display_or_placeholder(agency.agency_id))?;
    writeln!(
        out,
        "Budget Authority: {}",
        format_currency(agency.current_total_budget_authority_amount)
    )?;

    writeln!(out, "\nPublication Date: {}", published.green())?;
    writeln!(
        out,
        "Certified: {}",
        if agency.recent_publication_date_certified {
            "Yes"
        } else {
            "No"
        }
    )?;

    let tas = &agency.tas_account_discrepancies_totals;
    writeln!(out, "\nTAS ACCOUNT INFORMATION:")?;
    writeln!(
        out,
        "GTAS Obligation Total: {}",
        format_currency(tas.gtas_obligation_total)
    )?;
    writeln!(
        out,
        "TAS Accounts Total: {}",
        format_currency(tas.tas_accounts_total)
    )?;
    writeln!(out, "Missing TAS Accounts: {}", tas.missing_tas_accounts_count)?;

    writeln!(out, "\nAWARD INFORMATION:")?;
    writeln!(
        out,
        "Unlinked Contract Awards: {}",
        format_count(agency.unlinked_contract_award_count)
    )?;
    writeln!(
        out,
        "Unlinked Assistance Awards: {}",
        format_count(agency.unlinked_assistance_award_count)
    )?;
    writeln!(
        out,
        "Obligation Difference: {}",
        format_currency(agency.obligation_difference)
    )?;
    Ok(())
}
