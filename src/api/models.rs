//! Response models for the USAspending endpoints
//!
//! Fields the API may omit or send as `null` fall back to their defaults:
//! zero for amounts and counts, `None` for text (rendered as `N/A`).

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserialize `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `/api/v2/agency/{code}/awards/new/count/`.
///
/// Kept as a raw object: the report prints every key the API sends and totals
/// whichever values are numeric.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AwardCounts(pub Map<String, Value>);

impl AwardCounts {
    /// Entries in response order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Sum of the numeric values. Strings, nulls, booleans and nested values
    /// are skipped.
    #[must_use]
    pub fn total(&self) -> AwardTotal {
        self.0
            .values()
            .fold(AwardTotal::Integer(0), |acc, value| match value {
                Value::Number(n) => acc.accumulate(n),
                _ => acc,
            })
    }
}

/// Sum of award counts; stays integral until a fractional value shows up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AwardTotal {
    /// Every value seen so far was an integer
    Integer(i64),
    /// At least one value was fractional (or out of `i64` range)
    Decimal(f64),
}

impl AwardTotal {
    #[allow(clippy::cast_precision_loss)]
    fn accumulate(self, n: &serde_json::Number) -> Self {
        match (self, n.as_i64()) {
            (Self::Integer(sum), Some(v)) => sum
                .checked_add(v)
                .map_or(Self::Decimal(sum as f64 + v as f64), Self::Integer),
            (Self::Integer(sum), None) => Self::Decimal(sum as f64 + n.as_f64().unwrap_or(0.0)),
            (Self::Decimal(sum), _) => Self::Decimal(sum + n.as_f64().unwrap_or(0.0)),
        }
    }
}

impl fmt::Display for AwardTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// Pagination block shared by the list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMetadata {
    /// Current page number (1-based)
    #[serde(default)]
    pub page: Option<u64>,
    /// Total number of records across all pages
    #[serde(default)]
    pub total: Option<u64>,
    /// Records per page
    #[serde(default)]
    pub limit: Option<u64>,
}

impl PageMetadata {
    /// Number of pages implied by `total` and `limit`, if both are known.
    ///
    /// `total` counts records, not pages, so the "Page X of Y" line divides it
    /// by `limit` instead of printing it directly.
    #[must_use]
    pub fn page_count(&self) -> Option<u64> {
        match (self.total, self.limit) {
            (Some(total), Some(limit)) if limit > 0 => Some(total.div_ceil(limit).max(1)),
            _ => None,
        }
    }
}

/// Body of `/api/v2/agency/{code}/federal_account/`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FederalAccountPage {
    /// Toptier code the accounts belong to
    #[serde(default)]
    pub toptier_code: Option<String>,
    /// Fiscal year the amounts cover
    #[serde(default)]
    pub fiscal_year: Option<i32>,
    /// Pagination block
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_metadata: PageMetadata,
    /// Federal accounts on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Account>,
}

/// A federal account and its treasury sub-accounts
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Account {
    /// Account title
    #[serde(default)]
    pub name: Option<String>,
    /// Federal account code (e.g. "015-0129")
    #[serde(default)]
    pub code: Option<String>,
    /// Total obligated amount
    #[serde(default, deserialize_with = "null_as_default")]
    pub obligated_amount: f64,
    /// Total gross outlay amount
    #[serde(default, deserialize_with = "null_as_default")]
    pub gross_outlay_amount: f64,
    /// Treasury account symbols under this account
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<ChildAccount>,
}

/// A treasury account nested under a federal account
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChildAccount {
    /// Account title
    #[serde(default)]
    pub name: Option<String>,
    /// Treasury account symbol
    #[serde(default)]
    pub code: Option<String>,
    /// Obligated amount
    #[serde(default, deserialize_with = "null_as_default")]
    pub obligated_amount: f64,
    /// Gross outlay amount
    #[serde(default, deserialize_with = "null_as_default")]
    pub gross_outlay_amount: f64,
}

/// Body of `/api/v2/reporting/agencies/overview/`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AgencyOverviewPage {
    /// Pagination block
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_metadata: PageMetadata,
    /// Agencies on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Agency>,
}

/// Reporting overview of one toptier agency
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Agency {
    /// Full agency name
    #[serde(default)]
    pub agency_name: Option<String>,
    /// Agency abbreviation (e.g. "DOJ")
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// Toptier code
    #[serde(default)]
    pub toptier_code: Option<String>,
    /// Internal agency id
    #[serde(default)]
    pub agency_id: Option<i64>,
    /// Current total budget authority
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_total_budget_authority_amount: f64,
    /// Timestamp of the most recent submission publication
    #[serde(default)]
    pub recent_publication_date: Option<String>,
    /// Whether the most recent publication was certified
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_publication_date_certified: bool,
    /// GTAS vs. TAS reconciliation totals
    #[serde(default, deserialize_with = "null_as_default")]
    pub tas_account_discrepancies_totals: TasDiscrepancy,
    /// Contract awards without a linked financial record
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlinked_contract_award_count: i64,
    /// Assistance awards without a linked financial record
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlinked_assistance_award_count: i64,
    /// Difference between File A and File B obligations
    #[serde(default, deserialize_with = "null_as_default")]
    pub obligation_difference: f64,
}

/// Treasury account symbol discrepancy totals for an agency
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TasDiscrepancy {
    /// Obligations reported to GTAS
    #[serde(default, deserialize_with = "null_as_default")]
    pub gtas_obligation_total: f64,
    /// Obligations across the agency's TAS accounts
    #[serde(default, deserialize_with = "null_as_default")]
    pub tas_accounts_total: f64,
    /// TAS accounts present in GTAS but missing from the submission
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_tas_accounts_count: i64,
}
