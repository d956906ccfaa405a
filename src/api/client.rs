//! USAspending API client
//!
//! [`Transport`] performs a raw GET and hands back status and body;
//! [`SpendingClient`] layers endpoint paths, status checks and decoding on
//! top of it so the same logic runs against the network or a canned fake.

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::models::{AgencyOverviewPage, AwardCounts, FederalAccountPage};
use crate::error::ReportError;
use crate::report::config::ReportConfig;

/// Status code and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

/// Something that can GET a path relative to the API base URL.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issue a GET for `path` and return the response, whatever its status.
    async fn get(&self, path: &str) -> Result<ApiResponse, ReportError>;
}

/// [`Transport`] backed by `reqwest`
pub struct HttpTransport {
    http_client: HttpClient,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for the configured base URL and request timeout.
    pub fn new(config: &ReportConfig) -> Result<Self, ReportError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ReportError::Request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<ApiResponse, ReportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ReportError::Request(format!("Failed to read body: {e}")))?;

        debug!(%url, status, bytes = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}

/// The three endpoints the report reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// New award counts for one agency
    NewAwardCount,
    /// Federal accounts of one agency
    FederalAccounts,
    /// Reporting overview of all agencies
    AgenciesOverview,
}

impl Endpoint {
    /// Path of the endpoint for the given toptier code
    #[must_use]
    pub fn path(self, agency_code: &str) -> String {
        match self {
            Self::NewAwardCount => format!("/api/v2/agency/{agency_code}/awards/new/count/"),
            Self::FederalAccounts => format!("/api/v2/agency/{agency_code}/federal_account/"),
            Self::AgenciesOverview => "/api/v2/reporting/agencies/overview/".to_string(),
        }
    }
}

/// Typed access to the report endpoints over any [`Transport`]
pub struct SpendingClient<T> {
    transport: T,
    agency_code: String,
}

impl<T: Transport> SpendingClient<T> {
    /// Create a client scoped to one toptier agency
    #[must_use]
    pub fn new(transport: T, agency_code: impl Into<String>) -> Self {
        Self {
            transport,
            agency_code: agency_code.into(),
        }
    }

    /// GET `/api/v2/agency/{code}/awards/new/count/`
    pub async fn new_award_counts(&self) -> Result<AwardCounts, ReportError> {
        self.fetch(Endpoint::NewAwardCount).await
    }

    /// GET `/api/v2/agency/{code}/federal_account/`
    pub async fn federal_accounts(&self) -> Result<FederalAccountPage, ReportError> {
        self.fetch(Endpoint::FederalAccounts).await
    }

    /// GET `/api/v2/reporting/agencies/overview/`
    pub async fn agencies_overview(&self) -> Result<AgencyOverviewPage, ReportError> {
        self.fetch(Endpoint::AgenciesOverview).await
    }

    async fn fetch<M: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<M, ReportError> {
        let path = endpoint.path(&self.agency_code);
        let response = self.transport.get(&path).await?;

        if response.status != 200 {
            debug!(path = %path, status = response.status, "unexpected status");
            return Err(ReportError::Status(response.status));
        }

        decode_object(&response.body)
    }
}

/// Decode a body that must be a JSON object into `M`.
fn decode_object<M: DeserializeOwned>(body: &str) -> Result<M, ReportError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ReportError::Shape(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
