//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::collections::HashMap;

use crate::api::{ApiResponse, Transport};
use crate::error::ReportError;

/// In-memory [`Transport`] that answers from canned responses.
///
/// Paths without a canned response fail with a request error, the same way a
/// refused connection would.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: HashMap<String, ApiResponse>,
}

impl FakeTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with 200 OK and `body`.
    #[must_use]
    pub fn with_ok(self, path: &str, body: &str) -> Self {
        self.with_status(path, 200, body)
    }

    /// Answer `path` with an arbitrary status and body.
    #[must_use]
    pub fn with_status(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            ApiResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }
}

impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<ApiResponse, ReportError> {
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| ReportError::Request(format!("connection refused: {path}")))
    }
}
