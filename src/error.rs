//! Error types for fetching and rendering report sections

use thiserror::Error;

/// Errors raised while fetching or rendering a single report section.
///
/// Everything except [`ReportError::Io`] is confined to the section that
/// produced it; the generator prints it and moves on to the next section.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The request never produced a response (connection, TLS, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// The endpoint answered with something other than 200 OK
    #[error("Status code: {0}")]
    Status(u16),

    /// The body was not valid JSON or did not match the expected model
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was valid JSON but not the top-level shape the endpoint promises
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// A timestamp in the response could not be parsed
    #[error("Invalid timestamp '{value}': {source}")]
    Date {
        /// The raw timestamp text
        value: String,
        /// Underlying parser error
        source: chrono::ParseError,
    },

    /// Writing the report to the output stream failed
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Whether this error should stop the whole run instead of a single section.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code() {
        assert_eq!(ReportError::Status(503).to_string(), "Status code: 503");
    }

    #[test]
    fn test_only_io_is_fatal() {
        assert!(ReportError::Io(std::io::Error::other("closed")).is_fatal());
        assert!(!ReportError::Status(404).is_fatal());
        assert!(!ReportError::Shape("array".to_string()).is_fatal());
        assert!(!ReportError::Request("timeout".to_string()).is_fatal());
    }

    #[test]
    fn test_decode_converts_from_serde_error() {
        let err: ReportError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Failed to parse response"));
    }
}
