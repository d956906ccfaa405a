//! Report configuration parser
//!
//! Parses an optional `report.toml` into the endpoint and client settings
//! used by the generator. Every field has a default, so an empty file (or no
//! file at all) targets the Department of Justice on the public API.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Public USAspending API host
pub const DEFAULT_BASE_URL: &str = "https://api.usaspending.gov";

/// Toptier code of the Department of Justice
pub const DEFAULT_AGENCY_CODE: &str = "015";

/// Top-level configuration parsed from `report.toml`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Scheme and host of the API, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Toptier code used by the per-agency endpoints
    #[serde(default = "default_agency_code")]
    pub agency_code: String,
    /// Short agency name shown in section headings (e.g. "DOJ")
    #[serde(default = "default_agency_label")]
    pub agency_label: String,
    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_agency_code() -> String {
    DEFAULT_AGENCY_CODE.to_string()
}

fn default_agency_label() -> String {
    "DOJ".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            agency_code: default_agency_code(),
            agency_label: default_agency_label(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ReportConfig {
    /// Parse a report.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse report.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).context("Failed to parse report.toml")?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!(
                "Invalid base_url '{}': must start with http:// or https://",
                self.base_url
            );
        }

        validate_agency_code(&self.agency_code)?;

        if self.agency_label.trim().is_empty() {
            bail!("agency_label cannot be empty");
        }

        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }

        Ok(())
    }
}

/// Toptier codes are three digits (CGAC) or four digits (FREC).
fn validate_agency_code(code: &str) -> Result<()> {
    if !(3..=4).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_digit()) {
        bail!("Invalid agency_code '{code}': expected a 3 or 4 digit toptier code");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ReportConfig::parse("").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.base_url, "https://api.usaspending.gov");
        assert_eq!(config.agency_code, "015");
        assert_eq!(config.agency_label, "DOJ");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_overrides() {
        let config = ReportConfig::parse(
            r#"
base_url = "http://localhost:8080/"
agency_code = "1601"
agency_label = "DOL"
timeout_secs = 5
"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.agency_code, "1601");
        assert_eq!(config.agency_label, "DOL");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_reject_non_http_base_url() {
        let err = ReportConfig::parse(r#"base_url = "ftp://example.com""#).unwrap_err();
        assert!(err.to_string().contains("Invalid base_url"));
    }

    #[test]
    fn test_reject_bad_agency_code() {
        for code in ["15", "01a", "12345", ""] {
            let toml = format!("agency_code = \"{code}\"");
            assert!(ReportConfig::parse(&toml).is_err(), "accepted '{code}'");
        }
    }

    #[test]
    fn test_reject_blank_label() {
        assert!(ReportConfig::parse(r#"agency_label = "  ""#).is_err());
    }

    #[test]
    fn test_reject_zero_timeout() {
        let err = ReportConfig::parse("timeout_secs = 0").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_reject_malformed_toml() {
        let err = ReportConfig::parse("timeout_secs = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse report.toml"));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "agency_code = \"020\"").unwrap();

        let config = ReportConfig::from_path(file.path()).unwrap();
        assert_eq!(config.agency_code, "020");
        assert_eq!(config.agency_label, "DOJ");
    }

    #[test]
    fn test_from_missing_path() {
        let err = ReportConfig::from_path("/nonexistent/report.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
