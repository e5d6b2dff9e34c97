// src/models/config.rs

//! Client configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LmsError, Result};
use crate::models::PortalSelectors;

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Portal origins
    #[serde(default)]
    pub portal: PortalConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Fixed values of the portal's wire contract
    #[serde(default)]
    pub wire: WireConfig,

    /// Markup selectors
    #[serde(default)]
    pub selectors: PortalSelectors,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        for (name, origin) in [
            ("portal.base_url", &self.portal.base_url),
            ("portal.login_base_url", &self.portal.login_base_url),
        ] {
            url::Url::parse(origin)
                .map_err(|e| LmsError::config(format!("{name} '{origin}' is invalid: {e}")))?;
        }

        if self.wire.encoding.trim().is_empty() {
            return Err(LmsError::config("wire.encoding is empty"));
        }
        if self.wire.min_display == 0 {
            return Err(LmsError::config("wire.min_display must be > 0"));
        }
        if self.wire.page_size < self.wire.min_display {
            return Err(LmsError::config(format!(
                "wire.page_size ({}) must be >= wire.min_display ({})",
                self.wire.page_size, self.wire.min_display
            )));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(LmsError::config("http.timeout_secs must be > 0 when set"));
        }
        for (name, selector) in self.selectors.entries() {
            if selector.trim().is_empty() {
                return Err(LmsError::config(format!("selectors.{name} is empty")));
            }
            scraper::Selector::parse(selector)
                .map_err(|e| LmsError::selector(selector, format!("{e:?}")))?;
        }
        Ok(())
    }

    /// Absolute URL of a portal path on the plain origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.portal.base_url.trim_end_matches('/'), path)
    }

    /// Absolute URL of a portal path on the login origin.
    pub fn login_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.portal.login_base_url.trim_end_matches('/'),
            path
        )
    }
}

/// Portal origins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// Origin used for scraping and AJAX calls
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Origin used for the credential POST
    #[serde(default = "defaults::login_base_url")]
    pub login_base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            login_base_url: defaults::login_base_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Skip certificate verification. The portal serves a certificate that
    /// does not validate, so this is on by default.
    #[serde(default = "defaults::accept_invalid_certs")]
    pub accept_invalid_certs: bool,

    /// Optional request timeout in seconds; none by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            accept_invalid_certs: defaults::accept_invalid_certs(),
            timeout_secs: None,
        }
    }
}

/// Every fixed value the portal expects on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireConfig {
    /// Value of the `encoding` form field
    #[serde(default = "defaults::encoding")]
    pub encoding: String,

    /// Login `returnURL` field
    #[serde(default)]
    pub return_url: String,

    /// Login `challenge` field
    #[serde(default)]
    pub challenge: String,

    /// Login `response` field
    #[serde(default)]
    pub response: String,

    /// Listing `GUBUN` field
    #[serde(default)]
    pub gubun: String,

    /// Appended to the note recipient id (`RECV_IDs`)
    #[serde(default = "defaults::recipient_delimiter")]
    pub recipient_delimiter: String,

    /// Appended to a notification link when fetching its detail page
    #[serde(default = "defaults::detail_suffix")]
    pub detail_suffix: String,

    /// Body text the portal emits on bad credentials
    #[serde(default = "defaults::login_failure_marker")]
    pub login_failure_marker: String,

    /// Notification category for assignments
    #[serde(default = "defaults::assignment_type")]
    pub assignment_type: String,

    /// Submission status text meaning "submitted"
    #[serde(default = "defaults::submitted_status")]
    pub submitted_status: String,

    /// Label preceding the deadline in assignment entries
    #[serde(default = "defaults::deadline_label")]
    pub deadline_label: String,

    /// Entries per page for page-based access
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,

    /// Smallest `display` value the listing endpoint handles
    #[serde(default = "defaults::min_display")]
    pub min_display: u32,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            encoding: defaults::encoding(),
            return_url: String::new(),
            challenge: String::new(),
            response: String::new(),
            gubun: String::new(),
            recipient_delimiter: defaults::recipient_delimiter(),
            detail_suffix: defaults::detail_suffix(),
            login_failure_marker: defaults::login_failure_marker(),
            assignment_type: defaults::assignment_type(),
            submitted_status: defaults::submitted_status(),
            deadline_label: defaults::deadline_label(),
            page_size: defaults::page_size(),
            min_display: defaults::min_display(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Portal defaults
    pub fn base_url() -> String {
        "http://lms.pknu.ac.kr".into()
    }
    pub fn login_base_url() -> String {
        "https://lms.pknu.ac.kr".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; pknulms/0.1)".into()
    }
    pub fn accept_invalid_certs() -> bool {
        true
    }

    // Wire defaults
    pub fn encoding() -> String {
        "utf-8".into()
    }
    pub fn recipient_delimiter() -> String {
        "^".into()
    }
    pub fn detail_suffix() -> String {
        "&s=menu&acl=".into()
    }
    pub fn login_failure_marker() -> String {
        "로그인 정보가 일치하지 않습니다.".into()
    }
    pub fn assignment_type() -> String {
        "과제".into()
    }
    pub fn submitted_status() -> String {
        "제출".into()
    }
    pub fn deadline_label() -> String {
        "마감일".into()
    }
    pub fn page_size() -> u32 {
        20
    }
    pub fn min_display() -> u32 {
        8
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_page_size_below_minimum() {
        let mut config = Config::default();
        config.wire.page_size = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.portal.base_url = "lms.pknu.ac.kr".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_broken_selector() {
        let mut config = Config::default();
        config.selectors.anchor_selector = "[[site-link".to_string();
        assert!(matches!(
            config.validate(),
            Err(LmsError::Selector { .. })
        ));
    }

    #[test]
    fn url_joins_origin_and_path() {
        let config = Config::default();
        assert_eq!(
            config.url("/ilos/lo/logout.acl"),
            "http://lms.pknu.ac.kr/ilos/lo/logout.acl"
        );
        assert_eq!(
            config.login_url("/ilos/lo/login.acl"),
            "https://lms.pknu.ac.kr/ilos/lo/login.acl"
        );
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[portal]\nbase_url = \"http://localhost:8080\"\n\n[wire]\npage_size = 10\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.portal.base_url, "http://localhost:8080");
        assert_eq!(config.portal.login_base_url, "https://lms.pknu.ac.kr");
        assert_eq!(config.wire.page_size, 10);
        assert_eq!(config.wire.min_display, 8);
        assert_eq!(config.wire.encoding, "utf-8");
        assert!(config.http.accept_invalid_certs);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/pknulms.toml");
        assert_eq!(config, Config::default());
    }
}
