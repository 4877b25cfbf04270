//! Runtime configuration shared by the page controllers.
//!
//! # Design
//! - Built once at boot from the browser location; plain data afterwards.
//! - Origins are normalised to `scheme://host[:port]` without a trailing slash.

use thiserror::Error;
use url::Url;

/// Origin of the default (unbranded) deployment used in local development.
pub const DEFAULT_SERVER_ORIGIN: &str = "http://localhost:5000";
/// API base used in local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/v2";

/// Failure to derive configuration from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The URL could not be parsed.
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl {
        /// Offending input.
        url: String,
        /// Parser message.
        reason: String,
    },
    /// The URL has no tuple origin (e.g. `data:` or `file:` URLs).
    #[error("url `{0}` has no usable origin")]
    OpaqueOrigin(String),
}

/// Deployment-level settings consumed by the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin serving the default, unbranded site.
    pub server_origin: String,
    /// Origin the UI is currently served from (branded subdomains differ).
    pub current_origin: String,
    /// Base URL for the JSON API.
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_origin: DEFAULT_SERVER_ORIGIN.to_string(),
            current_origin: DEFAULT_SERVER_ORIGIN.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build a configuration for a page served from `href`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `href` is not an absolute URL with an origin.
    pub fn for_location(href: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            current_origin: origin_of(href)?,
            ..Self::default()
        })
    }

    /// Override the server origin, normalising it first.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `origin` is not an absolute URL with an origin.
    pub fn with_server_origin(mut self, origin: &str) -> Result<Self, ConfigError> {
        self.server_origin = origin_of(origin)?;
        Ok(self)
    }

    /// Override the API base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn with_api_base_url(mut self, base: &str) -> Self {
        self.api_base_url = base.trim_end_matches('/').to_string();
        self
    }
}

/// Serialise the origin (`scheme://host[:port]`) of an absolute URL.
///
/// # Errors
/// Returns [`ConfigError`] when the URL is invalid or has an opaque origin.
pub fn origin_of(href: &str) -> Result<String, ConfigError> {
    let url = Url::parse(href).map_err(|err| ConfigError::InvalidUrl {
        url: href.to_string(),
        reason: err.to_string(),
    })?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(ConfigError::OpaqueOrigin(href.to_string()));
    }
    Ok(origin.ascii_serialization())
}
