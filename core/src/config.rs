//! Run configuration shared by every scenario.
//!
//! Built once before the first scenario and only read afterwards.

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Header carrying the API key some reqres deployments require.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    base_url: String,
    api_key: Option<String>,
}

impl SuiteConfig {
    /// Validate `base_url` and strip any trailing slash. Only http(s) URLs
    /// with a host and without query or fragment are accepted.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url.trim()).map_err(|e| {
            ApiError::InvalidConfig(format!("base url {base_url:?} is not a valid URL: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig(format!(
                "base url must be http(s): {base_url:?}"
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ApiError::InvalidConfig(format!(
                "base url has no host: {base_url:?}"
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::InvalidConfig(format!(
                "base url must not carry a query or fragment: {base_url:?}"
            )));
        }
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}
