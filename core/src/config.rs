//! API base URL resolution.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "CUSTOMER_API_BASE";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Characters left unescaped in a path segment: the unreserved set used by
/// `encodeURIComponent`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resolved base URL of the customer API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    pub fn new(raw: &str) -> Self {
        Self {
            base: raw.trim_end_matches('/').to_string(),
        }
    }

    /// Read `CUSTOMER_API_BASE`, falling back to the local default when it is
    /// unset or blank.
    pub fn from_env() -> Self {
        let raw = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(raw.as_deref())
    }

    fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Join `path` under `<base>/api/`, collapsing duplicate slashes at the
    /// seam.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path.trim_start_matches('/'))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
