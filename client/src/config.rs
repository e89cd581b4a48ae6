//! REST endpoint configuration.
//!
//! The API base is baked in at build time from `BLUEPRINT_API_BASE`; when it
//! is unset, requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Cookie the server sets for CSRF protection.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Header that carries the CSRF token on writes.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Where the design REST endpoints live and how writes are authorized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint path, without a trailing slash.
    pub base: String,
    pub csrf_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("BLUEPRINT_API_BASE").unwrap_or(""))
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned(), csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned() }
    }

    /// Absolute or origin-relative URL for an endpoint path starting with `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}
