//! Environment and configuration utilities.

use std::env;

/// Base URL of the official Firebase Hacker News API.
pub const DEFAULT_API_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Base URL of the Algolia Hacker News search API.
pub const DEFAULT_SEARCH_URL: &str = "https://hn.algolia.com/api/v1";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_VAR: &str = "HN_API_URL";

/// Environment variable overriding [`DEFAULT_SEARCH_URL`].
pub const SEARCH_URL_VAR: &str = "HN_SEARCH_URL";

/// Base URLs of the remote APIs.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    api: String,
    search: String,
}

impl Default for Endpoints {
    /// The production endpoints.
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_SEARCH_URL)
    }
}

impl Endpoints {
    /// Creates a set of endpoints from the two base URLs.
    ///
    /// Trailing slashes are dropped, so `https://example.com/v0/` and
    /// `https://example.com/v0` are equivalent.
    pub fn new(api: impl AsRef<str>, search: impl AsRef<str>) -> Self {
        let api = api.as_ref().trim_end_matches('/').to_string();
        let search = search.as_ref().trim_end_matches('/').to_string();
        Self { api, search }
    }

    /// Endpoints read from `$HN_API_URL` and `$HN_SEARCH_URL`, falling
    /// back to the production URLs for variables that are unset or empty.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(API_URL_VAR).ok(), env::var(SEARCH_URL_VAR).ok())
    }

    fn from_vars(api: Option<String>, search: Option<String>) -> Self {
        let api = api.filter(|s| !s.is_empty());
        let search = search.filter(|s| !s.is_empty());
        Self::new(
            api.as_deref().unwrap_or(DEFAULT_API_URL),
            search.as_deref().unwrap_or(DEFAULT_SEARCH_URL),
        )
    }

    /// Base URL of the item and ranking API.
    pub fn api(&self) -> &str {
        &self.api
    }

    /// Base URL of the search API.
    pub fn search(&self) -> &str {
        &self.search
    }
}
