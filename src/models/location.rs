use serde::{Deserialize, Serialize};

/// Location state carried by a navigation history.
///
/// Mirrors the subset of the host's location object the redirect helper
/// consumes: the query string, and the full href where the platform exposes
/// one (the non-DOM runtime reports its bundle URL here; browsers may omit it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Current path component of the route.
    #[serde(default)]
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    #[serde(default)]
    pub search: String,
    /// Full URL, where the platform provides one.
    #[serde(default)]
    pub href: Option<String>,
}

impl Location {
    /// A location with only a query string, the common case in tests and in
    /// memory-backed histories.
    pub fn with_search(search: impl Into<String>) -> Self {
        Location {
            pathname: String::new(),
            search: search.into(),
            href: None,
        }
    }
}
