//! Endpoint URL normalization
//!
//! Operators configure a single base URL. Older configurations point it at the
//! GraphQL endpoint itself (`https://host/v1/public/graphql`), newer ones at the
//! API root (`https://host/v1`). Both forms resolve to the same endpoints, and
//! any prefix in front of the known suffix (such as an API gateway stage) is
//! kept as is.

/// Path of the GraphQL endpoint below the API root
pub const GRAPHQL_PATH: &str = "/public/graphql";

/// Path of the HTTP log source family below the REST root
pub const HTTP_SOURCE_PATH: &str = "/log-sources/http";

/// Strip the GraphQL suffix from a configured URL, if present
///
/// Only a whole trailing `/public/graphql` is removed; a URL that merely ends
/// in the same characters (`/xpublic/graphql`) is returned unchanged.
pub fn trim_url(url: &str) -> &str {
    let url = url.strip_suffix('/').unwrap_or(url);
    url.strip_suffix(GRAPHQL_PATH).unwrap_or(url)
}

/// Endpoint URLs derived from a configured base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// API root, without any protocol suffix
    pub root: String,
    /// GraphQL endpoint
    pub graphql: String,
    /// Root below which every REST family path is appended
    pub rest: String,
}

impl Endpoints {
    /// Derive the endpoints from an operator-supplied base URL
    pub fn from_base_url(url: &str) -> Self {
        let root = trim_url(url).to_string();
        Self {
            graphql: format!("{}{}", root, GRAPHQL_PATH),
            rest: root.clone(),
            root,
        }
    }

    /// Full URL of a REST family, e.g. `/rules`
    pub fn rest_url(&self, family_path: &str) -> String {
        format!("{}{}", self.rest, family_path)
    }

    /// Endpoint of the HTTP log source family
    pub fn http_source_url(&self) -> String {
        self.rest_url(HTTP_SOURCE_PATH)
    }
}
