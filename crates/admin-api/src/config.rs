//! Client configuration and the authentication header derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Path of the administrative query endpoint, appended to the configured base URL.
pub const QUERY_PATH: &str = "/v1/query";

/// Header carrying the shared admin secret on every request.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Environment variable read by [`HasuraConfig::from_env`] for the base URL.
pub const ENDPOINT_ENV: &str = "HASURA_ENDPOINT";

/// Environment variable read by [`HasuraConfig::from_env`] for the admin secret.
pub const ADMIN_SECRET_ENV: &str = "HASURA_ADMIN_SECRET";

const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
const DEFAULT_ADMIN_SECRET: &str = "myadminsecretkey";

/// Headers attached to every administrative request.
pub type AdminHeaders = BTreeMap<String, String>;

/// Base URL and shared secret of a remote administrative endpoint.
///
/// Both values are stored verbatim; the URL is not parsed or validated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasuraConfig {
    /// Base URL, e.g. `"http://localhost:8080"` (no trailing `/v1/query`).
    pub endpoint: String,
    #[serde(alias = "adminSecret")]
    pub admin_secret: String,
}

impl HasuraConfig {
    /// Stores `endpoint` and `admin_secret` verbatim.
    pub fn new(endpoint: impl Into<String>, admin_secret: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            admin_secret: admin_secret.into(),
        }
    }

    /// Reads `HASURA_ENDPOINT` and `HASURA_ADMIN_SECRET`, falling back to
    /// `http://localhost:8080` and `myadminsecretkey` for a local development
    /// instance.
    ///
    /// Nothing else in this workspace reads the environment; callers opt in here.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        let admin_secret =
            std::env::var(ADMIN_SECRET_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_owned());
        Self::new(endpoint, admin_secret)
    }

    /// Returns `<endpoint>/v1/query`.
    pub fn query_endpoint(&self) -> String {
        format!("{}{}", self.endpoint, QUERY_PATH)
    }

    /// Returns the single-entry authentication header map.
    pub fn admin_headers(&self) -> AdminHeaders {
        let mut headers = AdminHeaders::new();
        headers.insert(ADMIN_SECRET_HEADER.to_owned(), self.admin_secret.clone());
        headers
    }
}

// The secret never appears in debug output.
impl std::fmt::Debug for HasuraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HasuraConfig")
            .field("endpoint", &self.endpoint)
            .field("admin_secret", &"<redacted>")
            .finish()
    }
}
