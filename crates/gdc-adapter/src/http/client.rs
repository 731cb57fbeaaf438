/*
[INPUT]:  Client identity (base URL, client key, key path, timezone) and transport options
[OUTPUT]: Configured reqwest client and per-call request scopes
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use chrono_tz::Tz;
use reqwest::{Client, Url};

use crate::http::signature::format_timestamp;
use crate::http::{GdcError, Result};

/// Timezone used for `X-Timestamp` when the identity does not name one
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Who the client is towards the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub base_url: String,
    pub client_key: String,
    pub private_key_path: PathBuf,
    /// IANA timezone name, `Asia/Jakarta` when absent
    pub timezone: Option<String>,
}

impl ClientIdentity {
    pub fn new(
        base_url: impl Into<String>,
        client_key: impl Into<String>,
        private_key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_key: client_key.into(),
            private_key_path: private_key_path.into(),
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// Main HTTP client for the GDC disbursement API
///
/// Holds no per-call state, so one instance can serve concurrent calls.
#[derive(Debug)]
pub struct GdcClient {
    http_client: Client,
    identity: ClientIdentity,
    base_url: String,
    timezone: Tz,
}

impl GdcClient {
    /// Create a new client with default transport configuration
    pub fn new(identity: ClientIdentity) -> Result<Self> {
        Self::with_config(identity, ClientConfig::default())
    }

    /// Create a new client with custom transport configuration
    pub fn with_config(identity: ClientIdentity, config: ClientConfig) -> Result<Self> {
        let timezone_name = identity.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|e| GdcError::Config(format!("Unknown timezone {timezone_name:?}: {e}")))?;

        let base_url = identity.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| GdcError::Config(format!("Invalid base URL {base_url:?}: {e}")))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| GdcError::Config(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            identity,
            base_url,
            timezone,
        })
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Pin `access_token` for exactly one call
    ///
    /// The returned scope is consumed by the operation it runs, so the token
    /// is released when that call returns, whatever the outcome.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> RequestScope<'_> {
        RequestScope {
            client: self,
            access_token: Some(access_token.into()),
        }
    }

    /// Scope with no pinned token; the call acquires a fresh one
    pub fn unpinned(&self) -> RequestScope<'_> {
        RequestScope {
            client: self,
            access_token: None,
        }
    }

    /// Current time rendered in the client's timezone
    pub(crate) fn timestamp(&self) -> String {
        format_timestamp(Utc::now(), self.timezone)
    }

    /// `{base_url}{path}`, where `path` carries its own query string
    pub(crate) fn endpoint(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        Url::parse(&format!("{}{}", self.base_url, path))
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }
}

/// One outbound call, optionally with a caller-supplied access token
#[derive(Debug)]
pub struct RequestScope<'a> {
    pub(crate) client: &'a GdcClient,
    pub(crate) access_token: Option<String>,
}

impl RequestScope<'_> {
    /// Token pinned for this call, if any
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
