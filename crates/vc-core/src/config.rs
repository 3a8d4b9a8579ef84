//! Detection service configuration

use crate::{CoreError, CoreResult};
use url::Url;

/// Environment variable holding the detection service host
pub const API_HOST_ENV: &str = "VERACITY_API_HOST";

/// Path of the detection endpoint on the configured host
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/check-plagiarism";

/// Where and how to reach the detection service.
///
/// There is deliberately no `Default`: the host must always be supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and optional port of the service
    pub host: Url,

    /// Endpoint path joined onto `host`
    pub endpoint_path: String,

    /// User agent string (native builds only)
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(host: &str) -> CoreResult<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(CoreError::Config(format!(
                "detection service host is empty (set {})",
                API_HOST_ENV
            )));
        }

        let host = Url::parse(host)
            .map_err(|e| CoreError::Config(format!("invalid API host '{}': {}", host, e)))?;

        if !matches!(host.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "unsupported scheme '{}' in API host, expected http or https",
                host.scheme()
            )));
        }

        Ok(Self {
            host,
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            user_agent: format!("VeracityChecker/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Read the host from `VERACITY_API_HOST`. Fails when unset; never falls back to localhost.
    pub fn from_env() -> CoreResult<Self> {
        let host = std::env::var(API_HOST_ENV).map_err(|_| {
            CoreError::Config(format!("{} is not set", API_HOST_ENV))
        })?;
        Self::new(&host)
    }

    /// Same as [`ApiConfig::new`] for a value that may be missing, e.g. one
    /// captured at build time with `option_env!`.
    pub fn from_optional(host: Option<&str>) -> CoreResult<Self> {
        match host {
            Some(host) => Self::new(host),
            None => Err(CoreError::Config(format!("{} is not set", API_HOST_ENV))),
        }
    }

    pub fn with_endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = path.into();
        self
    }

    /// Full endpoint URL. An absolute `endpoint_path` replaces any path on `host`.
    pub fn endpoint(&self) -> CoreResult<Url> {
        self.host.join(&self.endpoint_path).map_err(|e| {
            CoreError::Config(format!(
                "cannot join '{}' onto '{}': {}",
                self.endpoint_path, self.host, e
            ))
        })
    }
}
