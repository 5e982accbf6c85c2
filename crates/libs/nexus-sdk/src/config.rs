use crate::error::SdkError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout handed to the transport. `None` blocks until the
    /// transport resolves or fails.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: format!("nexus-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: &str) -> Result<Self, SdkError> {
        self.base_url = validate_base_url(url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the base URL when `url` is acceptable. On rejection the
    /// previous value stays in effect.
    pub fn set_base_url(&mut self, url: &str) -> Result<(), SdkError> {
        self.base_url = validate_base_url(url)?;
        Ok(())
    }

    pub fn endpoint(&self, family: &str, action: &str) -> String {
        format!("{}/{}/{}", self.base_url, family, action)
    }
}

/// Accepts `http://<host>:<port>` with an optional trailing `/`, returning the
/// URL without the slash.
pub fn validate_base_url(url: &str) -> Result<String, SdkError> {
    let trimmed = url.trim();
    let Some(rest) = trimmed.strip_prefix("http://") else {
        return Err(SdkError::invalid_url(url, "must start with http://"));
    };
    if trimmed.matches(':').count() != 2 {
        return Err(SdkError::invalid_url(url, "must contain exactly one host:port separator"));
    }
    let Some((host, port)) = rest.split_once(':') else {
        return Err(SdkError::invalid_url(url, "missing port"));
    };
    if host.is_empty() || host.contains('/') {
        return Err(SdkError::invalid_url(url, "missing host"));
    }
    let port = port.strip_suffix('/').unwrap_or(port);
    if port.is_empty() || !port.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(SdkError::invalid_url(url, "port must be numeric"));
    }
    if port.parse::<u16>().is_err() {
        return Err(SdkError::invalid_url(url, "port out of range"));
    }
    Ok(format!("http://{host}:{port}"))
}
